//! # floral-site
//!
//! Link, slug and catalog helpers for the Terapia Floral static site.
//!
//! The site can be served from the domain root or from a sub-path such as a
//! project pages directory. Every internal link goes through [`join`], which
//! glues a base prefix and a relative fragment together with exactly one slash
//! no matter how much slash noise either side carries.
//!
//! ## Features
//!
//! - **Base-path links**: [`join`], [`link`], [`normalize`], [`collapse_base`]
//! - **Build configuration**: [`SiteConfig`] carries the deployment base path as
//!   an immutable value, loaded from TOML or the `BASE_URL` variable
//! - **Text helpers**: slugs, permissive email checks, capitalization, truncation
//! - **Catalog**: the bundled Bach flower remedy table, validated on load
//! - **Pages**: the fixed page set and its navigation links
//!
//! ## Examples
//!
//! ### Joining links
//!
//! ```rust
//! use floral_site::join;
//!
//! assert_eq!(join("contacto/", "/terapia-floral-silvia/"), "/terapia-floral-silvia/contacto/");
//! assert_eq!(join("//contacto/", "/base///"), "/base/contacto/");
//! assert_eq!(join("images/logo.png", "/site/"), "/site/images/logo.png");
//! ```
//!
//! ### Links for a deployment
//!
//! ```rust
//! use floral_site::{nav_links, Catalog, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(r#"base = "/terapia-floral-silvia/""#).unwrap();
//! let catalog = Catalog::builtin().unwrap();
//!
//! let mimulus = catalog.get("mimulus").unwrap();
//! assert_eq!(config.link(&mimulus.page_path()), "/terapia-floral-silvia/flores/mimulus/");
//! assert_eq!(nav_links(&config)[0].href, "/terapia-floral-silvia/");
//! ```
//!
//! ### Contact form text
//!
//! ```rust
//! use floral_site::{normalize_slug, truncate, validate_email};
//!
//! assert_eq!(normalize_slug("White Chestnut"), "white-chestnut");
//! assert!(validate_email("biomiflor@hotmail.com"));
//! assert_eq!(truncate("Hello World   ", 8), "Hello Wo...");
//! ```

mod catalog;
mod config;
mod error;
mod pages;
mod text;
mod url;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use catalog::{Catalog, Flower, Group, RescueRemedy};
pub use config::{SiteConfig, BASE_URL_ENV};
pub use error::{Result, SiteError};
pub use pages::{nav_links, NavLink, Page};
pub use text::{capitalize, normalize_slug, truncate, validate_email};
pub use url::{collapse_base, join, link, normalize, DEFAULT_BASE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
