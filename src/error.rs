//! Error types for site configuration and catalog loading

use thiserror::Error;

/// The error type for loading site configuration and content tables
///
/// Link and text helpers are total and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    /// Configuration or data file could not be parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Public site origin is not an http(s) URL
    #[error("Site origin must start with http:// or https://: {site}")]
    InvalidSite { site: String },

    /// Catalog slug differs from its normalized form
    #[error("Slug '{slug}' is not canonical (expected '{expected}')")]
    NonCanonicalSlug { slug: String, expected: String },

    /// Two catalog entries share a slug
    #[error("Duplicate flower slug: {slug}")]
    DuplicateSlug { slug: String },

    /// Reference to a flower that is not in the catalog
    #[error("Unknown flower '{slug}' referenced by {referenced_by}")]
    UnknownFlower { slug: String, referenced_by: String },

    /// I/O error while reading configuration
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::Io {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SiteError {
    fn from(err: toml::de::Error) -> Self {
        SiteError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for site loading operations
pub type Result<T> = std::result::Result<T, SiteError>;
