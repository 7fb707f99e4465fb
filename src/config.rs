//! Site configuration
//!
//! The deployment base path is fixed when the site is built. It lives in an
//! immutable [`SiteConfig`] that page-building code receives explicitly; nothing
//! in this crate reads it from global state after construction.

use crate::error::{Result, SiteError};
use crate::url::{collapse_base, join, DEFAULT_BASE};
use serde::Deserialize;
use std::path::Path;

/// Environment variable carrying the deployment base path at build time
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Build-time site settings
///
/// ```toml
/// site = "https://david-ls-bilbao.github.io"
/// base = "/terapia-floral-silvia/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    site: Option<String>,
    base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: None,
            base: DEFAULT_BASE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document
    ///
    /// # Examples
    /// ```
    /// use floral_site::SiteConfig;
    ///
    /// let config = SiteConfig::from_toml_str(r#"base = "/terapia-floral-silvia""#).unwrap();
    /// assert_eq!(config.link("contacto/"), "/terapia-floral-silvia/contacto/");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "cannot read site config");
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), base = %config.base, "loaded site config");
        Ok(config)
    }

    /// Build from the value of the `BASE_URL` variable, `/` when unset
    pub fn from_env_value(base: Option<&str>) -> Self {
        Self::default().with_base(base.unwrap_or(DEFAULT_BASE))
    }

    /// Build from the process environment
    ///
    /// A `BASE_URL` that is not valid UTF-8 is treated as unset.
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).ok();
        if base.is_none() {
            tracing::debug!("{} not set, serving from /", BASE_URL_ENV);
        }
        Self::from_env_value(base.as_deref())
    }

    /// Replace the deployment base path
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set the public site URL
    pub fn with_site(mut self, site: impl Into<String>) -> Result<Self> {
        self.site = Some(site.into());
        self.validate()?;
        Ok(self)
    }

    /// Base path as configured
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Public site URL, if configured
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Base path with trailing slash noise collapsed
    ///
    /// # Examples
    /// ```
    /// use floral_site::SiteConfig;
    ///
    /// let config = SiteConfig::default().with_base("/terapia-floral-silvia///");
    /// assert_eq!(config.current_base(), "/terapia-floral-silvia/");
    /// assert_eq!(SiteConfig::default().current_base(), "/");
    /// ```
    pub fn current_base(&self) -> String {
        if self.base.is_empty() {
            return DEFAULT_BASE.to_string();
        }
        collapse_base(&self.base)
    }

    /// Internal link for a fragment under this site's base path
    pub fn link(&self, fragment: &str) -> String {
        join(fragment, &self.current_base())
    }

    /// Fully qualified URL for a fragment, when the public site URL is known
    ///
    /// # Examples
    /// ```
    /// use floral_site::SiteConfig;
    ///
    /// let config = SiteConfig::default()
    ///     .with_base("/terapia-floral-silvia/")
    ///     .with_site("https://david-ls-bilbao.github.io/")
    ///     .unwrap();
    /// assert_eq!(
    ///     config.absolute_url("contacto/").as_deref(),
    ///     Some("https://david-ls-bilbao.github.io/terapia-floral-silvia/contacto/")
    /// );
    /// ```
    pub fn absolute_url(&self, fragment: &str) -> Option<String> {
        self.site
            .as_deref()
            .map(|site| format!("{}{}", site.trim_end_matches('/'), self.link(fragment)))
    }

    fn validate(&self) -> Result<()> {
        if let Some(site) = &self.site {
            if !(site.starts_with("https://") || site.starts_with("http://")) {
                return Err(SiteError::InvalidSite { site: site.clone() });
            }
        }
        Ok(())
    }
}
