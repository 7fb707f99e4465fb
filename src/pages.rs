//! The site's fixed set of pages and their links

use crate::config::SiteConfig;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    /// Main landing page linked from campaigns
    Landing,
    Flowers,
    Services,
    Rates,
    Contact,
    NotFound,
}

impl Page {
    /// Pages in navigation bar order
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::Flowers,
        Page::Services,
        Page::Rates,
        Page::Contact,
    ];

    /// Path relative to the site base
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Landing => "hero-b/",
            Page::Flowers => "flores/",
            Page::Services => "servicios/",
            Page::Rates => "tarifas/",
            Page::Contact => "contacto/",
            Page::NotFound => "404.html",
        }
    }

    /// Document title
    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Terapia Floral Silvia Adame",
            Page::Landing => "Terapia Floral de Bach",
            Page::Flowers => "Flores de Bach",
            Page::Services => "Servicios",
            Page::Rates => "Tarifas",
            Page::Contact => "Contacto",
            Page::NotFound => "Página no encontrada",
        }
    }
}

/// A resolved navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub title: &'static str,
    pub href: String,
}

impl SiteConfig {
    /// Link to a page under this site's base path
    ///
    /// # Examples
    /// ```
    /// use floral_site::{Page, SiteConfig};
    ///
    /// let config = SiteConfig::default().with_base("/terapia-floral-silvia");
    /// assert_eq!(config.href(Page::Contact), "/terapia-floral-silvia/contacto/");
    /// assert_eq!(config.href(Page::Home), "/terapia-floral-silvia/");
    /// ```
    pub fn href(&self, page: Page) -> String {
        self.link(page.path())
    }
}

/// Navigation bar entries for a deployment
pub fn nav_links(config: &SiteConfig) -> Vec<NavLink> {
    Page::NAV
        .iter()
        .map(|&page| NavLink {
            page,
            title: page.title(),
            href: config.href(page),
        })
        .collect()
}
