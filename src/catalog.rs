//! Flower remedy catalog
//!
//! The catalog is a static table bundled with the crate (`data/flores.toml`).
//! It is validated once on load so page code can rely on unique, canonical
//! slugs and on the rescue remedy naming real flowers.

use crate::error::{Result, SiteError};
use crate::text::normalize_slug;
use serde::Deserialize;
use std::collections::HashSet;

static BUILTIN_CATALOG: &str = include_str!("../data/flores.toml");

/// Emotional category a remedy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Group {
    #[serde(rename = "Miedo")]
    Fear,
    #[serde(rename = "Incertidumbre")]
    Uncertainty,
    #[serde(rename = "Falta de interés en el presente")]
    Disinterest,
    #[serde(rename = "Soledad")]
    Loneliness,
    #[serde(rename = "Hipersensibilidad")]
    Oversensitivity,
    #[serde(rename = "Desaliento o desesperación")]
    Despair,
    #[serde(rename = "Preocupación excesiva por los demás")]
    OverCare,
}

impl Group {
    /// All groups in display order
    pub const ALL: [Group; 7] = [
        Group::Fear,
        Group::Uncertainty,
        Group::Disinterest,
        Group::Loneliness,
        Group::Oversensitivity,
        Group::Despair,
        Group::OverCare,
    ];

    /// Heading shown on the site
    pub const fn label(self) -> &'static str {
        match self {
            Group::Fear => "Miedo",
            Group::Uncertainty => "Incertidumbre",
            Group::Disinterest => "Falta de interés en el presente",
            Group::Loneliness => "Soledad",
            Group::Oversensitivity => "Hipersensibilidad",
            Group::Despair => "Desaliento o desesperación",
            Group::OverCare => "Preocupación excesiva por los demás",
        }
    }

    /// Anchor id for the group section on the catalog page
    pub const fn slug(self) -> &'static str {
        match self {
            Group::Fear => "miedo",
            Group::Uncertainty => "incertidumbre",
            Group::Disinterest => "falta-de-interes",
            Group::Loneliness => "soledad",
            Group::Oversensitivity => "hipersensibilidad",
            Group::Despair => "desaliento",
            Group::OverCare => "preocupacion-por-los-demas",
        }
    }
}

/// A single remedy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flower {
    pub slug: String,
    /// Spanish name
    pub es: String,
    /// English name
    pub en: String,
    pub group: Group,
    /// Image path relative to the site base
    pub img: Option<String>,
    /// One or two lines for cards and listings
    pub brief: Option<String>,
    /// Long text for the detail page
    pub detail: Option<String>,
}

impl Flower {
    /// Image path relative to the site base, falling back to the SVG placeholder
    pub fn image_path(&self) -> String {
        match &self.img {
            Some(img) => img.clone(),
            None => format!("flores/{}.svg", self.slug),
        }
    }

    /// Detail page path relative to the site base
    pub fn page_path(&self) -> String {
        format!("flores/{}/", self.slug)
    }
}

/// Emergency blend shown apart from the main catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RescueRemedy {
    pub slug: String,
    pub es: String,
    pub en: String,
    /// Slugs of the flowers in the blend
    pub blend: Vec<String>,
    pub brief: String,
    pub detail: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(rename = "flower", default)]
    flowers: Vec<Flower>,
    rescue_remedy: RescueRemedy,
}

/// Validated remedy catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    flowers: Vec<Flower>,
    rescue_remedy: RescueRemedy,
}

impl Catalog {
    /// Load the catalog bundled with the crate
    ///
    /// # Examples
    /// ```
    /// use floral_site::{Catalog, Group};
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// let rock_rose = catalog.get("rock-rose").unwrap();
    /// assert_eq!(rock_rose.group, Group::Fear);
    /// assert_eq!(rock_rose.page_path(), "flores/rock-rose/");
    /// ```
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog table
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        let catalog = Catalog {
            flowers: file.flowers,
            rescue_remedy: file.rescue_remedy,
        };
        catalog.validate()?;
        tracing::debug!(flowers = catalog.flowers.len(), "catalog loaded");
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for flower in &self.flowers {
            check_canonical(&flower.slug)?;
            if !seen.insert(flower.slug.as_str()) {
                return Err(SiteError::DuplicateSlug {
                    slug: flower.slug.clone(),
                });
            }
            if flower.img.is_none() {
                tracing::debug!(slug = %flower.slug, "no image, using placeholder");
            }
        }

        check_canonical(&self.rescue_remedy.slug)?;
        for slug in &self.rescue_remedy.blend {
            if !seen.contains(slug.as_str()) {
                return Err(SiteError::UnknownFlower {
                    slug: slug.clone(),
                    referenced_by: self.rescue_remedy.slug.clone(),
                });
            }
        }
        Ok(())
    }

    /// All flowers in table order
    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Look up a flower by slug
    pub fn get(&self, slug: &str) -> Option<&Flower> {
        self.flowers.iter().find(|f| f.slug == slug)
    }

    /// Flowers of one group in table order
    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &Flower> + '_ {
        self.flowers.iter().filter(move |f| f.group == group)
    }

    /// Flowers bucketed by group, in display order, skipping empty groups
    pub fn grouped(&self) -> Vec<(Group, Vec<&Flower>)> {
        Group::ALL
            .iter()
            .map(|&group| (group, self.in_group(group).collect::<Vec<_>>()))
            .filter(|(_, flowers)| !flowers.is_empty())
            .collect()
    }

    pub fn rescue_remedy(&self) -> &RescueRemedy {
        &self.rescue_remedy
    }

    /// Flowers making up the rescue remedy, in blend order
    pub fn blend(&self) -> Vec<&Flower> {
        self.rescue_remedy
            .blend
            .iter()
            .filter_map(|slug| self.get(slug))
            .collect()
    }
}

fn check_canonical(slug: &str) -> Result<()> {
    let expected = normalize_slug(slug);
    if expected != slug {
        return Err(SiteError::NonCanonicalSlug {
            slug: slug.to_string(),
            expected,
        });
    }
    Ok(())
}
