//! Site configuration: page copy plus the dashboard catalog
//!
//! The configuration is a TOML document embedded at build time. Parsing
//! happens once when the page starts; the result is read-only afterwards.

use serde::Deserialize;
use url::Url;

use crate::catalog::{Catalog, RawLinkEntry};
use crate::error::Error;
use crate::result::Result;

/// Configuration shipped with the page
pub const BUILTIN_SITE: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub accent: String,
    #[serde(default)]
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroConfig {
    #[serde(default)]
    pub badge: String,
    pub title: String,
    pub highlight: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    pub placeholder: String,
    pub empty_message: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder: "Buscar projeto ou painel...".to_string(),
            empty_message: "Nenhum painel encontrado.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardsConfig {
    /// Call to action printed at the bottom of every card
    pub cta: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            cta: "Acessar Painel".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterConfig {
    pub company: String,
    #[serde(default)]
    pub tagline: String,
}

impl FooterConfig {
    /// Copyright line for the given year
    pub fn copyright(&self, year: i32) -> String {
        if self.tagline.is_empty() {
            format!("© {year} {}.", self.company)
        } else {
            format!("© {year} {}. {}", self.company, self.tagline)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundConfig {
    /// Decorative looping video; `None` leaves only the fallback gradient
    pub video_url: Option<Url>,
}

#[derive(Debug, Deserialize)]
struct RawBackground {
    #[serde(default)]
    video_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    brand: BrandConfig,
    hero: HeroConfig,
    #[serde(default)]
    search: SearchConfig,
    #[serde(default)]
    cards: CardsConfig,
    #[serde(default)]
    background: Option<RawBackground>,
    footer: FooterConfig,
    entries: Vec<RawLinkEntry>,
}

/// Fully validated site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub hero: HeroConfig,
    pub search: SearchConfig,
    pub cards: CardsConfig,
    pub background: BackgroundConfig,
    pub footer: FooterConfig,
    pub catalog: Catalog,
}

impl SiteConfig {
    /// Parse the configuration embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is malformed or the
    /// catalog fails validation.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_SITE)
    }

    /// Parse and validate a TOML site document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML or missing
    /// sections, and catalog validation errors for bad entries.
    pub fn from_toml(source: &str) -> Result<Self> {
        let raw: RawSite =
            toml::from_str(source).map_err(|e| Error::config_parse_failed(e.to_string()))?;

        let video_url = raw
            .background
            .and_then(|bg| bg.video_url)
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                Url::parse(&url).map_err(|e| Error::invalid_url("background.video_url", e.to_string()))
            })
            .transpose()?;

        let catalog = Catalog::new(raw.entries)?;
        tracing::debug!(
            entries = catalog.len(),
            has_video = video_url.is_some(),
            "site configuration loaded"
        );

        Ok(Self {
            brand: raw.brand,
            hero: raw.hero,
            search: raw.search,
            cards: raw.cards,
            background: BackgroundConfig { video_url },
            footer: raw.footer,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    const MINIMAL: &str = r#"
        [brand]
        name = "ACME"
        accent = "LOG"

        [hero]
        title = "Painel de"
        highlight = "Resultados"

        [footer]
        company = "ACME"

        [[entries]]
        id = "one"
        name = "One"
        url = "https://one.example/"
        icon = "users"
        color = "blue"
    "#;

    #[test]
    fn test_minimal_document_uses_defaults() -> Result<()> {
        let site = SiteConfig::from_toml(MINIMAL)?;
        assert_eq!(site.catalog.len(), 1);
        assert_eq!(site.search, SearchConfig::default());
        assert_eq!(site.cards.cta, "Acessar Painel");
        assert_eq!(site.background.video_url, None);
        assert_eq!(site.brand.status_label, "");
        Ok(())
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = SiteConfig::from_toml("[brand");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let result = SiteConfig::from_toml("[brand]\nname = \"x\"\naccent = \"y\"\n");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let doc = MINIMAL.replace("icon = \"users\"", "icon = \"rocket\"");
        assert!(matches!(
            SiteConfig::from_toml(&doc),
            Err(Error::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_catalog_errors_propagate() {
        let doc = MINIMAL.replace("https://one.example/", "not a url");
        let err = SiteConfig::from_toml(&doc).expect_err("bad url");
        assert!(matches!(err, Error::InvalidUrl { ref id, .. } if id == "one"));
    }

    #[test]
    fn test_copyright_line() {
        let footer = FooterConfig {
            company: "São Luiz Express".to_string(),
            tagline: "Logística Inteligente.".to_string(),
        };
        assert_eq!(
            footer.copyright(2026),
            "© 2026 São Luiz Express. Logística Inteligente."
        );

        let bare = FooterConfig {
            company: "ACME".to_string(),
            tagline: String::new(),
        };
        assert_eq!(bare.copyright(2026), "© 2026 ACME.");
    }
}
