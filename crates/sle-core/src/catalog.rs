//! The fixed, ordered list of external dashboards shown on the page
//!
//! A [`Catalog`] is built once from configuration and never mutated. Every
//! entry is validated on construction: ids are unique, names are present,
//! and destinations are absolute `http`/`https` URLs.

use std::collections::HashSet;

use serde::Deserialize;
use url::Url;

use crate::colors::ColorTag;
use crate::error::Error;
use crate::icon::Icon;
use crate::result::Result;

/// Browsing context every card opens its destination in
pub const LINK_TARGET: &str = "_blank";

/// Link relation suppressing the referrer and opener handle
pub const LINK_REL: &str = "noopener noreferrer";

/// One external dashboard link and its display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Extended text shown verbatim in the hover tooltip
    pub details: String,
    pub url: Url,
    pub icon: Icon,
    pub color: ColorTag,
}

/// Unvalidated entry as it appears in configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RawLinkEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    pub url: String,
    pub icon: Icon,
    pub color: ColorTag,
}

impl TryFrom<RawLinkEntry> for LinkEntry {
    type Error = Error;

    fn try_from(raw: RawLinkEntry) -> Result<Self> {
        if raw.id.trim().is_empty() {
            return Err(Error::empty_field(raw.name, "id"));
        }
        if raw.name.trim().is_empty() {
            return Err(Error::empty_field(raw.id, "name"));
        }

        let url = Url::parse(&raw.url).map_err(|e| Error::invalid_url(&raw.id, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme {
                id: raw.id,
                scheme: url.scheme().to_string(),
            });
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            details: raw.details,
            url,
            icon: raw.icon,
            color: raw.color,
        })
    }
}

impl LinkEntry {
    /// Destination exactly as the anchor's `href` carries it
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// True when `query` (already folded) occurs in name, description, or details
    fn matches_folded(&self, query: &str) -> bool {
        [&self.name, &self.description, &self.details]
            .iter()
            .any(|field| fold(field).contains(query))
    }
}

/// Ordered, immutable set of link entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<LinkEntry>,
}

impl Catalog {
    /// Validate and build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty, an id repeats, or any entry
    /// fails validation.
    pub fn new(raw: Vec<RawLinkEntry>) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(raw.len());
        let entries = raw
            .into_iter()
            .map(|entry| {
                if !seen.insert(entry.id.clone()) {
                    return Err(Error::DuplicateEntryId { id: entry.id });
                }
                LinkEntry::try_from(entry)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(entries = entries.len(), "catalog built");
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LinkEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Entries matching a free-text query, in catalog order.
    ///
    /// Matching ignores case and Portuguese diacritics. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&LinkEntry> {
        let needle = fold(query.trim());
        if needle.is_empty() {
            return self.entries.iter().collect();
        }

        let hits: Vec<&LinkEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches_folded(&needle))
            .collect();
        tracing::debug!(query = %needle, hits = hits.len(), "catalog search");
        hits
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Combining diacritical marks left behind by decomposed (NFD) input
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Lowercase and strip the diacritics used in Portuguese, precomposed or not
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use proptest::prelude::*;

    fn raw(id: &str, name: &str, url: &str) -> RawLinkEntry {
        RawLinkEntry {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{name} description"),
            details: format!("{name} details"),
            url: url.to_string(),
            icon: Icon::Users,
            color: ColorTag::Blue,
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            raw("faturamento", "Faturamento", "https://painel-faturamento.vercel.app/"),
            raw("pendencias", "Pendências", "https://pendencias-sle.vercel.app/#/login"),
            raw("clientes", "Painel de Clientes", "https://clientes-overview.vercel.app/"),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["faturamento", "pendencias", "clientes"]);
        assert_eq!(catalog.position("clientes"), Some(2));
    }

    #[test]
    fn test_href_is_exact_url() {
        let catalog = sample();
        let entry = catalog.get("faturamento").expect("present");
        assert_eq!(entry.href(), "https://painel-faturamento.vercel.app/");

        // Fragment routes survive untouched
        let entry = catalog.get("pendencias").expect("present");
        assert_eq!(entry.href(), "https://pendencias-sle.vercel.app/#/login");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(Error::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            raw("a", "A", "https://a.example/"),
            raw("a", "B", "https://b.example/"),
        ]);
        assert_eq!(
            result,
            Err(Error::DuplicateEntryId {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        let result = Catalog::new(vec![raw("a", "A", "/relative")]);
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = Catalog::new(vec![raw("a", "A", "javascript:alert(1)")]);
        assert!(matches!(result, Err(Error::UnsupportedScheme { .. })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Catalog::new(vec![raw("a", "  ", "https://a.example/")]);
        assert_eq!(result, Err(Error::empty_field("a", "name")));
    }

    #[test]
    fn test_search_blank_returns_all() {
        let catalog = sample();
        assert_eq!(catalog.search("   ").len(), catalog.len());
    }

    #[test]
    fn test_search_ignores_case_and_accents() {
        let catalog = sample();
        let hits = catalog.search("PENDENCIAS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|e| e.id.as_str()), Some("pendencias"));
    }

    #[test]
    fn test_search_no_match() {
        assert!(sample().search("redespacho").is_empty());
    }

    #[test]
    fn test_search_matches_decomposed_accents() {
        let catalog = sample();
        for query in ["Pendências", "Pende\u{0302}ncias", "PENDE\u{0302}NCIAS"] {
            let hits: Vec<&str> = catalog.search(query).iter().map(|e| e.id.as_str()).collect();
            assert_eq!(hits, ["pendencias"], "query {query:?}");
        }
    }

    #[test]
    fn test_decomposed_entry_text_matches_plain_query() -> Result<()> {
        let catalog = Catalog::new(vec![raw("ops", "Operac\u{0327}o\u{0303}es", "https://ops.example/")])?;
        assert_eq!(catalog.search("operacoes").len(), 1);
        assert_eq!(catalog.search("operações").len(), 1);
        Ok(())
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Emissão de CTe"), "emissao de cte");
        assert_eq!(fold("Métricas"), "metricas");
        assert_eq!(fold("Me\u{0301}tricas"), "metricas");
    }

    proptest! {
        #[test]
        fn prop_search_preserves_catalog_order(query in "[a-zA-Z ]{0,6}") {
            let catalog = sample();
            let positions: Vec<usize> = catalog
                .search(&query)
                .iter()
                .filter_map(|e| catalog.position(&e.id))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
