//! Behavioral tests for the card grid

use sle_core::{Result, SiteConfig};

use crate::components::grid::visible_entries;

#[test]
fn given_empty_query_when_listing_then_one_card_per_entry_in_order() -> Result<()> {
    let site = SiteConfig::builtin()?;

    let visible = visible_entries(&site.catalog, "");

    assert_eq!(visible.len(), site.catalog.len());
    for ((index, shown), (position, entry)) in visible.iter().zip(site.catalog.iter().enumerate()) {
        assert_eq!(*index, position);
        assert_eq!(shown, entry);
    }
    Ok(())
}

#[test]
fn given_query_when_listing_then_indices_are_contiguous() -> Result<()> {
    let site = SiteConfig::builtin()?;

    let visible = visible_entries(&site.catalog, "painel");

    let indices: Vec<usize> = visible.iter().map(|(i, _)| *i).collect();
    let expected: Vec<usize> = (0..visible.len()).collect();
    assert_eq!(indices, expected);
    assert!(!visible.is_empty());
    Ok(())
}

#[test]
fn given_unmatched_query_when_listing_then_grid_is_empty() -> Result<()> {
    let site = SiteConfig::builtin()?;
    assert!(visible_entries(&site.catalog, "zzz-no-such-panel").is_empty());
    Ok(())
}

#[test]
fn given_entries_when_listing_then_each_link_is_distinct() -> Result<()> {
    let site = SiteConfig::builtin()?;
    let visible = visible_entries(&site.catalog, "");

    let hrefs: std::collections::HashSet<&str> = visible.iter().map(|(_, e)| e.href()).collect();
    assert_eq!(hrefs.len(), visible.len(), "every card opens its own URL");
    Ok(())
}
