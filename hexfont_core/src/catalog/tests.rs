use super::{DEFAULT_FONT_TOKEN, FontCatalog};
use crate::codec::DecodeMode;
use crate::glyph::GlyphGrid;

fn glyph(pattern: &str) -> GlyphGrid {
    pattern.parse().expect("valid pattern")
}

#[test]
fn new_catalog_is_empty() {
    let catalog = FontCatalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert_eq!(catalog.entries().count(), 0);
}

#[test]
fn load_missing_returns_empty_grid() {
    let catalog = FontCatalog::new();
    assert_eq!(catalog.load('Q'), GlyphGrid::new());
    assert!(catalog.get('Q').is_none());
    assert!(!catalog.contains('Q'));
}

#[test]
fn save_stores_a_copy() {
    let mut catalog = FontCatalog::new();
    let mut working = GlyphGrid::new();
    working.set(0, 1, true);
    catalog.save('A', &working);

    // Keep editing after the save.
    working.set(4, 2, true);

    let stored = catalog.load('A');
    assert!(stored.get(0, 1));
    assert!(!stored.get(4, 2));
}

#[test]
fn save_overwrites_existing_entry() {
    let mut catalog = FontCatalog::new();
    let g1 = glyph("#.../..../..../..../..../....");
    let g2 = glyph("..../..../..../..../..../...#");

    catalog.save('A', &g1);
    catalog.save('A', &g2);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.load('A'), g2);
}

#[test]
fn overwrite_keeps_insertion_slot() {
    let mut catalog = FontCatalog::new();
    catalog.save('A', &GlyphGrid::new());
    catalog.save('B', &GlyphGrid::new());
    let previous = catalog.insert('A', glyph("####/..../..../..../..../...."));

    assert_eq!(previous, Some(GlyphGrid::new()));
    assert_eq!(catalog.chars().collect::<String>(), "AB");
}

#[test]
fn entries_follow_insertion_order() {
    let catalog: FontCatalog = "ZAM"
        .chars()
        .map(|ch| (ch, GlyphGrid::new()))
        .collect();
    let order: Vec<char> = catalog.entries().map(|(ch, _)| ch).collect();
    assert_eq!(order, vec!['Z', 'A', 'M']);
}

#[test]
fn equality_ignores_order() {
    let a = glyph("#.../..../..../..../..../....");
    let b = glyph(".#../..../..../..../..../....");

    let first: FontCatalog = [('A', a.clone()), ('B', b.clone())].into_iter().collect();
    let second: FontCatalog = [('B', b), ('A', a)].into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn equality_detects_different_glyphs() {
    let first: FontCatalog = [('A', GlyphGrid::new())].into_iter().collect();
    let second: FontCatalog = [('A', glyph("#.../..../..../..../..../...."))]
        .into_iter()
        .collect();
    let third: FontCatalog = [('B', GlyphGrid::new())].into_iter().collect();
    assert_ne!(first, second);
    assert_ne!(first, third);
}

#[test]
fn bootstrap_default_font() {
    let catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    assert_eq!(catalog.chars().collect::<String>(), "PAHELOWRD ");
    assert!(catalog.load(' ').is_empty());

    // L: left column plus a full bottom bar.
    assert_eq!(catalog.load('L').to_pattern(), "#.../#.../#.../#.../#.../###.");
}

#[test]
fn bootstrap_garbage_falls_back_to_empty() {
    let catalog = FontCatalog::bootstrap("!!!,???");
    assert!(catalog.is_empty());
}

#[test]
fn default_token_roundtrips() {
    let catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    assert_eq!(catalog.to_token(), DEFAULT_FONT_TOKEN);
}

#[test]
fn replace_from_token_replaces_wholesale() {
    let mut catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    let report = catalog
        .replace_from_token("Z1", DecodeMode::Lenient)
        .expect("lenient decode");

    assert_eq!(report.glyphs, 1);
    assert!(report.skipped.is_empty());
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains('Z'));
    assert!(!catalog.contains('H'));
}

#[test]
fn replace_with_all_malformed_empties_catalog() {
    let mut catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    let report = catalog
        .replace_from_token("A!!!", DecodeMode::Lenient)
        .expect("lenient decode");
    assert_eq!(report.glyphs, 0);
    assert_eq!(report.skipped.len(), 1);
    assert!(catalog.is_empty());
}

#[test]
fn strict_failure_leaves_catalog_untouched() {
    let mut catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    let before = catalog.clone();

    let result = catalog.replace_from_token("A1,,B2", DecodeMode::Strict);

    assert!(result.is_err());
    assert_eq!(catalog, before);
    assert_eq!(catalog.to_token(), DEFAULT_FONT_TOKEN);
}
