use super::{GlyphSource, PreviewGlyph, layout};
use crate::catalog::{DEFAULT_FONT_TOKEN, FontCatalog};
use crate::glyph::GlyphGrid;

#[test]
fn layout_marks_undesigned_characters() {
    let catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    let slots = layout(&catalog, "HEY");

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].grid(), catalog.get('H'));
    assert_eq!(slots[1].ch(), 'E');
    assert_eq!(slots[2], PreviewGlyph::Missing('Y'));
    assert!(slots[2].grid().is_none());
}

#[test]
fn layout_of_empty_text() {
    let catalog = FontCatalog::new();
    assert!(layout(&catalog, "").is_empty());
}

#[test]
fn layout_is_case_sensitive() {
    let catalog = FontCatalog::bootstrap(DEFAULT_FONT_TOKEN);
    let slots = layout(&catalog, "hH");
    assert_eq!(slots[0], PreviewGlyph::Missing('h'));
    assert!(slots[1].grid().is_some());
}

/// A source with one fixed glyph for every character.
struct Solid(GlyphGrid);

impl GlyphSource for Solid {
    fn glyph(&self, _ch: char) -> Option<&GlyphGrid> {
        Some(&self.0)
    }
}

#[test]
fn layout_accepts_any_source() {
    let source = Solid(GlyphGrid::new());
    let slots = layout(&source, "ab");
    assert!(slots.iter().all(|slot| slot.grid().is_some()));
}
