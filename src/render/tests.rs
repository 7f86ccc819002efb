use hexfont_core::{DEFAULT_FONT_TOKEN, FontCatalog, GlyphGrid};

use super::{ascii, svg};
use crate::geometry::HexLayout;

fn font() -> FontCatalog {
    FontCatalog::bootstrap(DEFAULT_FONT_TOKEN)
}

#[test]
fn ascii_single_glyph() {
    let out = ascii(&font(), "L");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# . . .",
            " # . . .",
            "# . . .",
            " # . . .",
            "# . . .",
            " # # # .",
        ]
    );
}

#[test]
fn ascii_glyphs_are_side_by_side() {
    let out = ascii(&font(), "LL");
    let first = out.lines().next().expect("six lines");
    assert_eq!(first, "# . . .   # . . .");
}

#[test]
fn ascii_missing_glyph_placeholder() {
    let out = ascii(&font(), "LZ");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "# . . .");
    assert_eq!(lines[2], "# . . .      \u{25a1}");
}

#[test]
fn ascii_multiple_lines() {
    let out = ascii(&font(), "L\nL");
    assert_eq!(out.lines().count(), 13);
    assert_eq!(out.lines().nth(6), Some(""));
}

#[test]
fn ascii_empty_text() {
    assert_eq!(ascii(&font(), ""), "");
}

#[test]
fn svg_draws_one_polygon_per_lit_cell() {
    let mut catalog = FontCatalog::new();
    catalog.save(
        'A',
        &"#.../..../..../..../..../...#".parse::<GlyphGrid>().expect("valid pattern"),
    );
    let doc = svg::document(&catalog, "AA", &HexLayout::new(20.0), 1.0).to_string();
    assert_eq!(doc.matches("<polygon").count(), 4);
    assert!(doc.contains(svg::FILL_COLOR));
    assert!(doc.contains("translate(0,0)"));
}

#[test]
fn svg_placeholder_for_missing_glyph() {
    let doc = svg::document(&FontCatalog::new(), "?", &HexLayout::new(20.0), 1.0).to_string();
    assert_eq!(doc.matches("<polygon").count(), 0);
    assert_eq!(doc.matches("<rect").count(), 1);
}

#[test]
fn svg_scale_changes_size_not_view_box() {
    // Size 10: glyph height is 15 * 6 + 5 = 95.
    let layout = HexLayout::new(10.0);
    let doc = svg::document(&font(), "L", &layout, 2.0).to_string();
    assert!(doc.contains("height=\"190\""));
    assert!(doc.contains("viewBox=\"0 0 "));
    assert!(doc.contains(" 95\""));
}
