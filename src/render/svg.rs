//! SVG preview of a text line.

use svg::Document;
use svg::node::element::{Group, Polygon, Rectangle};

use hexfont_core::preview::{self, GlyphSource};
use hexfont_core::GlyphGrid;

use crate::geometry::HexLayout;

/// Fill of a lit cell.
pub const FILL_COLOR: &str = "#2563eb";

/// Outline of an undesigned character's placeholder.
const PLACEHOLDER_COLOR: &str = "#9ca3af";

/// Gap between glyphs, as a fraction of the hex size.
const GAP_FACTOR: f32 = 0.5;

/// Render `text` on one line. `scale` multiplies the output size only; the
/// view box stays in layout units.
pub fn document<S: GlyphSource + ?Sized>(
    source: &S,
    text: &str,
    layout: &HexLayout,
    scale: f32,
) -> Document {
    let gap = layout.size() * GAP_FACTOR;
    let advance = layout.glyph_width() + gap;
    let slots = preview::layout(source, text);

    let width = (advance * slots.len() as f32 - gap).max(0.0);
    let height = layout.glyph_height();

    let mut document = Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width * scale)
        .set("height", height * scale);

    for (i, slot) in slots.iter().enumerate() {
        let x = advance * i as f32;
        let group = match slot.grid() {
            Some(grid) => glyph_group(grid, layout),
            None => placeholder_group(layout),
        };
        document = document.add(group.set("transform", format!("translate({x},0)")));
    }
    document
}

/// Polygons for every lit cell of `grid`.
fn glyph_group(grid: &GlyphGrid, layout: &HexLayout) -> Group {
    grid.cells()
        .filter(|&(_, on)| on)
        .fold(Group::new(), |group, (point, _)| {
            let points: Vec<String> = layout
                .corners(layout.center(point))
                .iter()
                .map(|(x, y)| format!("{x:.2},{y:.2}"))
                .collect();
            group.add(
                Polygon::new()
                    .set("points", points.join(" "))
                    .set("fill", FILL_COLOR),
            )
        })
}

fn placeholder_group(layout: &HexLayout) -> Group {
    let inset = layout.size();
    Group::new().add(
        Rectangle::new()
            .set("x", inset)
            .set("y", inset)
            .set("width", (layout.glyph_width() - 2.0 * inset).max(0.0))
            .set("height", (layout.glyph_height() - 2.0 * inset).max(0.0))
            .set("fill", "none")
            .set("stroke", PLACEHOLDER_COLOR)
            .set("stroke-width", 1),
    )
}
