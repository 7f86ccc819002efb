use hexfont_core::Point;

use super::HexLayout;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn spacing_for_size_twenty() {
    let layout = HexLayout::new(20.0);
    assert!(close(layout.hex_width(), 34.641));
    assert!(close(layout.hex_height(), 40.0));
    assert!(close(layout.horizontal_spacing(), 34.641));
    assert!(close(layout.vertical_spacing(), 30.0));
}

#[test]
fn first_cell_center() {
    let layout = HexLayout::new(20.0);
    let (x, y) = layout.center(Point::new(0, 0));
    assert!(close(x, 17.320));
    assert!(close(y, 20.0));
}

#[test]
fn odd_rows_shift_half_a_cell() {
    let layout = HexLayout::new(20.0);
    let (even_x, _) = layout.center(Point::new(0, 2));
    let (odd_x, odd_y) = layout.center(Point::new(1, 2));
    assert!(close(odd_x - even_x, layout.horizontal_spacing() / 2.0));
    assert!(close(odd_y, 50.0));
}

#[test]
fn corners_lie_on_radius() {
    let layout = HexLayout::new(10.0);
    let center = (5.0, 7.0);
    for (x, y) in layout.corners(center) {
        let r = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
        assert!(close(r, 10.0));
    }
}

#[test]
fn first_corner_is_upper_right() {
    let layout = HexLayout::new(10.0);
    let [(x, y), ..] = layout.corners((0.0, 0.0));
    // -30 degrees: right of center, above it (y grows downward).
    assert!(close(x, 8.660));
    assert!(close(y, -5.0));
}

#[test]
fn glyph_canvas_holds_every_cell() {
    let layout = HexLayout::new(20.0);
    assert!(close(layout.glyph_width(), 34.641 * 4.0 + 17.320));
    assert!(close(layout.glyph_height(), 190.0));

    let (x, y) = layout.center(Point::new(5, 3));
    assert!(x + layout.hex_width() / 2.0 <= layout.glyph_width() + 1e-3);
    assert!(y + layout.size() <= layout.glyph_height() + 1e-3);
}
