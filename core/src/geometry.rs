use std::f32::consts::PI;

/// Center-candidate glyph size as a fraction of the cell, before shrinking.
pub const CENTER_DIGIT_COEFF: f32 = 0.35;
/// Corner-candidate glyph size as a fraction of the cell.
pub const CORNER_DIGIT_COEFF: f32 = 0.3;
/// Horizontal footprint of one digit glyph relative to its size, including
/// the gap to the next glyph.
pub const DIGIT_SPACE_COEFF: f32 = 1.5;
/// Main digit size as a fraction of the cell.
pub const MAIN_DIGIT_COEFF: f32 = 0.7;

/// Corner anchor slots in fixed priority order: TL, TR, BL, BR, T, B, L, R,
/// Center. Units are -1/0/1 multipliers from the cell center.
pub const CORNER_ANCHORS: [(i8, i8); 9] = [
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (0, 0),
];

/// Offset from the cell center for the corner slot at `index`, or `None`
/// past the last slot (extra corner digits are not rendered).
pub fn corner_digit_offset(index: usize, size: f32) -> Option<(f32, f32)> {
    let (left, top) = CORNER_ANCHORS.get(index).copied()?;
    let reach = size * (0.45 - CORNER_DIGIT_COEFF * 0.5);
    Some((left as f32 * reach, top as f32 * reach))
}

/// Size coefficient for center candidates; shrinks as the count grows so the
/// whole line always fits inside the cell.
pub fn center_digits_coeff(count: usize) -> f32 {
    CENTER_DIGIT_COEFF
        / 1.0_f32.max(CENTER_DIGIT_COEFF * DIGIT_SPACE_COEFF * (count + 1) as f32)
}

/// Horizontal offset from the cell center for center candidate `index` of
/// `count`, symmetric about the center.
pub fn center_digit_offset(index: usize, count: usize, size: f32) -> (f32, f32) {
    let coeff = center_digits_coeff(count);
    let x = size * coeff * DIGIT_SPACE_COEFF * (index as f32 - (count as f32 - 1.0) / 2.0);
    (x, 0.0)
}

/// How a cell's background color list renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundKind {
    /// No colors, nothing to draw.
    None,
    /// Exactly one color fills the cell solid.
    Solid,
    /// Two or more colors render as wedge slices, with no solid fill.
    Wedges,
}

pub fn background_kind(color_count: usize) -> BackgroundKind {
    match color_count {
        0 => BackgroundKind::None,
        1 => BackgroundKind::Solid,
        _ => BackgroundKind::Wedges,
    }
}

/// Polygon for the wedge of `color_index` (1-based; slot 0 gets no wedge)
/// out of `color_count` background colors. Each wedge spans
/// 360/color_count degrees, clockwise from the fixed -45 degree offset, and
/// overshoots the cell bounds so clipping produces clean edges.
pub fn wedge_points(color_index: usize, color_count: usize, size: f32) -> [(f32, f32); 4] {
    let i = color_index as f32;
    let raw = [(0.0, i - 0.5), (1.0, i - 0.5), (1.0, i), (1.0, i + 0.5)];
    let mut points = [(0.0, 0.0); 4];
    for (out, (radius, slice)) in points.iter_mut().zip(raw) {
        let r = radius * size * 2.0;
        let a = PI * (2.0 * slice / color_count as f32 - 0.25);
        *out = (size / 2.0 + r * a.cos(), size / 2.0 + r * a.sin());
    }
    points
}

/// SVG `points` attribute for a wedge.
pub fn wedge_points_attr(color_index: usize, color_count: usize, size: f32) -> String {
    wedge_points(color_index, color_count, size)
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}
