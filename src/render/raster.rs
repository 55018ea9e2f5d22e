//! Shape rasterizer - fills one shape onto a surface.
//!
//! All shapes are flat fills in a single colour with no antialiasing.
//! Polygons use an even-odd scanline over pixel centres and then trace
//! their outline, so pixels on the boundary are always covered.

use std::f64::consts::PI;

use crate::types::{Colour, ShapeKind};

use super::canvas::{Extent, Surface};

/// Draw `kind` centred on `(x, y)` with the given radius.
///
/// The radius is clamped to at least 1.
pub fn draw_shape<S: Surface + ?Sized>(
    surface: &mut S,
    (x, y): (i64, i64),
    radius: u32,
    kind: ShapeKind,
    colour: Colour,
) {
    let r = radius.max(1) as i64;

    match kind {
        ShapeKind::Pixel => surface.put(x, y, colour),
        ShapeKind::Circle => fill_disc(surface, x, y, r, colour),
        ShapeKind::Square => {
            let extent = surface.extent();
            for row in (y - r).max(extent.y0)..=(y + r).min(extent.y1 - 1) {
                surface.fill_span(row, x - r, x + r, colour);
            }
        }
        ShapeKind::Triangle | ShapeKind::Star => {
            let points = polygon(kind, (x, y), r);
            fill_polygon(surface, &points, colour);
        }
    }
}

/// Inclusive bounding box of the pixels `draw_shape` may touch.
pub fn footprint(kind: ShapeKind, (x, y): (i64, i64), radius: u32) -> Extent {
    let r = radius.max(1) as i64;
    match kind {
        ShapeKind::Pixel => Extent::inclusive(x, y, x, y),
        ShapeKind::Triangle => Extent::inclusive(x - r, y - 2 * r, x + r, y + r),
        ShapeKind::Circle | ShapeKind::Square | ShapeKind::Star => {
            Extent::inclusive(x - r, y - r, x + r, y + r)
        }
    }
}

/// Vertices of the polygonal shapes, in outline order.
///
/// Triangle: apex two radii above the centre, base one radius below.
/// Star: five outer points at radius `r` starting straight up, each followed
/// by an inner point at radius `r / 2` (integer division) rotated 36 degrees.
pub fn polygon(kind: ShapeKind, (x, y): (i64, i64), r: i64) -> Vec<(f64, f64)> {
    let (cx, cy) = (x as f64, y as f64);
    match kind {
        ShapeKind::Triangle => {
            let rf = r as f64;
            vec![(cx, cy - 2.0 * rf), (cx + rf, cy + rf), (cx - rf, cy + rf)]
        }
        ShapeKind::Star => {
            let outer = r as f64;
            let inner = (r / 2) as f64;
            let mut points = Vec::with_capacity(10);
            for i in 0..5 {
                let angle = (72.0 * i as f64 - 90.0) * PI / 180.0;
                let inner_angle = angle + 36.0 * PI / 180.0;
                points.push((cx + outer * angle.cos(), cy + outer * angle.sin()));
                points.push((cx + inner * inner_angle.cos(), cy + inner * inner_angle.sin()));
            }
            points
        }
        ShapeKind::Pixel | ShapeKind::Circle | ShapeKind::Square => Vec::new(),
    }
}

/// Fill the pixels whose centres lie within `r` of `(x, y)`.
fn fill_disc<S: Surface + ?Sized>(surface: &mut S, x: i64, y: i64, r: i64, colour: Colour) {
    let extent = surface.extent();
    for row in (y - r).max(extent.y0)..=(y + r).min(extent.y1 - 1) {
        let dy = (row - y) as i128;
        let half = isqrt(r as i128 * r as i128 - dy * dy);
        surface.fill_span(row, x - half, x + half, colour);
    }
}

/// Even-odd scanline fill plus outline.
pub fn fill_polygon<S: Surface + ?Sized>(surface: &mut S, points: &[(f64, f64)], colour: Colour) {
    if points.is_empty() {
        return;
    }

    let extent = surface.extent();
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let row_start = (min_y.ceil() as i64).max(extent.y0);
    let row_end = (max_y.floor() as i64).min(extent.y1 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for row in row_start..=row_end {
        let yy = row as f64;
        crossings.clear();

        for (i, &(x0, y0)) in points.iter().enumerate() {
            let (x1, y1) = points[(i + 1) % points.len()];
            // Half-open in y so shared vertices count once.
            if (y0 <= yy && yy < y1) || (y1 <= yy && yy < y0) {
                crossings.push(x0 + (yy - y0) * (x1 - x0) / (y1 - y0));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            surface.fill_span(row, pair[0].ceil() as i64, pair[1].floor() as i64, colour);
        }
    }

    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_line(surface, round(from), round(to), colour);
    }
}

/// Straight line with both endpoints included, one pixel per step along
/// the major axis. Only steps inside the surface are visited.
fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    from: (i64, i64),
    to: (i64, i64),
    colour: Colour,
) {
    let extent = surface.extent();
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);

    if dx == 0 && dy == 0 {
        surface.put(from.0, from.1, colour);
    } else if dx.abs() >= dy.abs() {
        let ((ax, ay), (bx, by)) = if from.0 <= to.0 { (from, to) } else { (to, from) };
        for x in ax.max(extent.x0)..=bx.min(extent.x1 - 1) {
            let y = ay + round_div((x - ax) as i128 * (by - ay) as i128, (bx - ax) as i128);
            surface.put(x, y, colour);
        }
    } else {
        let ((ax, ay), (bx, by)) = if from.1 <= to.1 { (from, to) } else { (to, from) };
        for y in ay.max(extent.y0)..=by.min(extent.y1 - 1) {
            let x = ax + round_div((y - ay) as i128 * (bx - ax) as i128, (by - ay) as i128);
            surface.put(x, y, colour);
        }
    }
}

/// `n / d` rounded half away from zero. Requires `d > 0`.
fn round_div(n: i128, d: i128) -> i64 {
    let q = (2 * n.abs() + d) / (2 * d);
    (if n < 0 { -q } else { q }) as i64
}

fn round((x, y): (f64, f64)) -> (i64, i64) {
    (x.round() as i64, y.round() as i64)
}

/// Largest `s` with `s * s <= n`.
fn isqrt(n: i128) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut s = (n as f64).sqrt() as i128;
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::Canvas;
    use pretty_assertions::assert_eq;

    fn blank(size: u32) -> Canvas {
        Canvas::new(size, size, Colour::BLACK).unwrap()
    }

    /// Render the canvas as rows of `#` (painted) and `.` (background).
    fn ascii(canvas: &Canvas) -> Vec<String> {
        (0..canvas.height() as i64)
            .map(|y| {
                (0..canvas.width() as i64)
                    .map(|x| {
                        if canvas.get(x, y) == Some(Colour::BLACK) {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_pixel_touches_exactly_one() {
        let mut canvas = blank(5);
        draw_shape(&mut canvas, (2, 3), 4, ShapeKind::Pixel, Colour::WHITE);
        assert_eq!(canvas.count_not(Colour::BLACK), 1);
        assert_eq!(canvas.get(2, 3), Some(Colour::WHITE));
    }

    #[test]
    fn test_square_is_inclusive_box() {
        let mut canvas = blank(5);
        draw_shape(&mut canvas, (2, 2), 1, ShapeKind::Square, Colour::WHITE);
        assert_eq!(
            ascii(&canvas),
            vec![".....", ".###.", ".###.", ".###.", "....."]
        );
    }

    #[test]
    fn test_zero_radius_clamps_to_one() {
        let mut a = blank(5);
        let mut b = blank(5);
        draw_shape(&mut a, (2, 2), 0, ShapeKind::Square, Colour::WHITE);
        draw_shape(&mut b, (2, 2), 1, ShapeKind::Square, Colour::WHITE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_radius_two() {
        let mut canvas = blank(5);
        draw_shape(&mut canvas, (2, 2), 2, ShapeKind::Circle, Colour::WHITE);
        assert_eq!(
            ascii(&canvas),
            vec!["..#..", ".###.", "#####", ".###.", "..#.."]
        );
    }

    #[test]
    fn test_circle_is_symmetric() {
        let mut canvas = blank(21);
        draw_shape(&mut canvas, (10, 10), 7, ShapeKind::Circle, Colour::WHITE);
        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(canvas.get(x, y), canvas.get(20 - x, y));
                assert_eq!(canvas.get(x, y), canvas.get(y, x));
            }
        }
        assert_eq!(canvas.get(10, 3), Some(Colour::WHITE));
        assert_eq!(canvas.get(10, 2), Some(Colour::BLACK));
    }

    #[test]
    fn test_triangle_radius_one() {
        let mut canvas = blank(5);
        draw_shape(&mut canvas, (2, 3), 1, ShapeKind::Triangle, Colour::WHITE);
        // Apex at (2, 1), base from (1, 4) to (3, 4).
        assert_eq!(
            ascii(&canvas),
            vec![".....", "..#..", "..#..", ".###.", ".###."]
        );
    }

    #[test]
    fn test_triangle_stays_in_footprint() {
        let mut canvas = blank(30);
        let centre = (15, 15);
        draw_shape(&mut canvas, centre, 4, ShapeKind::Triangle, Colour::WHITE);
        let fp = footprint(ShapeKind::Triangle, centre, 4);
        for y in 0..30 {
            for x in 0..30 {
                if canvas.get(x, y) == Some(Colour::WHITE) {
                    assert!(fp.contains(x, y), "({}, {}) outside footprint", x, y);
                }
            }
        }
        assert_eq!(canvas.get(15, 7), Some(Colour::WHITE));
        assert_eq!(canvas.get(11, 19), Some(Colour::WHITE));
        assert_eq!(canvas.get(19, 19), Some(Colour::WHITE));
        assert_eq!(canvas.get(15, 20), Some(Colour::BLACK));
    }

    #[test]
    fn test_star_vertices() {
        let pts = polygon(ShapeKind::Star, (0, 0), 10);
        assert_eq!(pts.len(), 10);

        // First outer point straight up, first inner point at radius 5.
        assert!((pts[0].0).abs() < 1e-9);
        assert!((pts[0].1 + 10.0).abs() < 1e-9);
        let r_inner = (pts[1].0.powi(2) + pts[1].1.powi(2)).sqrt();
        assert!((r_inner - 5.0).abs() < 1e-9);
        let inner_angle = pts[1].1.atan2(pts[1].0).to_degrees();
        assert!((inner_angle + 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_inner_radius_truncates() {
        let pts = polygon(ShapeKind::Star, (0, 0), 5);
        let r_inner = (pts[1].0.powi(2) + pts[1].1.powi(2)).sqrt();
        assert!((r_inner - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_fills_centre_and_tips() {
        let mut canvas = blank(41);
        draw_shape(&mut canvas, (20, 20), 16, ShapeKind::Star, Colour::WHITE);
        assert_eq!(canvas.get(20, 20), Some(Colour::WHITE));
        assert_eq!(canvas.get(20, 4), Some(Colour::WHITE));
        // Between two upper tips, outside the inner pentagon.
        assert_eq!(canvas.get(28, 8), Some(Colour::BLACK));
        // Left-right mirror symmetry of the fill (outline rounding aside).
        assert_eq!(canvas.get(12, 22), canvas.get(28, 22));
    }

    #[test]
    fn test_shapes_clip_at_edges() {
        let mut canvas = blank(4);
        for kind in ShapeKind::ALL {
            draw_shape(&mut canvas, (0, 0), 6, kind, Colour::WHITE);
        }
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_huge_radius_only_touches_visible_rows() {
        // Work is bounded by the surface, so a radius near u32::MAX is cheap.
        for kind in ShapeKind::ALL {
            let mut canvas = blank(10);
            draw_shape(&mut canvas, (5, 5), u32::MAX, kind, Colour::WHITE);
            let expected = if kind == ShapeKind::Pixel { 99 } else { 0 };
            assert_eq!(canvas.count_not(Colour::WHITE), expected, "{}", kind);
        }
    }

    #[test]
    fn test_outline_is_clipped() {
        let mut canvas = blank(5);
        draw_line(&mut canvas, (-1_000_000_000, 2), (1_000_000_000, 2), Colour::WHITE);
        assert_eq!(ascii(&canvas)[2], "#####");
        assert_eq!(canvas.count_not(Colour::BLACK), 5);

        let mut canvas = blank(5);
        draw_line(&mut canvas, (0, 0), (4, 2), Colour::WHITE);
        draw_line(&mut canvas, (4, 2), (0, 0), Colour::WHITE);
        assert_eq!(ascii(&canvas), ["#....", ".##..", "...##", ".....", "....."]);
    }

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(1, 3), 0);
        assert_eq!(round_div(2, 3), 1);
        assert_eq!(round_div(3, 2), 2);
        assert_eq!(round_div(-3, 2), -2);
        assert_eq!(round_div(-2, 3), -1);
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(-4), 0);
        assert_eq!(isqrt(u32::MAX as i128 * u32::MAX as i128), u32::MAX as i64);
    }
}
