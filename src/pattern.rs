//! Procedural pattern synthesis.
//!
//! Each pattern kind is a deterministic geometric fill over a square RGBA
//! canvas (Noise being the one stochastic exception). The canvas starts out
//! as transparent white, so kinds that do not paint every pixel (Dots,
//! Circles, Rays, Noise) leave the background at alpha 0.
//!
//! `size` scales individual features; `density` packs more of them in.
//! Every computed cell or step size is clamped to at least one pixel so a
//! degenerate spec still terminates with a drawable result.

use std::f32::consts::PI;

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use rand::Rng;

use crate::error::{Result, RetintError};
use crate::types::{PatternKind, PatternSpec};

/// Canvas background: transparent white.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Synthesize a pattern at the spec's configured resolution.
pub fn synthesize(spec: &PatternSpec) -> Result<RgbaImage> {
    synthesize_at(spec, spec.resolution.pixels())
}

/// Synthesize a pattern onto an `edge`×`edge` canvas.
///
/// Used for previews, which render smaller than the configured resolution.
pub fn synthesize_at(spec: &PatternSpec, edge: u32) -> Result<RgbaImage> {
    if edge == 0 {
        return Err(RetintError::Dimension {
            message: "Cannot synthesize a zero-area pattern".to_string(),
        });
    }

    let mut img = RgbaImage::from_pixel(edge, edge, BACKGROUND);

    let primary = Rgba(spec.primary.to_rgba());
    let secondary = Rgba(spec.secondary.to_rgba());
    let size = spec.size.max(1);
    let density = if spec.density.is_finite() && spec.density > 0.0 {
        spec.density
    } else {
        1.0
    };

    match spec.kind {
        PatternKind::Gradient => gradient(&mut img, spec, edge),
        PatternKind::Checkerboard => {
            let cell = (size / 2).max(2);
            parity_squares(&mut img, edge, cell, primary, secondary);
        }
        PatternKind::Stripes => stripes(&mut img, edge, size, primary, secondary),
        PatternKind::DiagonalStripes => {
            diagonal_stripes(&mut img, edge, size, primary, secondary)
        }
        PatternKind::Dots => dots(&mut img, edge, size, density, primary),
        PatternKind::Hexagonal => hexagons(&mut img, edge, size, density, primary, secondary),
        PatternKind::Waves => waves(&mut img, edge, size, density, primary, secondary),
        PatternKind::Noise => noise(&mut img, edge, size, density, primary),
        PatternKind::Circles => circles(&mut img, edge, size, density, primary),
        PatternKind::Rays => rays(&mut img, edge, size, density, primary),
        PatternKind::Squares => {
            let cell = scaled_step(size, density, 2);
            parity_squares(&mut img, edge, cell, primary, secondary);
        }
        PatternKind::Triangles => triangles(&mut img, edge, size, density, primary, secondary),
    }

    if spec.blur_radius > 0.0 {
        img = imageops::blur(&img, spec.blur_radius);
    }

    Ok(img)
}

/// `size / density`, floored, never below `min`.
fn scaled_step(size: u32, density: f32, min: u32) -> u32 {
    ((size as f32 / density) as u32).max(min).max(1)
}

/// Vertical primary→secondary gradient, one opaque row per step.
fn gradient(img: &mut RgbaImage, spec: &PatternSpec, edge: u32) {
    for y in 0..edge {
        let ratio = y as f32 / edge as f32;
        let row = Rgba([
            lerp_channel(spec.primary.r, spec.secondary.r, ratio),
            lerp_channel(spec.primary.g, spec.secondary.g, ratio),
            lerp_channel(spec.primary.b, spec.secondary.b, ratio),
            255,
        ]);
        draw_filled_rect_mut(img, Rect::at(0, y as i32).of_size(edge, 1), row);
    }
}

fn lerp_channel(a: u8, b: u8, ratio: f32) -> u8 {
    (a as f32 * (1.0 - ratio) + b as f32 * ratio) as u8
}

/// Grid of cells coloured by `(cx + cy) % 2` parity; even cells primary.
fn parity_squares(img: &mut RgbaImage, edge: u32, cell: u32, primary: Rgba<u8>, secondary: Rgba<u8>) {
    for x in (0..edge).step_by(cell as usize) {
        for y in (0..edge).step_by(cell as usize) {
            let colour = if (x / cell + y / cell) % 2 == 0 {
                primary
            } else {
                secondary
            };
            draw_filled_rect_mut(img, Rect::at(x as i32, y as i32).of_size(cell, cell), colour);
        }
    }
}

/// Vertical alternating bands.
fn stripes(img: &mut RgbaImage, edge: u32, size: u32, primary: Rgba<u8>, secondary: Rgba<u8>) {
    let band = (size / 2).max(2);
    for x in (0..edge).step_by(band as usize * 2) {
        draw_filled_rect_mut(img, Rect::at(x as i32, 0).of_size(band, edge), primary);
        draw_filled_rect_mut(
            img,
            Rect::at((x + band) as i32, 0).of_size(band, edge),
            secondary,
        );
    }
}

/// Alternating bands slanted 45°, drawn as parallelograms spanning the
/// full canvas height.
fn diagonal_stripes(img: &mut RgbaImage, edge: u32, size: u32, primary: Rgba<u8>, secondary: Rgba<u8>) {
    let band = (size / 2).max(2) as i32;
    let e = edge as i32;

    let mut i = -e;
    while i < e {
        parallelogram(img, i, band, e, primary);
        parallelogram(img, i + band, band, e, secondary);
        i += band * 2;
    }
}

fn parallelogram(img: &mut RgbaImage, x: i32, band: i32, edge: i32, colour: Rgba<u8>) {
    let poly = [
        Point::new(x, 0),
        Point::new(x + band, 0),
        Point::new(x + band + edge, edge),
        Point::new(x + edge, edge),
    ];
    draw_polygon_mut(img, &poly, colour);
}

/// Filled circles on a regular grid; background stays transparent.
fn dots(img: &mut RgbaImage, edge: u32, size: u32, density: f32, primary: Rgba<u8>) {
    let spacing = scaled_step(size, density, 5);
    let radius = ((size as f32 / (4.0 * density)) as i32).max(1);

    for x in (radius as u32..edge).step_by(spacing as usize) {
        for y in (radius as u32..edge).step_by(spacing as usize) {
            draw_filled_circle_mut(img, (x as i32, y as i32), radius, primary);
        }
    }
}

/// Hexagons on a staggered grid: secondary fill, primary outline.
fn hexagons(
    img: &mut RgbaImage,
    edge: u32,
    size: u32,
    density: f32,
    primary: Rgba<u8>,
    secondary: Rgba<u8>,
) {
    let hex = scaled_step(size, density, 5) as f32;
    let step_x = ((hex * 1.5) as u32).max(1);
    let step_y = ((hex * 3f32.sqrt()) as u32).max(1);

    for x in (0..edge).step_by(step_x as usize) {
        for y in (0..edge).step_by(step_y as usize) {
            let points: Vec<Point<i32>> = (0..6)
                .map(|i| {
                    let angle = PI / 3.0 * i as f32;
                    Point::new(
                        (x as f32 + hex * angle.cos()).round() as i32,
                        (y as f32 + hex * angle.sin()).round() as i32,
                    )
                })
                .collect();

            draw_polygon_mut(img, &points, secondary);
            for i in 0..6 {
                let a = points[i];
                let b = points[(i + 1) % 6];
                draw_line_segment_mut(
                    img,
                    (a.x as f32, a.y as f32),
                    (b.x as f32, b.y as f32),
                    primary,
                );
            }
        }
    }
}

/// Horizontal bands displaced per column by a sinusoid.
fn waves(
    img: &mut RgbaImage,
    edge: u32,
    size: u32,
    density: f32,
    primary: Rgba<u8>,
    secondary: Rgba<u8>,
) {
    let amplitude = (size * 2) as f32;
    let frequency = density * 0.1;
    let period = (size as i32 * 2).max(1);

    for x in 0..edge {
        let y_offset = (amplitude * (x as f32 * frequency).sin()) as i32;
        for y in 0..edge {
            let colour = if (y as i32 + y_offset).rem_euclid(period) < size as i32 {
                primary
            } else {
                secondary
            };
            img.put_pixel(x, y, colour);
        }
    }
}

/// Bernoulli-sampled primary squares on a grid. Unseeded; not reproducible
/// across calls.
fn noise(img: &mut RgbaImage, edge: u32, size: u32, density: f32, primary: Rgba<u8>) {
    let step = (size / 10).max(1);
    let cell = (size / 20).max(1);
    let probability = (density * 0.1).clamp(0.0, 1.0);
    let mut rng = rand::thread_rng();

    for x in (0..edge).step_by(step as usize) {
        for y in (0..edge).step_by(step as usize) {
            if rng.gen::<f32>() < probability {
                draw_filled_rect_mut(img, Rect::at(x as i32, y as i32).of_size(cell, cell), primary);
            }
        }
    }
}

/// Concentric primary rings from the canvas center.
fn circles(img: &mut RgbaImage, edge: u32, size: u32, density: f32, primary: Rgba<u8>) {
    let center = (edge / 2) as i32;
    let max_radius = (edge / 2) as i32;
    let step = ((max_radius as f32 / (density * 4.0)) as i32).max(5);
    let stroke = (size / 20).max(1) as i32;

    let mut r = step;
    while r < max_radius {
        for w in 0..stroke {
            draw_hollow_circle_mut(img, (center, center), r + w, primary);
        }
        r += step;
    }
}

/// Radial primary lines from the canvas center, evenly spaced by angle.
fn rays(img: &mut RgbaImage, edge: u32, size: u32, density: f32, primary: Rgba<u8>) {
    let center = (edge / 2) as f32;
    let count = ((size as f32 * density) as u32).max(1);
    let stroke = (size / 20).max(1);

    for i in 0..count {
        let angle = 2.0 * PI * i as f32 / count as f32;
        let (sin, cos) = angle.sin_cos();
        let end_x = center + edge as f32 * cos;
        let end_y = center + edge as f32 * sin;

        for w in 0..stroke {
            // Offset parallel 1px lines perpendicular to the ray
            let offset = w as f32 - (stroke as f32 - 1.0) / 2.0;
            let (dx, dy) = (-sin * offset, cos * offset);
            draw_line_segment_mut(
                img,
                (center + dx, center + dy),
                (end_x + dx, end_y + dy),
                primary,
            );
        }
    }
}

/// Right triangles of alternating orientation tiling a parity grid. The
/// complementary half of each cell is left unpainted.
fn triangles(
    img: &mut RgbaImage,
    edge: u32,
    size: u32,
    density: f32,
    primary: Rgba<u8>,
    secondary: Rgba<u8>,
) {
    let cell = scaled_step(size, density, 5) as i32;

    for x in (0..edge as i32).step_by(cell as usize) {
        for y in (0..edge as i32).step_by(cell as usize) {
            if (x / cell + y / cell) % 2 == 0 {
                let poly = [
                    Point::new(x, y),
                    Point::new(x + cell, y),
                    Point::new(x, y + cell),
                ];
                draw_polygon_mut(img, &poly, primary);
            } else {
                let poly = [
                    Point::new(x + cell, y),
                    Point::new(x, y + cell),
                    Point::new(x + cell, y + cell),
                ];
                draw_polygon_mut(img, &poly, secondary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Colour;

    const PRIMARY: Colour = Colour::rgb(200, 30, 30);
    const SECONDARY: Colour = Colour::rgb(30, 30, 200);

    fn spec(kind: PatternKind) -> PatternSpec {
        PatternSpec::new(kind, PRIMARY, SECONDARY)
    }

    #[test]
    fn test_synthesize_uses_spec_resolution() {
        let img = synthesize(&spec(PatternKind::Gradient)).unwrap();
        assert_eq!(img.dimensions(), (1024, 1024));
    }

    #[test]
    fn test_zero_edge_fails() {
        assert!(synthesize_at(&spec(PatternKind::Dots), 0).is_err());
    }

    #[test]
    fn test_deterministic_except_noise() {
        for kind in PatternKind::all() {
            if kind.is_stochastic() {
                continue;
            }
            let s = spec(kind);
            let a = synthesize_at(&s, 64).unwrap();
            let b = synthesize_at(&s, 64).unwrap();
            assert_eq!(a.as_raw(), b.as_raw(), "{} not deterministic", kind);
        }
    }

    #[test]
    fn test_checkerboard_parity() {
        // Resolution 4, size 2 -> 2x2 grid of 2px cells; (cx+cy)%2==0 primary
        let img = synthesize_at(&spec(PatternKind::Checkerboard).with_size(2), 4).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(2, 0).0, SECONDARY.to_rgba());
        assert_eq!(img.get_pixel(0, 2).0, SECONDARY.to_rgba());
        assert_eq!(img.get_pixel(2, 2).0, PRIMARY.to_rgba());
    }

    #[test]
    fn test_gradient_endpoints() {
        let img = synthesize_at(&spec(PatternKind::Gradient), 64).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, PRIMARY.to_rgba());
        // Last row is one lerp step shy of the secondary colour
        let last = img.get_pixel(0, 63).0;
        assert!((last[0] as i16 - SECONDARY.r as i16).abs() <= 4);
        assert!((last[2] as i16 - SECONDARY.b as i16).abs() <= 4);
        assert_eq!(last[3], 255);
    }

    #[test]
    fn test_gradient_fully_opaque() {
        let img = synthesize_at(&spec(PatternKind::Gradient), 16).unwrap();
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_stripes_alternate() {
        // size 8 -> 4px bands
        let img = synthesize_at(&spec(PatternKind::Stripes).with_size(8), 16).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(4, 0).0, SECONDARY.to_rgba());
        assert_eq!(img.get_pixel(8, 8).0, PRIMARY.to_rgba());
    }

    #[test]
    fn test_diagonal_stripes_cover_canvas() {
        let img = synthesize_at(&spec(PatternKind::DiagonalStripes).with_size(8), 32).unwrap();
        // Bands span the full height, so nothing is left transparent
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_dots_leave_background_transparent() {
        // spacing 20, radius 5; (0,0) is outside the first dot
        let img = synthesize_at(&spec(PatternKind::Dots), 64).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 0]);
        // Dot centers are on the spacing grid starting at the radius
        assert_eq!(img.get_pixel(5, 5).0, PRIMARY.to_rgba());
    }

    /// Count maximal painted runs along one row.
    fn runs_in_row(img: &RgbaImage, y: u32) -> usize {
        let mut runs = 0;
        let mut in_run = false;
        for x in 0..img.width() {
            let painted = img.get_pixel(x, y).0[3] != 0;
            if painted && !in_run {
                runs += 1;
            }
            in_run = painted;
        }
        runs
    }

    #[test]
    fn test_dots_density_increases_count() {
        // density 1: spacing 20, first centers at radius 5
        let sparse = synthesize_at(&spec(PatternKind::Dots).with_density(1.0), 128).unwrap();
        // density 4: spacing 5, first centers at radius 1
        let dense = synthesize_at(&spec(PatternKind::Dots).with_density(4.0), 128).unwrap();

        assert!(runs_in_row(&dense, 1) > runs_in_row(&sparse, 5));
    }

    #[test]
    fn test_hexagonal_fill_and_outline() {
        let img = synthesize_at(&spec(PatternKind::Hexagonal), 128).unwrap();

        // Center of the first hexagon carries the secondary fill
        assert_eq!(img.get_pixel(0, 0).0, SECONDARY.to_rgba());
        let has_outline = img.pixels().any(|p| p.0 == PRIMARY.to_rgba());
        assert!(has_outline);
    }

    #[test]
    fn test_waves_band_split() {
        // Column 0 has zero offset: rows [0, size) primary, [size, 2*size) secondary
        let img = synthesize_at(&spec(PatternKind::Waves).with_size(4), 16).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(0, 3).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(0, 4).0, SECONDARY.to_rgba());
        assert_eq!(img.get_pixel(0, 11).0, PRIMARY.to_rgba());
    }

    #[test]
    fn test_noise_paints_only_primary() {
        let img = synthesize_at(&spec(PatternKind::Noise).with_density(8.0), 64).unwrap();

        for p in img.pixels() {
            assert!(p.0 == PRIMARY.to_rgba() || p.0 == [255, 255, 255, 0]);
        }
    }

    #[test]
    fn test_circles_ring_on_axis() {
        // edge 64: center 32, max radius 32, step max(5, 32/4) = 8
        let img = synthesize_at(&spec(PatternKind::Circles), 64).unwrap();

        assert_eq!(img.get_pixel(40, 32).0, PRIMARY.to_rgba());
        // Center itself is not painted
        assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 0]);
    }

    #[test]
    fn test_rays_pass_through_center() {
        let img = synthesize_at(&spec(PatternKind::Rays), 64).unwrap();

        // Ray 0 runs along +x from the center
        assert_eq!(img.get_pixel(40, 32).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(32, 32).0, PRIMARY.to_rgba());
    }

    #[test]
    fn test_squares_parity() {
        // size 16, density 1 -> 16px cells
        let img = synthesize_at(&spec(PatternKind::Squares).with_size(16), 64).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, PRIMARY.to_rgba());
        assert_eq!(img.get_pixel(16, 0).0, SECONDARY.to_rgba());
        assert_eq!(img.get_pixel(16, 16).0, PRIMARY.to_rgba());
    }

    #[test]
    fn test_triangles_alternating_orientation() {
        // size 8, density 1 -> 8px cells
        let img = synthesize_at(&spec(PatternKind::Triangles).with_size(8), 32).unwrap();

        // Interior of the first (primary) triangle
        assert_eq!(img.get_pixel(1, 1).0, PRIMARY.to_rgba());
        // Interior of the neighbouring cell's (secondary) triangle
        assert_eq!(img.get_pixel(15, 7).0, SECONDARY.to_rgba());
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = synthesize_at(&spec(PatternKind::Checkerboard).with_blur(2.0), 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn test_blur_softens_edges() {
        let sharp = synthesize_at(&spec(PatternKind::Checkerboard).with_size(16), 32).unwrap();
        let soft = synthesize_at(
            &spec(PatternKind::Checkerboard).with_size(16).with_blur(3.0),
            32,
        )
        .unwrap();

        assert_ne!(sharp.as_raw(), soft.as_raw());
    }

    #[test]
    fn test_degenerate_size_terminates() {
        // size 0 clamps internally; every kind must still produce a canvas
        for kind in PatternKind::all() {
            let s = PatternSpec {
                size: 0,
                density: 0.0,
                ..spec(kind)
            };
            let img = synthesize_at(&s, 16).unwrap();
            assert_eq!(img.dimensions(), (16, 16));
        }
    }
}
