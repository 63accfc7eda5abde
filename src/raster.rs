//! Rasterizes shape lists onto an RGBA canvas
//!
//! Coverage is binary and sampled at pixel centers. Painting replaces the
//! destination pixel, alpha included, instead of blending over it.

use crate::shapes::{BoundingBox, Paint, Shape, ShapeKind};
use image::{Rgba, RgbaImage};

/// Allocates a transparent `size`x`size` canvas and paints `shapes` in order
pub fn render(shapes: &[Shape], size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    for shape in shapes {
        paint_shape(&mut canvas, shape);
    }
    canvas
}

/// Paints a single shape, clipping it to the canvas
pub fn paint_shape(canvas: &mut RgbaImage, shape: &Shape) {
    let Some((xs, ys)) = clip(&shape.bounds, canvas.width(), canvas.height()) else {
        return;
    };
    let color = Rgba(shape.paint.color().to_array());

    for y in ys {
        for x in xs.clone() {
            if covers(shape, x as f64 + 0.5, y as f64 + 0.5) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn clip(
    bounds: &BoundingBox,
    width: u32,
    height: u32,
) -> Option<(std::ops::RangeInclusive<u32>, std::ops::RangeInclusive<u32>)> {
    if width == 0 || height == 0 {
        return None;
    }
    let x0 = bounds.x0.max(0);
    let y0 = bounds.y0.max(0);
    let x1 = bounds.x1.min(width as i32 - 1);
    let y1 = bounds.y1.min(height as i32 - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0 as u32..=x1 as u32, y0 as u32..=y1 as u32))
}

fn covers(shape: &Shape, px: f64, py: f64) -> bool {
    let bounds = &shape.bounds;
    match (shape.kind, shape.paint) {
        (ShapeKind::Rectangle, Paint::Fill(_)) => in_rect(bounds, px, py),
        (ShapeKind::Rectangle, Paint::Outline { width, .. }) => {
            in_rect(bounds, px, py) && !in_rect(&bounds.inset(width), px, py)
        }
        (ShapeKind::RoundedRectangle { radius }, Paint::Fill(_)) => {
            in_rounded_rect(bounds, radius, px, py)
        }
        (ShapeKind::RoundedRectangle { radius }, Paint::Outline { width, .. }) => {
            in_rounded_rect(bounds, radius, px, py)
                && !in_rounded_rect(&bounds.inset(width), (radius - width).max(0), px, py)
        }
        (ShapeKind::Ellipse, Paint::Fill(_)) => in_ellipse(bounds, px, py),
        (ShapeKind::Ellipse, Paint::Outline { width, .. }) => {
            in_ellipse(bounds, px, py) && !in_ellipse(&bounds.inset(width), px, py)
        }
    }
}

// The continuous area of a box is [x0, x1 + 1) x [y0, y1 + 1).
fn in_rect(bounds: &BoundingBox, px: f64, py: f64) -> bool {
    bounds.width() > 0
        && bounds.height() > 0
        && px >= bounds.x0 as f64
        && px < (bounds.x1 + 1) as f64
        && py >= bounds.y0 as f64
        && py < (bounds.y1 + 1) as f64
}

fn in_rounded_rect(bounds: &BoundingBox, radius: i32, px: f64, py: f64) -> bool {
    if !in_rect(bounds, px, py) {
        return false;
    }
    let r = radius.clamp(0, bounds.width().min(bounds.height()) / 2) as f64;
    if r == 0.0 {
        return true;
    }

    // Distance to the box shrunk by `r` on every side.
    let qx = px.clamp(bounds.x0 as f64 + r, (bounds.x1 + 1) as f64 - r);
    let qy = py.clamp(bounds.y0 as f64 + r, (bounds.y1 + 1) as f64 - r);
    let (dx, dy) = (px - qx, py - qy);
    dx * dx + dy * dy <= r * r
}

fn in_ellipse(bounds: &BoundingBox, px: f64, py: f64) -> bool {
    if bounds.width() <= 0 || bounds.height() <= 0 {
        return false;
    }
    let a = bounds.width() as f64 / 2.0;
    let b = bounds.height() as f64 / 2.0;
    let nx = (px - (bounds.x0 as f64 + a)) / a;
    let ny = (py - (bounds.y0 as f64 + b)) / b;
    nx * nx + ny * ny <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rgba8;

    const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn filled(kind: ShapeKind, bounds: BoundingBox, color: Rgba8) -> Shape {
        Shape::new(kind, bounds, Paint::Fill(color))
    }

    fn painted_count(canvas: &RgbaImage) -> usize {
        canvas.pixels().filter(|p| p.0[3] != 0).count()
    }

    #[test]
    fn test_empty_list_is_transparent() {
        let canvas = render(&[], 16);
        assert_eq!(canvas.dimensions(), (16, 16));
        assert!(canvas.pixels().all(|p| p.0 == CLEAR));
    }

    #[test]
    fn test_rectangle_bounds_are_inclusive() {
        let rect = filled(ShapeKind::Rectangle, BoundingBox::new(2, 2, 4, 4), RED);
        let canvas = render(&[rect], 8);

        assert_eq!(painted_count(&canvas), 9);
        assert_eq!(canvas.get_pixel(2, 2).0, RED.to_array());
        assert_eq!(canvas.get_pixel(4, 4).0, RED.to_array());
        assert_eq!(canvas.get_pixel(5, 4).0, CLEAR);
    }

    #[test]
    fn test_shapes_are_clipped_to_canvas() {
        let rect = filled(ShapeKind::Rectangle, BoundingBox::new(-5, -5, 20, 20), RED);
        let canvas = render(&[rect], 8);
        assert_eq!(painted_count(&canvas), 64);

        let outside = filled(ShapeKind::Rectangle, BoundingBox::new(10, 10, 20, 20), RED);
        let canvas = render(&[outside], 8);
        assert_eq!(painted_count(&canvas), 0);
    }

    #[test]
    fn test_rounded_rectangle_cuts_corners() {
        let shape = filled(
            ShapeKind::RoundedRectangle { radius: 4 },
            BoundingBox::new(0, 0, 9, 9),
            RED,
        );
        let canvas = render(&[shape], 10);

        for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9)] {
            assert_eq!(canvas.get_pixel(x, y).0, CLEAR, "corner ({x}, {y})");
        }
        assert_eq!(canvas.get_pixel(5, 0).0, RED.to_array());
        assert_eq!(canvas.get_pixel(0, 5).0, RED.to_array());
        assert_eq!(canvas.get_pixel(5, 5).0, RED.to_array());
    }

    #[test]
    fn test_zero_radius_matches_rectangle() {
        let bounds = BoundingBox::new(1, 2, 6, 5);
        let rounded = render(
            &[filled(ShapeKind::RoundedRectangle { radius: 0 }, bounds, RED)],
            8,
        );
        let plain = render(&[filled(ShapeKind::Rectangle, bounds, RED)], 8);
        assert_eq!(rounded.as_raw(), plain.as_raw());
    }

    #[test]
    fn test_ellipse_outline_leaves_center_empty() {
        let ring = Shape::new(
            ShapeKind::Ellipse,
            BoundingBox::new(0, 0, 20, 20),
            Paint::Outline {
                color: RED,
                width: 3,
            },
        );
        let canvas = render(&[ring], 21);

        assert_eq!(canvas.get_pixel(10, 10).0, CLEAR);
        assert_eq!(canvas.get_pixel(0, 10).0, RED.to_array());
        assert_eq!(canvas.get_pixel(10, 20).0, RED.to_array());
        assert_eq!(canvas.get_pixel(0, 0).0, CLEAR);
    }

    #[test]
    fn test_filled_ellipse_covers_center() {
        let disc = filled(ShapeKind::Ellipse, BoundingBox::new(0, 0, 20, 20), RED);
        let canvas = render(&[disc], 21);
        assert_eq!(canvas.get_pixel(10, 10).0, RED.to_array());
        assert_eq!(canvas.get_pixel(0, 0).0, CLEAR);
    }

    #[test]
    fn test_paint_replaces_instead_of_blending() {
        let bounds = BoundingBox::new(0, 0, 3, 3);
        let under = filled(ShapeKind::Rectangle, bounds, RED);
        let over = filled(ShapeKind::Rectangle, bounds, Rgba8::white(40));
        let canvas = render(&[under, over], 4);

        assert!(canvas.pixels().all(|p| p.0 == [255, 255, 255, 40]));
    }
}
