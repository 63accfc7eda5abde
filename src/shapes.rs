//! Shape descriptors for the app icon
//!
//! The icon is described as an ordered list of [`Shape`]s, back to front.
//! Nothing in here touches pixels: [`compose`] is a pure function of the
//! canvas size, which keeps the geometry and the color math testable without
//! an imaging backend. Rasterization lives in [`crate::raster`].

/// Number of rounded rectangles stacked to fake the background gradient
pub const BACKGROUND_LAYERS: u32 = 16;

/// Straight (non-premultiplied) RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// White with the given alpha
    pub const fn white(a: u8) -> Self {
        Self::new(255, 255, 255, a)
    }

    /// Builds a color from wide integer channels, saturating each to `0..=255`
    pub fn saturating(r: i32, g: i32, b: i32, a: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, u8::MAX as i32) as u8;
        Self::new(clamp(r), clamp(g), clamp(b), clamp(a))
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Inclusive pixel bounding box `[x0, y0]`..=`[x1, y1]`
///
/// Coordinates may reach past the last canvas pixel (the outermost background
/// layer ends at `size`, not `size - 1`); the rasterizer clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box shrunk by `amount` on every side
    pub const fn inset(self, amount: i32) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    /// Number of pixel columns covered
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Number of pixel rows covered
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// True when `other` lies strictly inside `self` on all four sides
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        other.x0 > self.x0 && other.y0 > self.y0 && other.x1 < self.x1 && other.y1 < self.y1
    }

    /// True when every coordinate lies in `0..=size`
    pub fn within_canvas(&self, size: u32) -> bool {
        let size = size as i32;
        self.x0 >= 0 && self.y0 >= 0 && self.x1 <= size && self.y1 <= size
    }
}

/// Geometry of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle { radius: i32 },
    Ellipse,
}

/// How a shape is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill(Rgba8),
    /// Outline only, `width` pixels thick, drawn inward from the bounds
    Outline { color: Rgba8, width: i32 },
}

impl Paint {
    pub const fn color(&self) -> Rgba8 {
        match self {
            Paint::Fill(color) | Paint::Outline { color, .. } => *color,
        }
    }

    pub const fn is_filled(&self) -> bool {
        matches!(self, Paint::Fill(_))
    }
}

/// A single drawing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub bounds: BoundingBox,
    pub paint: Paint,
}

impl Shape {
    pub const fn new(kind: ShapeKind, bounds: BoundingBox, paint: Paint) -> Self {
        Self {
            kind,
            bounds,
            paint,
        }
    }
}

/// Alpha of background layer `i`: `235 - 8i`, never below 20
pub fn layer_alpha(i: u32) -> i32 {
    (235 - 8 * i as i32).max(20)
}

/// Fill color of background layer `i`
pub fn layer_color(i: u32) -> Rgba8 {
    let i = i as i32;
    Rgba8::saturating(30 + i * 6, 120 + i * 3, 235 - i * 4, layer_alpha(i as u32))
}

pub fn layer_inset(i: u32) -> i32 {
    i as i32 * 10
}

pub fn layer_radius(i: u32) -> i32 {
    220 - i as i32 * 5
}

/// Rounded rectangle for background layer `i` on a `size` canvas
pub fn background_layer(i: u32, size: u32) -> Shape {
    let inset = layer_inset(i);
    let size = size as i32;
    Shape::new(
        ShapeKind::RoundedRectangle {
            radius: layer_radius(i),
        },
        BoundingBox::new(inset, inset, size - inset, size - inset),
        Paint::Fill(layer_color(i)),
    )
}

/// The two crossed orbital rings
pub fn rings() -> [Shape; 2] {
    [
        Shape::new(
            ShapeKind::Ellipse,
            BoundingBox::new(170, 240, 860, 830),
            Paint::Outline {
                color: Rgba8::white(180),
                width: 26,
            },
        ),
        Shape::new(
            ShapeKind::Ellipse,
            BoundingBox::new(240, 170, 830, 860),
            Paint::Outline {
                color: Rgba8::white(130),
                width: 20,
            },
        ),
    ]
}

/// Central glyph: a rounded square crossed by a horizontal bar
pub fn glyph() -> [Shape; 2] {
    [
        Shape::new(
            ShapeKind::RoundedRectangle { radius: 64 },
            BoundingBox::new(390, 390, 634, 634),
            Paint::Fill(Rgba8::white(238)),
        ),
        Shape::new(
            ShapeKind::Rectangle,
            BoundingBox::new(300, 470, 724, 554),
            Paint::Fill(Rgba8::white(220)),
        ),
    ]
}

/// Full drawing list for the icon, back to front
pub fn compose(size: u32) -> Vec<Shape> {
    let mut shapes: Vec<Shape> = (0..BACKGROUND_LAYERS)
        .map(|i| background_layer(i, size))
        .collect();
    shapes.extend(rings());
    shapes.extend(glyph());
    shapes
}
