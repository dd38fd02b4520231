use image::Rgba;
use std::fmt;
use std::path::PathBuf;

/// Width and height of the generated icon, in pixels.
pub const ICON_SIZE: u32 = 32;

/// Colour the canvas starts with.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
/// Fill of the background circle.
pub const CIRCLE_BLUE: Rgba<u8> = Rgba([52, 152, 219, 255]);
/// Fill of the letter strokes.
pub const GLYPH_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// An inclusive pixel box: both corners are painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1) as u32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A filled primitive drawn onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Ellipse inscribed in the bounding box.
    Ellipse { bounds: Bounds, color: Rgba<u8> },
    Rect { bounds: Bounds, color: Rgba<u8> },
}

/// The drawing recipe, applied in order. Later shapes overwrite earlier ones.
/// The four rectangles sketch a blocky "R" on top of the circle.
pub const ICON_RECIPE: [Shape; 5] = [
    Shape::Ellipse {
        bounds: Bounds::new(2, 2, 30, 30),
        color: CIRCLE_BLUE,
    },
    Shape::Rect {
        bounds: Bounds::new(8, 8, 12, 24),
        color: GLYPH_WHITE,
    },
    Shape::Rect {
        bounds: Bounds::new(8, 8, 20, 12),
        color: GLYPH_WHITE,
    },
    Shape::Rect {
        bounds: Bounds::new(8, 14, 18, 18),
        color: GLYPH_WHITE,
    },
    Shape::Rect {
        bounds: Bounds::new(16, 18, 20, 24),
        color: GLYPH_WHITE,
    },
];

/// File formats the canvas is persisted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Icon container holding a single frame.
    Ico,
    Png,
}

/// Status lines sent from the generator to whoever drives it.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// A file was written successfully.
    Written {
        path: PathBuf,
        bytes: u64,
        sha256: String,
    },
    /// The raster toolkit lacks a capability the generator needs.
    MissingDependency {
        dependency: String,
        remedy: String,
    },
    /// Any other failure, carrying the underlying description.
    Failed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Written { path, .. } => write!(f, "✅ 创建了 {}", path.display()),
            Notice::MissingDependency { dependency, remedy } => {
                write!(f, "❌ 需要 {dependency}: {remedy}")
            }
            Notice::Failed(reason) => write!(f, "❌ 创建图标失败: {reason}"),
        }
    }
}
