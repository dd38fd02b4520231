use crate::error::IconError;
use crate::models::{ArtifactFormat, ICON_RECIPE, ICON_SIZE, Shape, TRANSPARENT};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{ImageFormat, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

/// Formats the raster toolkit must be able to write for a run to succeed.
/// ICO frames are produced by the `ico` crate, which is always linked.
const REQUIRED_ENCODERS: [(ImageFormat, &str); 1] = [(ImageFormat::Png, "PNG encoder")];

/// Checks that every encoder a run needs was compiled into `image`.
pub fn probe_encoders() -> Result<(), IconError> {
    for (format, dependency) in REQUIRED_ENCODERS {
        if !format.writing_enabled() {
            return Err(IconError::MissingDependency {
                dependency,
                remedy: "rebuild with the `png` feature of the `image` crate enabled",
            });
        }
    }
    Ok(())
}

/// Allocates a fully transparent canvas.
pub fn blank_canvas() -> RgbaImage {
    RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, TRANSPARENT)
}

/// Fills one shape. Pixels are replaced, not blended.
pub fn draw_shape(canvas: &mut RgbaImage, shape: &Shape) {
    match *shape {
        Shape::Ellipse { bounds, color } => {
            let center = ((bounds.x0 + bounds.x1) / 2, (bounds.y0 + bounds.y1) / 2);
            let width_radius = (bounds.x1 - bounds.x0) / 2;
            let height_radius = (bounds.y1 - bounds.y0) / 2;
            draw_filled_ellipse_mut(canvas, center, width_radius, height_radius, color);
        }
        Shape::Rect { bounds, color } => {
            let rect = Rect::at(bounds.x0, bounds.y0).of_size(bounds.width(), bounds.height());
            draw_filled_rect_mut(canvas, rect, color);
        }
    }
}

/// Draws the full icon recipe onto a fresh canvas.
pub fn render_icon() -> RgbaImage {
    let mut canvas = blank_canvas();
    for shape in &ICON_RECIPE {
        draw_shape(&mut canvas, shape);
    }
    canvas
}

/// Encodes the canvas into the bytes of a single file.
pub fn encode_artifact(canvas: &RgbaImage, format: ArtifactFormat) -> Result<Vec<u8>, IconError> {
    match format {
        ArtifactFormat::Ico => encode_ico(canvas).map_err(|e| IconError::Encode(e.into())),
        ArtifactFormat::Png => {
            let mut buffer = Cursor::new(Vec::new());
            canvas.write_to(&mut buffer, ImageFormat::Png)?;
            Ok(buffer.into_inner())
        }
    }
}

/// Builds an icon directory with exactly one frame the size of the canvas.
fn encode_ico(canvas: &RgbaImage) -> io::Result<Vec<u8>> {
    let frame = IconImage::from_rgba_data(canvas.width(), canvas.height(), canvas.as_raw().clone());
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    icon_dir.add_entry(IconDirEntry::encode(&frame)?);
    let mut bytes = Vec::new();
    icon_dir.write(&mut bytes)?;
    Ok(bytes)
}

/// Writes the bytes to disk, replacing any previous file.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    fs::write(path, bytes).map_err(|e| IconError::io(path, e))
}

/// Calculates the SHA256 hash of an encoded artifact.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
