use crate::error::IconError;
use crate::raster;
use crate::shapes;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use log::debug;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Side length of the generated icon in pixels
pub const CANVAS_SIZE: u32 = 1024;

/// Where the icon is written when no other path is given
pub const DEFAULT_OUTPUT: &str = "assets/icon/AppIcon-1024.png";

/// Composes the icon, renders it and writes it as a PNG to `output`
///
/// The parent directory of `output` must already exist. An existing file is
/// replaced atomically; on failure nothing is left at `output`.
pub fn generate(output: &Path) -> Result<PathBuf, IconError> {
    let canvas = render_icon();
    let png = encode_png(&canvas)?;
    write_png_atomic(&png, output)?;
    Ok(output.to_path_buf())
}

/// Renders the icon in memory without touching the filesystem
pub fn render_icon() -> RgbaImage {
    let shapes = shapes::compose(CANVAS_SIZE);
    debug!(
        "Composed {} shapes on a {}x{} canvas",
        shapes.len(),
        CANVAS_SIZE,
        CANVAS_SIZE
    );
    raster::render(&shapes, CANVAS_SIZE)
}

/// Encode an RGBA canvas as PNG with compression
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8,
    )?;
    debug!("Encoded PNG: {} bytes", buf.len());
    Ok(buf)
}

/// Writes `data` to a temp file next to `path`, then renames it into place
pub fn write_png_atomic(data: &[u8], path: &Path) -> Result<(), IconError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(IconError::OutputDirMissing(dir.to_path_buf()));
    }

    let io_err = |source| IconError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Dropping the temp file on an early return deletes it.
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(data).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    debug!("Renaming {} -> {}", tmp.path().display(), path.display());
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
