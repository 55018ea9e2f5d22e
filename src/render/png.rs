//! Image file input and output for canvases.
//!
//! Decoding accepts any format the `image` crate recognises and converts it
//! to RGBA8. Encoding picks the format from the output extension.

use std::fs;
use std::path::Path;

use crate::error::{Result, ScatterError};

use super::Canvas;

/// Decode an image file into a canvas.
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let image = image::open(path).map_err(|e| ScatterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    Canvas::from_image(image.to_rgba8())
}

/// Write a canvas to an image file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ScatterError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    canvas.image().save(path).map_err(|e| match e {
        image::ImageError::Unsupported(_) => ScatterError::Image {
            message: format!("Unsupported output format for {}: {}", path.display(), e),
        },
        _ => ScatterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write image: {}", e),
        },
    })?;

    Ok(())
}
