use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{ImageError, ImageFormat, ImageReader};
use tracing::{debug, info};

use crate::error::{EnhancerError, Result};
use crate::image_buf::Image;

/// Extensions accepted by [`load_image`].
pub const LOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Extension appended to save paths that have none.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

pub fn is_loadable_extension(ext: &str) -> bool {
    LOAD_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Decode a JPEG, PNG or BMP file into 8-bit RGB. Alpha is dropped and
/// grayscale sources are expanded to three channels. The decoder is picked
/// from the file content, so a PNG named `.jpg` still loads.
pub fn load_image(path: &Path) -> Result<Image> {
    match extension(path) {
        Some(ext) if is_loadable_extension(&ext) => {}
        _ => {
            return Err(EnhancerError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    }

    info!(?path, "loading image file");
    let t0 = Instant::now();
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| EnhancerError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        elapsed_ms = t0.elapsed().as_millis(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "image decode"
    );

    Ok(Image::from_rgb(decoded.into_rgb8()))
}

/// Encoder chosen by the save path's extension: PNG or JPEG.
pub fn output_format(path: &Path) -> Option<ImageFormat> {
    match extension(path)?.as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        _ => None,
    }
}

/// `path` with `.png` appended when it has no extension.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}

/// Encode `image` to disk. Returns the path actually written.
pub fn save_image(image: &Image, path: &Path) -> Result<PathBuf> {
    let path = resolve_save_path(path);
    let format = output_format(&path).ok_or_else(|| EnhancerError::UnsupportedFormat {
        path: path.clone(),
    })?;

    let t0 = Instant::now();
    image
        .as_rgb()
        .save_with_format(&path, format)
        .map_err(|source| EnhancerError::Encode {
            path: path.clone(),
            source,
        })?;
    info!(
        ?path,
        ?format,
        elapsed_ms = t0.elapsed().as_millis(),
        "saved image"
    );
    Ok(path)
}
