use std::sync::Arc;

use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::{EnhancerError, Result};

/// Immutable 8-bit RGB image.
///
/// Pixels live behind an `Arc`, so cloning an `Image` shares the buffer
/// instead of copying it. Every transform returns a fresh `Image`; nothing
/// mutates pixels in place once they are wrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pixels: Arc<RgbImage>,
}

impl Image {
    /// Black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_rgb(RgbImage::new(width, height))
    }

    pub fn from_pixel(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::from_rgb(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    /// Wrap interleaved `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let pixels = RgbImage::from_raw(width, height, data).ok_or(EnhancerError::InvalidBuffer {
            width,
            height,
            expected,
            actual,
        })?;
        // from_raw accepts oversized buffers; we don't.
        if actual != expected {
            return Err(EnhancerError::InvalidBuffer {
                width,
                height,
                expected,
                actual,
            });
        }
        Ok(Self::from_rgb(pixels))
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// Flat pixel data: [R, G, B, R, G, B, ...].
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Take the pixels out, copying only if another `Image` still shares them.
    pub fn into_rgb(self) -> RgbImage {
        Arc::unwrap_or_clone(self.pixels)
    }

    /// True when both images point at the same pixel allocation.
    pub fn shares_pixels(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    /// Resize so the image fits within `max_width` x `max_height`, keeping
    /// the aspect ratio. Returns a shared clone if it already fits.
    pub fn preview(&self, max_width: u32, max_height: u32) -> Self {
        let (width, height) = (self.width(), self.height());
        if self.is_empty() || (width <= max_width && height <= max_height) {
            return self.clone();
        }

        let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
        let new_w = (width as f32 * scale).round().max(1.0) as u32;
        let new_h = (height as f32 * scale).round().max(1.0) as u32;
        Self::from_rgb(image::imageops::resize(
            self.as_rgb(),
            new_w,
            new_h,
            FilterType::Lanczos3,
        ))
    }
}

impl From<RgbImage> for Image {
    fn from(pixels: RgbImage) -> Self {
        Self::from_rgb(pixels)
    }
}

/// Lowest accepted adjustment factor.
pub const FACTOR_MIN: f32 = 0.1;
/// Highest accepted adjustment factor.
pub const FACTOR_MAX: f32 = 2.0;

/// Slider snapshot for the four continuous adjustments.
///
/// Each factor is a blend weight: 1.0 leaves the image untouched, lower
/// values move toward the degenerate image (black, flat gray, blurred,
/// grayscale), higher values extrapolate away from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    pub brightness: f32,
    pub contrast: f32,
    pub sharpness: f32,
    pub color: f32,
}

impl AdjustmentParams {
    /// Copy with every factor forced into [`FACTOR_MIN`, `FACTOR_MAX`].
    /// Non-finite values fall back to the neutral 1.0.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: clamp_factor(self.brightness),
            contrast: clamp_factor(self.contrast),
            sharpness: clamp_factor(self.sharpness),
            color: clamp_factor(self.color),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            sharpness: 1.0,
            color: 1.0,
        }
    }
}

fn clamp_factor(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(FACTOR_MIN, FACTOR_MAX)
    } else {
        1.0
    }
}
