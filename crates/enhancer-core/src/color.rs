use image::{GrayImage, Luma, Rgb, RgbImage};

/// ITU-R 601 luma in 16.16 fixed point. The weights sum to exactly 1 << 16,
/// so white maps to 255 and equal channels map to themselves.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Round to nearest and clamp into the 8-bit channel range.
pub fn to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Linear blend from `degenerate` (factor 0) to `original` (factor 1),
/// extrapolating beyond 1.
pub fn blend(degenerate: u8, original: u8, factor: f32) -> u8 {
    let d = degenerate as f32;
    to_u8(d + factor * (original as f32 - d))
}

/// Single-channel luma plane of an RGB image.
pub fn luma_plane(img: &RgbImage) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        let [r, g, b] = src.0;
        *dst = Luma([luma(r, g, b)]);
    }
    out
}

/// Re-expand a luma plane to three identical channels.
pub fn expand_gray(gray: &GrayImage) -> RgbImage {
    let mut out = RgbImage::new(gray.width(), gray.height());
    for (dst, src) in out.pixels_mut().zip(gray.pixels()) {
        let v = src.0[0];
        *dst = Rgb([v, v, v]);
    }
    out
}
