use image::{Rgb, RgbImage};
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::median_filter;

use crate::color::{luma_plane, to_u8};
use crate::filters::ImageFilter;

/// Flattened, outlined look: an adaptive-threshold edge mask over a
/// bilateral-smoothed copy of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartoonConfig {
    /// Median window radius for denoising the luma (2 -> 5x5).
    pub median_radius: u32,
    /// Adaptive threshold block radius (4 -> 9x9). Blocks are cropped at the
    /// image border.
    pub block_radius: u32,
    /// A pixel is an outline when it sits at least this far below its block
    /// mean.
    pub threshold_offset: i32,
    /// Bilateral window radius (4 -> diameter 9).
    pub bilateral_radius: u32,
    pub sigma_color: f32,
    pub sigma_space: f32,
}

impl Default for CartoonConfig {
    fn default() -> Self {
        Self {
            median_radius: 2,
            block_radius: 4,
            threshold_offset: 9,
            bilateral_radius: 4,
            sigma_color: 250.0,
            sigma_space: 250.0,
        }
    }
}

impl ImageFilter for CartoonConfig {
    fn name(&self) -> &str {
        "cartoon"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        let gray = luma_plane(input);
        let denoised = median_filter(&gray, self.median_radius, self.median_radius);
        // imageproc keeps pixels >= mean - delta; outlines need a strict dip
        let mask = adaptive_threshold(
            &denoised,
            self.block_radius.max(1),
            self.threshold_offset - 1,
        );
        let mut out = bilateral(
            input,
            self.bilateral_radius,
            self.sigma_color,
            self.sigma_space,
        );

        for (pixel, m) in out.pixels_mut().zip(mask.pixels()) {
            if m.0[0] == 0 {
                *pixel = Rgb([0, 0, 0]);
            }
        }
        out
    }
}

/// Edge-preserving smoothing over a circular window. Color distance is the
/// L1 sum of channel differences.
fn bilateral(img: &RgbImage, radius: u32, sigma_color: f32, sigma_space: f32) -> RgbImage {
    let (width, height) = img.dimensions();
    let r = radius as i64;
    let color_coeff = -0.5 / (sigma_color * sigma_color).max(f32::EPSILON);
    let space_coeff = -0.5 / (sigma_space * sigma_space).max(f32::EPSILON);

    let mut window = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = (dx * dx + dy * dy) as f32;
            if d2 <= (r * r) as f32 {
                window.push((dx, dy, (d2 * space_coeff).exp()));
            }
        }
    }
    let color_weight: Vec<f32> = (0..=255 * 3)
        .map(|d| ((d * d) as f32 * color_coeff).exp())
        .collect();

    let mut out = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let center = img.get_pixel(x, y).0;
            let mut acc = [0.0_f32; 3];
            let mut total = 0.0_f32;
            for &(dx, dy, space_w) in &window {
                let sx = clamp_index(x as i64 + dx, width);
                let sy = clamp_index(y as i64 + dy, height);
                let p = img.get_pixel(sx, sy).0;
                let dist: usize = (0..3).map(|c| p[c].abs_diff(center[c]) as usize).sum();
                let w = space_w * color_weight[dist];
                acc[0] += w * p[0] as f32;
                acc[1] += w * p[1] as f32;
                acc[2] += w * p[2] as f32;
                total += w;
            }
            out.put_pixel(
                x,
                y,
                Rgb([
                    to_u8(acc[0] / total),
                    to_u8(acc[1] / total),
                    to_u8(acc[2] / total),
                ]),
            );
        }
    }
    out
}

fn clamp_index(i: i64, len: u32) -> u32 {
    i.clamp(0, len as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded() -> RgbImage {
        // white field with a 3px dark vertical band at x = 9..12
        let mut img = RgbImage::from_pixel(21, 21, Rgb([255, 255, 255]));
        for y in 0..21 {
            for x in 9..12 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        img
    }

    #[test]
    fn flat_image_unchanged() {
        let img = RgbImage::from_pixel(10, 10, Rgb([120, 60, 200]));
        let out = CartoonConfig::default().apply(&img);
        assert_eq!(out, img);
    }

    #[test]
    fn dark_band_becomes_outline() {
        let out = CartoonConfig::default().apply(&banded());
        assert_eq!(out.get_pixel(10, 10).0, [0, 0, 0]);
        // far from the band the field stays white
        assert_eq!(out.get_pixel(1, 10).0, [255, 255, 255]);
        assert_eq!(out.get_pixel(19, 10).0, [255, 255, 255]);
    }

    #[test]
    fn isolated_dark_spot_is_outlined() {
        let mut img = RgbImage::from_pixel(11, 11, Rgb([200, 200, 200]));
        for y in 3..8 {
            for x in 3..8 {
                img.put_pixel(x, y, Rgb([10, 10, 10]));
            }
        }
        let out = CartoonConfig::default().apply(&img);
        assert_eq!(out.get_pixel(5, 5).0, [0, 0, 0]);
        assert_eq!(out.get_pixel(0, 0).0, [200, 200, 200]);
    }

    #[test]
    fn shallow_dips_are_not_outlined() {
        // a 3px stripe 8 levels below a mid-gray field survives the median
        // but stays within the threshold offset
        let mut img = RgbImage::from_pixel(15, 15, Rgb([128, 128, 128]));
        for y in 0..15 {
            for x in 6..9 {
                img.put_pixel(x, y, Rgb([120, 120, 120]));
            }
        }
        let out = CartoonConfig::default().apply(&img);
        assert!(out.pixels().all(|p| p.0 != [0, 0, 0]));
    }

    #[test]
    fn bilateral_keeps_strong_edges() {
        let out = bilateral(&banded(), 4, 30.0, 250.0);
        assert!(out.get_pixel(10, 10).0[0] < 10);
        assert!(out.get_pixel(8, 10).0[0] > 245);
    }

    #[test]
    fn preserves_dimensions() {
        let img = RgbImage::from_pixel(7, 3, Rgb([5, 5, 5]));
        assert_eq!(CartoonConfig::default().apply(&img).dimensions(), (7, 3));
    }
}
