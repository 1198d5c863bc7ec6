use image::{DynamicImage, Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;

use crate::color::to_u8;
use crate::filters::ImageFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurConfig {
    /// Gaussian standard deviation in pixels.
    pub sigma: f32,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self { sigma: 2.0 }
    }
}

impl ImageFilter for BlurConfig {
    fn name(&self) -> &str {
        "blur"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        // imageproc panics on a non-positive sigma
        if self.sigma.is_nan() || self.sigma <= 0.0 {
            return input.clone();
        }
        // Blur in f32 so the separable passes do not truncate twice.
        let linear = DynamicImage::ImageRgb8(input.clone()).into_rgb32f();
        let blurred = gaussian_blur_f32(&linear, self.sigma);

        let mut out = RgbImage::new(input.width(), input.height());
        for (dst, src) in out.pixels_mut().zip(blurred.pixels()) {
            let [r, g, b] = src.0;
            *dst = Rgb([to_u8(r * 255.0), to_u8(g * 255.0), to_u8(b * 255.0)]);
        }
        out
    }
}
