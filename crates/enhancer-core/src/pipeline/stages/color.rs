use image::RgbImage;

use crate::color::{blend, luma};
use crate::image_buf::AdjustmentParams;
use crate::pipeline::module::AdjustmentStage;

/// Blends between the pixel's luma (factor 0) and its full color (factor 1).
pub struct Color;

impl AdjustmentStage for Color {
    fn name(&self) -> &str {
        "color"
    }

    fn process(&self, mut input: RgbImage, params: &AdjustmentParams) -> RgbImage {
        if params.color == 1.0 {
            return input;
        }

        for pixel in input.pixels_mut() {
            let [r, g, b] = pixel.0;
            let y = luma(r, g, b);
            pixel.0 = [
                blend(y, r, params.color),
                blend(y, g, params.color),
                blend(y, b, params.color),
            ];
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn params(color: f32) -> AdjustmentParams {
        AdjustmentParams {
            color,
            ..Default::default()
        }
    }

    #[test]
    fn neutral_is_identity() {
        let img = RgbImage::from_pixel(2, 2, Rgb([200, 80, 30]));
        assert_eq!(Color.process(img.clone(), &params(1.0)), img);
    }

    #[test]
    fn minimum_is_nearly_gray() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 80, 30]));
        let out = Color.process(img, &params(0.1));
        let [r, g, b] = out.get_pixel(0, 0).0;
        assert!(r.abs_diff(g) < 15 && g.abs_diff(b) < 15, "{r} {g} {b}");
    }

    #[test]
    fn oversaturate_widens_spread_and_clamps() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 80, 30]));
        let out = Color.process(img, &params(2.0));
        let [r, _, b] = out.get_pixel(0, 0).0;
        assert!(r as i32 - b as i32 > 170);
        assert_eq!(b, 0);
    }

    #[test]
    fn gray_pixel_stays_gray() {
        let img = RgbImage::from_pixel(1, 1, Rgb([90, 90, 90]));
        for f in [0.1, 0.5, 2.0] {
            let out = Color.process(img.clone(), &params(f));
            assert_eq!(out.get_pixel(0, 0).0, [90, 90, 90], "factor {f}");
        }
    }
}
