use image::RgbImage;

use crate::color::{expand_gray, luma_plane};
use crate::filters::ImageFilter;

/// Luma desaturation, re-expanded to three identical channels.
pub struct Grayscale;

impl ImageFilter for Grayscale {
    fn name(&self) -> &str {
        "grayscale"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        expand_gray(&luma_plane(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn every_pixel_is_neutral() {
        let mut img = RgbImage::new(4, 3);
        for (x, y, p) in img.enumerate_pixels_mut() {
            *p = Rgb([(x * 60) as u8, (y * 90) as u8, 200]);
        }
        let out = Grayscale.apply(&img);
        for p in out.pixels() {
            let [r, g, b] = p.0;
            assert!(r == g && g == b, "pixel not gray: {r} {g} {b}");
        }
    }

    #[test]
    fn uses_luma_weights() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]));
        assert_eq!(Grayscale.apply(&img).get_pixel(0, 0).0, [150, 150, 150]);
    }
}
