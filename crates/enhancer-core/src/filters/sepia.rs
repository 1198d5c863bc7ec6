use image::RgbImage;

use crate::color::to_u8;
use crate::filters::ImageFilter;

/// Classic sepia tone matrix, rows produce R', G', B'.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

pub struct Sepia;

impl ImageFilter for Sepia {
    fn name(&self) -> &str {
        "sepia"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        let mut out = input.clone();
        for pixel in out.pixels_mut() {
            let [r, g, b] = pixel.0.map(|v| v as f32);
            pixel.0 = SEPIA.map(|w| to_u8(w[0] * r + w[1] * g + w[2] * b));
        }
        out
    }
}
