use image::RgbImage;

use crate::color::{blend, luma};
use crate::image_buf::AdjustmentParams;
use crate::pipeline::module::AdjustmentStage;

/// Scales each channel's distance from the image's mean luma.
pub struct Contrast;

impl AdjustmentStage for Contrast {
    fn name(&self) -> &str {
        "contrast"
    }

    fn process(&self, mut input: RgbImage, params: &AdjustmentParams) -> RgbImage {
        if params.contrast == 1.0 || input.is_empty() {
            return input;
        }

        let mean = mean_luma(&input);
        for v in input.iter_mut() {
            *v = blend(mean, *v, params.contrast);
        }
        input
    }
}

/// Mean luma of all pixels, rounded to the nearest level.
pub(crate) fn mean_luma(img: &RgbImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = img
        .pixels()
        .map(|p| luma(p.0[0], p.0[1], p.0[2]) as u64)
        .sum();
    ((sum + count / 2) / count) as u8
}
