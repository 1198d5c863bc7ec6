use image::RgbImage;

use crate::color::blend;
use crate::image_buf::AdjustmentParams;
use crate::kernel::{SMOOTH, convolve3};
use crate::pipeline::module::AdjustmentStage;

/// Blends between a 3x3-smoothed copy (factor 0) and the input (factor 1).
/// Factors above 1 push away from the smoothed copy, which is unsharp masking.
pub struct Sharpness;

impl AdjustmentStage for Sharpness {
    fn name(&self) -> &str {
        "sharpness"
    }

    fn process(&self, mut input: RgbImage, params: &AdjustmentParams) -> RgbImage {
        if params.sharpness == 1.0 {
            return input;
        }

        let smooth = convolve3(&input, &SMOOTH);
        for (v, s) in input.iter_mut().zip(smooth.iter()) {
            *v = blend(*s, *v, params.sharpness);
        }
        input
    }
}
