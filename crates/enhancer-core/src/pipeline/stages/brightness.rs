use image::RgbImage;

use crate::color::blend;
use crate::image_buf::AdjustmentParams;
use crate::pipeline::module::AdjustmentStage;

/// Scales every channel by the brightness factor (a blend toward black).
pub struct Brightness;

impl AdjustmentStage for Brightness {
    fn name(&self) -> &str {
        "brightness"
    }

    fn process(&self, mut input: RgbImage, params: &AdjustmentParams) -> RgbImage {
        if params.brightness == 1.0 {
            return input;
        }

        for v in input.iter_mut() {
            *v = blend(0, *v, params.brightness);
        }
        input
    }
}
