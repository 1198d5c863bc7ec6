use image::RgbImage;

use crate::image_buf::AdjustmentParams;

/// A single step in the adjustment pipeline.
pub trait AdjustmentStage: Send + Sync {
    fn name(&self) -> &str;
    fn process(&self, input: RgbImage, params: &AdjustmentParams) -> RgbImage;
}
