use image::RgbImage;

use crate::filters::ImageFilter;
use crate::kernel::{FIND_EDGES, convolve3};

/// Laplacian edge emphasis: flat areas go black, transitions stay bright.
pub struct FindEdges;

impl ImageFilter for FindEdges {
    fn name(&self) -> &str {
        "edge"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        convolve3(input, &FIND_EDGES)
    }
}
