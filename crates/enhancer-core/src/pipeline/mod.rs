pub mod module;
pub mod stages;

use std::time::Instant;

use tracing::{debug, warn};

use crate::image_buf::{AdjustmentParams, Image};
use module::AdjustmentStage;

/// Adjustment pipeline that chains stages together.
///
/// ```text
/// original -> Brightness -> Contrast -> Sharpness -> Color -> enhanced
/// ```
///
/// The order is fixed: with clamping at every stage the four remaps do not
/// commute. Each call starts again from the original image, so successive
/// calls overwrite one another rather than compounding.
pub struct AdjustmentEngine {
    stages: Vec<Box<dyn AdjustmentStage>>,
}

impl AdjustmentEngine {
    pub fn new() -> Self {
        Self {
            stages: vec![
                Box::new(stages::Brightness),
                Box::new(stages::Contrast),
                Box::new(stages::Sharpness),
                Box::new(stages::Color),
            ],
        }
    }

    /// Recompute the enhanced image from `original`. Out-of-range factors are
    /// clamped to [0.1, 2.0] first.
    pub fn apply(&self, original: &Image, params: &AdjustmentParams) -> Image {
        let clamped = params.clamped();
        if clamped != *params {
            warn!(?params, ?clamped, "adjustment factors out of range, clamping");
        }
        if clamped.is_identity() {
            return original.clone();
        }

        let t0 = Instant::now();
        let mut current = original.as_rgb().clone();
        for stage in &self.stages {
            let t = Instant::now();
            current = stage.process(current, &clamped);
            debug!(
                stage = stage.name(),
                elapsed_ms = t.elapsed().as_millis(),
                "processing"
            );
        }
        debug!(elapsed_ms = t0.elapsed().as_millis(), "total adjustments");
        Image::from_rgb(current)
    }
}

impl Default for AdjustmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Image {
        let mut data = Vec::with_capacity(8 * 8 * 3);
        for y in 0..8u32 {
            for x in 0..8u32 {
                data.push((x * 30) as u8);
                data.push((y * 30) as u8);
                data.push(((x + y) * 15) as u8);
            }
        }
        Image::from_data(8, 8, data).unwrap()
    }

    #[test]
    fn default_params_are_identity() {
        let engine = AdjustmentEngine::new();
        let input = gradient();
        let output = engine.apply(&input, &AdjustmentParams::default());
        assert_eq!(output, input);
        assert!(output.shares_pixels(&input));
    }

    #[test]
    fn brightness_doubles_channels() {
        let engine = AdjustmentEngine::new();
        let input = gradient();
        let params = AdjustmentParams {
            brightness: 2.0,
            ..Default::default()
        };
        let output = engine.apply(&input, &params);
        for (o, i) in output.as_raw().iter().zip(input.as_raw()) {
            assert_eq!(*o as u32, (*i as u32 * 2).min(255));
        }
    }

    #[test]
    fn deterministic() {
        let engine = AdjustmentEngine::new();
        let input = gradient();
        let params = AdjustmentParams {
            brightness: 1.3,
            contrast: 0.7,
            sharpness: 1.8,
            color: 1.4,
        };
        let a = engine.apply(&input, &params);
        let b = engine.apply(&input, &params);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn does_not_touch_original() {
        let engine = AdjustmentEngine::new();
        let input = gradient();
        let before = input.as_raw().to_vec();
        let params = AdjustmentParams {
            brightness: 0.4,
            contrast: 2.0,
            sharpness: 0.1,
            color: 2.0,
        };
        let _ = engine.apply(&input, &params);
        assert_eq!(input.as_raw(), before.as_slice());
    }

    #[test]
    fn out_of_range_is_clamped_not_rejected() {
        let engine = AdjustmentEngine::new();
        let input = gradient();
        let wild = AdjustmentParams {
            brightness: 9.0,
            ..Default::default()
        };
        let capped = AdjustmentParams {
            brightness: 2.0,
            ..Default::default()
        };
        assert_eq!(engine.apply(&input, &wild), engine.apply(&input, &capped));
    }

    #[test]
    fn order_is_fixed() {
        let engine = AdjustmentEngine::new();
        let names: Vec<&str> = engine.stages.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["brightness", "contrast", "sharpness", "color"]);
    }

    #[test]
    fn preserves_dimensions() {
        let engine = AdjustmentEngine::new();
        let input = Image::from_pixel(13, 7, [40, 90, 160]);
        let params = AdjustmentParams {
            brightness: 1.5,
            contrast: 1.5,
            sharpness: 1.5,
            color: 1.5,
        };
        let output = engine.apply(&input, &params);
        assert_eq!((output.width(), output.height()), (13, 7));
    }
}
