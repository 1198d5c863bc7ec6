mod blur;
mod cartoon;
mod edge;
mod grayscale;
mod sepia;
mod sketch;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EnhancerError;
use crate::image_buf::Image;

pub use blur::BlurConfig;
pub use cartoon::CartoonConfig;
pub use edge::FindEdges;
pub use grayscale::Grayscale;
pub use sepia::Sepia;
pub use sketch::SketchConfig;

/// A discrete, stateless transform. Reads its input, returns a new image.
pub trait ImageFilter: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, input: &RgbImage) -> RgbImage;
}

/// The filters offered to the user, in toolbar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    Grayscale,
    Sepia,
    Blur,
    Edge,
    Cartoon,
    Sketch,
}

impl Filter {
    pub const ALL: [Filter; 6] = [
        Filter::Grayscale,
        Filter::Sepia,
        Filter::Blur,
        Filter::Edge,
        Filter::Cartoon,
        Filter::Sketch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Blur => "blur",
            Filter::Edge => "edge",
            Filter::Cartoon => "cartoon",
            Filter::Sketch => "sketch",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = EnhancerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EnhancerError::UnknownFilter(s.to_string()))
    }
}

/// Applies filters to the current image. Filters compose: each one reads
/// whatever the previous adjustments and filters produced.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    blur: BlurConfig,
    cartoon: CartoonConfig,
    sketch: SketchConfig,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blur(mut self, blur: BlurConfig) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_cartoon(mut self, cartoon: CartoonConfig) -> Self {
        self.cartoon = cartoon;
        self
    }

    pub fn with_sketch(mut self, sketch: SketchConfig) -> Self {
        self.sketch = sketch;
        self
    }

    fn filter(&self, filter: Filter) -> &dyn ImageFilter {
        match filter {
            Filter::Grayscale => &Grayscale,
            Filter::Sepia => &Sepia,
            Filter::Blur => &self.blur,
            Filter::Edge => &FindEdges,
            Filter::Cartoon => &self.cartoon,
            Filter::Sketch => &self.sketch,
        }
    }

    pub fn apply(&self, filter: Filter, current: &Image) -> Image {
        if current.is_empty() {
            return current.clone();
        }

        let t0 = Instant::now();
        let imp = self.filter(filter);
        let out = imp.apply(current.as_rgb());
        debug!(
            filter = imp.name(),
            width = out.width(),
            height = out.height(),
            elapsed_ms = t0.elapsed().as_millis(),
            "filter applied"
        );
        Image::from_rgb(out)
    }
}
