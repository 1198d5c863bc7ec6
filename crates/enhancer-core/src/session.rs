use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::buffer::ImageBuffer;
use crate::error::{EnhancerError, Result};
use crate::filters::{Filter, FilterEngine};
use crate::history::HistoryStack;
use crate::image_buf::{AdjustmentParams, Image};
use crate::io;
use crate::pipeline::AdjustmentEngine;

/// One editing session: the loaded image, what is currently shown, and the
/// undo history.
///
/// ```text
/// Empty --load--> Loaded --adjust|filter--> Modified --undo--> ... --load--> Loaded
/// ```
///
/// Every mutating call computes its result first and only then records
/// history and swaps `current`, so a call either fully happens or leaves the
/// session as it was. Calls made before anything is loaded, and undo with an
/// empty history, do nothing and return `false`.
///
/// A session is plain owned data. To drive it from several threads, wrap
/// the whole session in one `Mutex` so buffer and history change together.
#[derive(Default)]
pub struct Session {
    buffer: ImageBuffer,
    history: HistoryStack,
    params: AdjustmentParams,
    adjustments: AdjustmentEngine,
    filters: FilterEngine,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with non-default filter tunables.
    pub fn with_filters(filters: FilterEngine) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    /// Decode `path` and start over with it. On failure the previous image
    /// and its history stay as they were.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let image = io::load_image(path)?;
        info!(
            ?path,
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.load(image);
        Ok(())
    }

    /// Start over with an already decoded image.
    pub fn load(&mut self, image: Image) {
        self.history.clear();
        self.params = AdjustmentParams::default();
        self.buffer.load(image);
    }

    /// Recompute `current` from the original with `params`.
    pub fn apply_adjustments(&mut self, params: &AdjustmentParams) -> bool {
        let Some(original) = self.buffer.original() else {
            warn!("adjustment requested with no image loaded");
            return false;
        };
        let enhanced = self.adjustments.apply(original, params);
        self.commit(enhanced, params.clamped());
        true
    }

    /// Apply `filter` on top of whatever is currently shown.
    pub fn apply_filter(&mut self, filter: Filter) -> bool {
        let Some(current) = self.buffer.current() else {
            warn!(%filter, "filter requested with no image loaded");
            return false;
        };
        let filtered = self.filters.apply(filter, current);
        self.commit(filtered, self.params);
        true
    }

    /// Parse a filter name and apply it. Unknown names are an error even
    /// when nothing is loaded.
    pub fn apply_filter_named(&mut self, name: &str) -> Result<bool> {
        let filter: Filter = name.parse()?;
        Ok(self.apply_filter(filter))
    }

    /// Restore the most recent history entry, image and params together.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            debug!("nothing to undo");
            return false;
        };
        if !self.buffer.set_current(previous.image) {
            return false;
        }
        self.params = previous.params;
        debug!(remaining = self.history.len(), "undo");
        true
    }

    pub fn current_image(&self) -> Option<&Image> {
        self.buffer.current()
    }

    pub fn original_image(&self) -> Option<&Image> {
        self.buffer.original()
    }

    /// Adjustment values behind what is currently shown (defaults after a
    /// load, rolled back by undo).
    pub fn params(&self) -> &AdjustmentParams {
        &self.params
    }

    pub fn has_image(&self) -> bool {
        self.buffer.is_loaded()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Downscaled copy of `current` for display. The full-resolution image
    /// used for saving is not touched.
    pub fn preview(&self, max_width: u32, max_height: u32) -> Option<Image> {
        self.buffer
            .current()
            .map(|img| img.preview(max_width, max_height))
    }

    /// Write `current` to `path`. Returns `Ok(None)` when nothing is loaded,
    /// otherwise the path written (with `.png` appended if it had no
    /// extension).
    pub fn save(&self, path: &Path) -> Result<Option<PathBuf>> {
        match self.buffer.current() {
            Some(current) => io::save_image(current, path).map(Some),
            None => {
                warn!(?path, "save requested with no image loaded");
                Ok(None)
            }
        }
    }

    /// AI upscaling placeholder. Never changes the session.
    pub fn upscale(&self) -> Result<()> {
        Err(EnhancerError::Unsupported("AI upscaling"))
    }

    fn commit(&mut self, next: Image, params: AdjustmentParams) {
        if let Some(previous) = self.buffer.current().cloned() {
            self.history.push(previous, self.params);
        }
        self.buffer.set_current(next);
        self.params = params;
    }
}
