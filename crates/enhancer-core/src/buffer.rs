use crate::image_buf::Image;

/// The loaded image and the image currently shown.
///
/// Both slots are empty until the first load and filled together by it;
/// `current` is always derived from `original`.
#[derive(Debug, Clone, Default)]
pub struct ImageBuffer {
    original: Option<Image>,
    current: Option<Image>,
}

impl ImageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both slots to `image`. The two share one pixel allocation.
    pub fn load(&mut self, image: Image) {
        self.current = Some(image.clone());
        self.original = Some(image);
    }

    /// Replace `current`. Ignored while nothing is loaded, so `current`
    /// can never exist without an `original`.
    pub fn set_current(&mut self, image: Image) -> bool {
        if self.original.is_none() {
            return false;
        }
        self.current = Some(image);
        true
    }

    pub fn original(&self) -> Option<&Image> {
        self.original.as_ref()
    }

    pub fn current(&self) -> Option<&Image> {
        self.current.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }
}
