use crate::image_buf::{AdjustmentParams, Image};

/// What was shown before a change, and the adjustment values in effect then.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub image: Image,
    pub params: AdjustmentParams,
}

/// LIFO stack of earlier `current` images for undo.
///
/// Entries hold `Image` handles, so a snapshot that is still shown (or still
/// held by another entry) costs no extra pixel memory. Popped entries are
/// dropped; there is no redo.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image: Image, params: AdjustmentParams) {
        self.entries.push(Snapshot { image, params });
    }

    /// Remove and return the most recent snapshot, or `None` when empty.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(v: u8) -> Image {
        Image::from_pixel(1, 1, [v, v, v])
    }

    fn push(h: &mut HistoryStack, image: Image) {
        h.push(image, AdjustmentParams::default());
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut h = HistoryStack::new();
        push(&mut h, img(1));
        push(&mut h, img(2));
        push(&mut h, img(3));
        assert_eq!(h.len(), 3);
        assert_eq!(h.pop().unwrap().image.pixel(0, 0)[0], 3);
        assert_eq!(h.pop().unwrap().image.pixel(0, 0)[0], 2);
        assert_eq!(h.pop().unwrap().image.pixel(0, 0)[0], 1);
        assert!(h.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut h = HistoryStack::new();
        assert!(h.pop().is_none());
        assert!(h.pop().is_none());
    }

    #[test]
    fn clear_empties() {
        let mut h = HistoryStack::new();
        push(&mut h, img(1));
        push(&mut h, img(2));
        h.clear();
        assert!(h.is_empty());
        assert!(h.pop().is_none());
    }

    #[test]
    fn snapshots_share_pixels() {
        let mut h = HistoryStack::new();
        let shown = img(7);
        push(&mut h, shown.clone());
        assert!(h.pop().unwrap().image.shares_pixels(&shown));
    }

    #[test]
    fn params_travel_with_the_image() {
        let mut h = HistoryStack::new();
        let bright = AdjustmentParams {
            brightness: 1.5,
            ..Default::default()
        };
        h.push(img(1), bright);
        h.push(img(2), AdjustmentParams::default());
        assert!(h.pop().unwrap().params.is_identity());
        assert_eq!(h.pop().unwrap().params, bright);
    }
}
