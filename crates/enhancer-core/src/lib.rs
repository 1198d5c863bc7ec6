//! Image adjustment and filter pipeline with linear undo.
//!
//! A [`Session`] owns the loaded image, the image currently shown and the
//! undo history. A presentation layer drives it with `load_image`,
//! `apply_adjustments`, `apply_filter`, `undo` and `save`, then renders
//! `current_image()` after each call.

pub mod buffer;
pub mod color;
pub mod error;
pub mod filters;
pub mod history;
pub mod image_buf;
pub mod io;
pub mod kernel;
pub mod pipeline;
pub mod session;

pub use error::{EnhancerError, Result};
pub use filters::{Filter, FilterEngine};
pub use image_buf::{AdjustmentParams, Image};
pub use pipeline::AdjustmentEngine;
pub use session::Session;
