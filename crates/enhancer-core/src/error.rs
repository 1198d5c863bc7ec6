use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, EnhancerError>;

#[derive(thiserror::Error, Debug)]
pub enum EnhancerError {
    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
    #[error("expected {expected} bytes for {width}x{height} RGB, got {actual}")]
    InvalidBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("{0} is not available yet")]
    Unsupported(&'static str),
}
