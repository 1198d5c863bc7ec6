mod brightness;
mod color;
mod contrast;
mod sharpness;

pub use brightness::Brightness;
pub use color::Color;
pub use contrast::Contrast;
pub use sharpness::Sharpness;
