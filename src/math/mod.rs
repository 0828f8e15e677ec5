mod color;
mod spherical;

pub use color::{golden_hue, hsv_to_rgb};
pub use spherical::Spherical;
