mod color;
mod coords;
mod polar;

pub use color::Color;
pub use coords::{curve_to_pixel, pixel_to_ndc};
pub use polar::{sample_polar, MAX_POLAR_SAMPLES};
