mod curve;
mod frame;
mod window;

pub use curve::{Curve, Placement};
pub use frame::{Frame, LineSegment};
pub use window::Window;
