pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod math;
pub mod traits;

pub use backend::{HeadlessBackend, WgpuBackend};
pub use config::Style;
pub use core::{Curve, Frame, LineSegment, Placement, Window};
pub use error::{PlotError, Result};
pub use glam::Vec2;
pub use math::Color;
pub use traits::Backend;
