//! Windowing and graphics bindings implementing [`crate::traits::Backend`].

mod gpu_context;
mod headless;
mod native;
mod tessellate;

pub use gpu_context::GpuContext;
pub use headless::{HeadlessBackend, HeadlessSurface, PresentedFrame, SurfaceId};
pub use native::{WgpuBackend, WgpuSurface};
pub use tessellate::{tessellate, LineVertex};
