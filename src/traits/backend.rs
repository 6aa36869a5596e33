use crate::core::LineSegment;
use crate::error::Result;
use crate::math::Color;

/// Windowing and graphics binding that windows and curves render through
///
/// Implementations use interior mutability: every window shares one backend
/// and calls it through `&self` from a single thread.
pub trait Backend {
    /// Native window plus rendering surface. Dropping it tears both down.
    type Surface;

    /// Open a window of the given size (pixels) and attach a surface to it
    fn create_surface(&self, width: u32, height: u32, title: &str) -> Result<Self::Surface>;

    /// Make `surface` the target of subsequent submissions
    fn make_current(&self, surface: &Self::Surface);

    /// Whether the user asked to close the window behind `surface`
    fn close_requested(&self, surface: &Self::Surface) -> bool;

    /// Clear (if requested), draw the NDC segments and swap buffers
    fn present(
        &self,
        surface: &Self::Surface,
        clear: Option<Color>,
        segments: &[LineSegment],
    ) -> Result<()>;

    /// Process pending window-system events
    fn poll_events(&self) -> Result<()>;
}
