use glam::Vec2;

use super::window::Window;
use crate::math::Color;
use crate::traits::Backend;

/// One straight line in normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
    /// Width in pixels
    pub width: f32,
}

/// Drawing capability for one window
///
/// A frame is handed out by [`Window::activate`] and records everything drawn
/// into that window until it is given back to [`Window::present`]. Holding a
/// frame is what makes a window the current render target, so draws can only
/// land in the window they were meant for.
pub struct Frame<'w, B: Backend> {
    window: &'w Window<B>,
    clear: Option<Color>,
    segments: Vec<LineSegment>,
}

impl<'w, B: Backend> Frame<'w, B> {
    pub(crate) fn new(window: &'w Window<B>) -> Self {
        Self {
            window,
            clear: None,
            segments: Vec::new(),
        }
    }

    /// Window this frame draws into
    pub fn window(&self) -> &'w Window<B> {
        self.window
    }

    /// Wipe the frame to the window's background color
    ///
    /// Anything drawn before the clear is discarded.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.clear = Some(self.window.style().background);
    }

    /// Draw a line between two pixel positions
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.segments.push(LineSegment {
            from: self.window.coordinates_to_ndc(from.x, from.y),
            to: self.window.coordinates_to_ndc(to.x, to.y),
            color,
            width,
        });
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub(crate) fn belongs_to(&self, window: &Window<B>) -> bool {
        std::ptr::eq(self.window, window)
    }
}
