use std::rc::Rc;

use glam::Vec2;
use log::{debug, info, trace};

use super::frame::Frame;
use crate::config::Style;
use crate::error::{PlotError, Result};
use crate::math::pixel_to_ndc;
use crate::traits::Backend;

/// A window that curves draw into
///
/// The window owns its backend surface and releases it when dropped. Its
/// dimensions are fixed for its whole life.
pub struct Window<B: Backend> {
    // Dropped before the backend so the native window goes before its event loop
    surface: B::Surface,
    backend: Rc<B>,
    width: f32,
    height: f32,
    title: String,
    style: Style,
}

impl<B: Backend> Window<B> {
    /// Open a window with the default style
    pub fn create(backend: Rc<B>, width: f32, height: f32, title: impl Into<String>) -> Result<Self> {
        Self::create_with_style(backend, width, height, title, Style::default())
    }

    pub fn create_with_style(
        backend: Rc<B>,
        width: f32,
        height: f32,
        title: impl Into<String>,
        style: Style,
    ) -> Result<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(PlotError::InvalidDimensions { width, height });
        }

        let title = title.into();
        let surface = backend.create_surface(width.round() as u32, height.round() as u32, &title)?;
        info!("opened window '{}' ({}x{})", title, width, height);

        Ok(Self {
            surface,
            backend,
            width,
            height,
            title,
            style,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Backend surface behind this window
    pub fn surface(&self) -> &B::Surface {
        &self.surface
    }

    /// Convert a pixel position to normalized device coordinates
    pub fn coordinates_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        pixel_to_ndc(x, y, self.width, self.height)
    }

    /// Make this window the render target and start a frame for it
    pub fn activate(&self) -> Frame<'_, B> {
        self.make_current();
        Frame::new(self)
    }

    pub fn is_open(&self) -> bool {
        !self.backend.close_requested(&self.surface)
    }

    /// Show a finished frame and process pending events
    pub fn present(&self, frame: Frame<'_, B>) -> Result<()> {
        self.ensure_owns(&frame)?;
        self.make_current();

        trace!(
            "presenting {} segment(s) to '{}'",
            frame.segments().len(),
            self.title
        );
        self.backend
            .present(&self.surface, frame.clear_color(), frame.segments())?;
        self.backend.poll_events()
    }

    pub(crate) fn make_current(&self) {
        self.backend.make_current(&self.surface);
    }

    pub(crate) fn ensure_owns(&self, frame: &Frame<'_, B>) -> Result<()> {
        if frame.belongs_to(self) {
            Ok(())
        } else {
            Err(PlotError::ForeignFrame {
                expected: self.title.clone(),
                actual: frame.window().title.clone(),
            })
        }
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        debug!("closing window '{}'", self.title);
    }
}
