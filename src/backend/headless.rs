use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use log::trace;

use crate::core::LineSegment;
use crate::error::Result;
use crate::math::Color;
use crate::traits::Backend;

/// Identifier of a headless surface, unique per backend
pub type SurfaceId = u64;

/// A frame as it was handed to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedFrame {
    pub surface: SurfaceId,
    pub clear: Option<Color>,
    pub segments: Vec<LineSegment>,
}

#[derive(Default)]
struct HeadlessState {
    next_id: SurfaceId,
    current: Option<SurfaceId>,
    activations: Vec<SurfaceId>,
    frames: Vec<PresentedFrame>,
    close_requests: HashSet<SurfaceId>,
    open: HashSet<SurfaceId>,
    polls: usize,
}

/// Backend without a window system
///
/// Surfaces live in memory and every activation and presented frame is kept,
/// which makes rendering inspectable without a display or GPU. Closing a
/// window is simulated with [`HeadlessBackend::request_close`].
#[derive(Default)]
pub struct HeadlessBackend {
    state: Rc<RefCell<HeadlessState>>,
}

/// Surface handle of [`HeadlessBackend`]
pub struct HeadlessSurface {
    id: SurfaceId,
    width: u32,
    height: u32,
    title: String,
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessSurface {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Drop for HeadlessSurface {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.open.remove(&self.id);
        if state.current == Some(self.id) {
            state.current = None;
        }
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user closing the window behind `surface`
    pub fn request_close(&self, surface: SurfaceId) {
        self.state.borrow_mut().close_requests.insert(surface);
    }

    /// Surface that was made current last, if it is still alive
    pub fn current(&self) -> Option<SurfaceId> {
        self.state.borrow().current
    }

    /// Every `make_current` call, in order
    pub fn activations(&self) -> Vec<SurfaceId> {
        self.state.borrow().activations.clone()
    }

    /// Every presented frame, in order
    pub fn frames(&self) -> Vec<PresentedFrame> {
        self.state.borrow().frames.clone()
    }

    /// Drain the presented frames, leaving the log empty
    pub fn take_frames(&self) -> Vec<PresentedFrame> {
        std::mem::take(&mut self.state.borrow_mut().frames)
    }

    /// Forget recorded activations, frames and polls
    ///
    /// Surfaces, close requests and the current surface are kept. Long-running
    /// callers use this so the logs do not grow without bound.
    pub fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.activations.clear();
        state.frames.clear();
        state.polls = 0;
    }

    /// Most recent frame presented to `surface`
    pub fn last_frame(&self, surface: SurfaceId) -> Option<PresentedFrame> {
        self.state
            .borrow()
            .frames
            .iter()
            .rev()
            .find(|frame| frame.surface == surface)
            .cloned()
    }

    /// Number of surfaces that have not been dropped
    pub fn open_surfaces(&self) -> usize {
        self.state.borrow().open.len()
    }

    pub fn poll_count(&self) -> usize {
        self.state.borrow().polls
    }
}

impl Backend for HeadlessBackend {
    type Surface = HeadlessSurface;

    fn create_surface(&self, width: u32, height: u32, title: &str) -> Result<HeadlessSurface> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.open.insert(id);
        state.current = Some(id);

        Ok(HeadlessSurface {
            id,
            width,
            height,
            title: title.to_string(),
            state: Rc::clone(&self.state),
        })
    }

    fn make_current(&self, surface: &HeadlessSurface) {
        let mut state = self.state.borrow_mut();
        state.current = Some(surface.id);
        state.activations.push(surface.id);
    }

    fn close_requested(&self, surface: &HeadlessSurface) -> bool {
        self.state.borrow().close_requests.contains(&surface.id)
    }

    fn present(
        &self,
        surface: &HeadlessSurface,
        clear: Option<Color>,
        segments: &[LineSegment],
    ) -> Result<()> {
        trace!("headless surface {} got {} segment(s)", surface.id, segments.len());
        self.state.borrow_mut().frames.push(PresentedFrame {
            surface: surface.id,
            clear,
            segments: segments.to_vec(),
        });
        Ok(())
    }

    fn poll_events(&self) -> Result<()> {
        self.state.borrow_mut().polls += 1;
        Ok(())
    }
}
