use glam::Vec2;
use log::debug;

use super::frame::Frame;
use super::window::Window;
use crate::error::{PlotError, Result};
use crate::math::{curve_to_pixel, Color};
use crate::traits::Backend;

/// Where a curve sits in its window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Pixel position of the curve's (0, 0)
    pub origin: Vec2,
    /// Pixels per curve unit along x and y
    pub scale: Vec2,
    /// Draw axis lines and tick marks through the origin
    pub show_axis: bool,
}

impl Placement {
    pub fn new(x: f32, y: f32, x_scale: f32, y_scale: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            scale: Vec2::new(x_scale, y_scale),
            show_axis: false,
        }
    }

    pub fn with_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = show_axis;
        self
    }
}

/// A polyline bound to a window
///
/// The points are fixed once the curve is built; only the color can change
/// afterwards. The parent window must outlive the curve.
pub struct Curve<'w, B: Backend> {
    parent: &'w Window<B>,
    points: Vec<Vec2>,
    placement: Placement,
    color: Color,
}

impl<'w, B: Backend> Curve<'w, B> {
    /// Sample `function` over `[start, end]` with `smoothness` segments
    ///
    /// The function is evaluated once per parameter value. Interior samples
    /// are stored twice so that consecutive pairs of points form the
    /// individual segments; the endpoints are stored once, exactly at
    /// `start` and `end`.
    pub fn from_function(
        parent: &'w Window<B>,
        function: impl Fn(f32) -> f32,
        start: f32,
        end: f32,
        smoothness: u32,
        placement: Placement,
    ) -> Result<Self> {
        if !(start < end) || !start.is_finite() || !end.is_finite() {
            return Err(PlotError::InvalidInterval { start, end });
        }
        if smoothness == 0 {
            return Err(PlotError::InvalidSmoothness);
        }

        let step = (end - start) / smoothness as f32;
        let mut points = Vec::with_capacity(2 * smoothness as usize);

        points.push(Vec2::new(start, function(start)));
        for i in 1..smoothness {
            let x = start + i as f32 * step;
            let point = Vec2::new(x, function(x));
            points.push(point);
            points.push(point);
        }
        points.push(Vec2::new(end, function(end)));

        debug!(
            "sampled curve on [{}, {}] into {} points for '{}'",
            start,
            end,
            points.len(),
            parent.title()
        );

        Ok(Self::new(parent, points, placement))
    }

    /// Build a curve from precomputed points, used verbatim
    pub fn from_points(parent: &'w Window<B>, points: Vec<Vec2>, placement: Placement) -> Result<Self> {
        if points.is_empty() {
            return Err(PlotError::EmptyPoints);
        }

        debug!("curve with {} points for '{}'", points.len(), parent.title());
        Ok(Self::new(parent, points, placement))
    }

    fn new(parent: &'w Window<B>, points: Vec<Vec2>, placement: Placement) -> Self {
        Self {
            parent,
            points,
            placement,
            color: Color::default(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn parent(&self) -> &'w Window<B> {
        self.parent
    }

    /// Axis lines followed by tick marks, in pixel space
    ///
    /// Empty when the placement does not show the axis.
    pub fn axis_segments(&self) -> Vec<(Vec2, Vec2)> {
        if !self.placement.show_axis {
            return Vec::new();
        }

        let style = self.parent.style();
        let Placement { origin, scale, .. } = self.placement;
        let half = style.tick_half_length;

        let mut segments = vec![
            (Vec2::new(0.0, origin.y), Vec2::new(self.parent.width(), origin.y)),
            (Vec2::new(origin.x, 0.0), Vec2::new(origin.x, self.parent.height())),
        ];

        for i in style.ticks() {
            let offset = i as f32;
            let y = origin.y + offset * scale.y;
            let x = origin.x + offset * scale.x;
            segments.push((Vec2::new(origin.x + half, y), Vec2::new(origin.x - half, y)));
            segments.push((Vec2::new(x, origin.y + half), Vec2::new(x, origin.y - half)));
        }

        segments
    }

    /// Segments between consecutive points, in pixel space
    ///
    /// Zero-length segments (a duplicated sample next to itself) are skipped.
    pub fn curve_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let Placement { origin, scale, .. } = self.placement;
        self.points
            .windows(2)
            .map(move |pair| {
                (
                    curve_to_pixel(pair[0], origin, scale),
                    curve_to_pixel(pair[1], origin, scale),
                )
            })
            .filter(|(from, to)| from != to)
    }

    /// Draw the curve (and its axis) into a frame of the parent window
    pub fn show(&self, frame: &mut Frame<'_, B>) -> Result<()> {
        self.parent.ensure_owns(frame)?;
        self.parent.make_current();

        let style = self.parent.style();
        for (from, to) in self.axis_segments() {
            frame.draw_line(from, to, style.axis_color, style.axis_width);
        }
        for (from, to) in self.curve_segments() {
            frame.draw_line(from, to, self.color, style.curve_width);
        }

        Ok(())
    }
}
