// config.rs - Rendering style shared by a window and its curves
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Color;

/// Rendering constants for a window and the curves drawn into it
///
/// Missing fields fall back to their defaults when deserialized, so a style
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Color the window is cleared to at the start of a frame
    pub background: Color,
    /// Color of the axis lines and tick marks
    pub axis_color: Color,
    /// Axis line width in pixels
    pub axis_width: f32,
    /// Curve line width in pixels
    pub curve_width: f32,
    /// Half the length of a tick mark, in pixels
    pub tick_half_length: f32,
    /// Lowest tick index, in multiples of the curve scale
    pub first_tick: i32,
    /// Highest tick index (inclusive)
    pub last_tick: i32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.1, 0.0, 0.2, 1.0),
            axis_color: Color::WHITE,
            axis_width: 1.0,
            curve_width: 2.0,
            tick_half_length: 4.0,
            first_tick: -10,
            last_tick: 20,
        }
    }
}

impl Style {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a style from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Tick indices drawn along each axis
    pub fn ticks(&self) -> std::ops::RangeInclusive<i32> {
        self.first_tick..=self.last_tick
    }
}
