// demo.rs - The two-window plot shown by the binary
use std::f32::consts::PI;
use std::rc::Rc;

use glam::Vec2;

use crate::config::Style;
use crate::core::{Curve, Placement, Window};
use crate::error::Result;
use crate::math::{sample_polar, Color};
use crate::traits::Backend;

pub fn exp_minus(x: f32) -> f32 {
    (-x).exp()
}

/// Exponentially damped sine
pub fn damp(x: f32) -> f32 {
    exp_minus(x) * (10.0 * x).sin()
}

/// Radius of the flower, as a function of the polar angle
pub fn flower_radius(theta: f32) -> f32 {
    6.0 + (2.0 * PI * theta).sin()
}

pub fn flower_points() -> Result<Vec<Vec2>> {
    sample_polar(flower_radius, 0.0, 20.0 * PI, 0.01)
}

pub struct DemoWindows<B: Backend> {
    pub damped: Window<B>,
    pub polar: Window<B>,
}

pub struct DemoCurves<'w, B: Backend> {
    pub damped: Vec<Curve<'w, B>>,
    pub polar: Vec<Curve<'w, B>>,
}

impl<B: Backend> DemoWindows<B> {
    pub fn open(backend: Rc<B>, style: &Style) -> Result<Self> {
        let damped =
            Window::create_with_style(backend.clone(), 500.0, 250.0, "Look at this Graph !", style.clone())?;
        let polar = Window::create_with_style(backend, 500.0, 500.0, "Polar flower", style.clone())?;
        Ok(Self { damped, polar })
    }

    /// The demo runs until either window is closed
    pub fn is_open(&self) -> bool {
        self.damped.is_open() && self.polar.is_open()
    }

    pub fn curves(&self, smoothness: u32, show_axis: bool) -> Result<DemoCurves<'_, B>> {
        let placement = Placement::new(100.0, 250.0 / 2.0, 50.0, 50.0).with_axis(show_axis);

        let mut damp_sin = Curve::from_function(&self.damped, damp, -20.0, 20.0, smoothness, placement)?;
        damp_sin.set_color(Color::GREEN);

        let mut exp_min = Curve::from_function(&self.damped, exp_minus, -20.0, 20.0, smoothness, placement)?;
        exp_min.set_color(Color::YELLOW);

        let mut flower = Curve::from_points(
            &self.polar,
            flower_points()?,
            Placement::new(250.0, 250.0, 25.0, 25.0).with_axis(show_axis),
        )?;
        flower.set_color(Color::MAGENTA);

        Ok(DemoCurves {
            damped: vec![damp_sin, exp_min],
            polar: vec![flower],
        })
    }

    /// Clear, draw and present both windows once
    pub fn draw(&self, curves: &DemoCurves<'_, B>) -> Result<()> {
        draw_window(&self.damped, &curves.damped)?;
        draw_window(&self.polar, &curves.polar)
    }
}

fn draw_window<B: Backend>(window: &Window<B>, curves: &[Curve<'_, B>]) -> Result<()> {
    let mut frame = window.activate();
    frame.clear();
    for curve in curves {
        curve.show(&mut frame)?;
    }
    window.present(frame)
}
