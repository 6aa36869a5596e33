use glam::Vec2;

use crate::error::{PlotError, Result};

/// Upper bound on the number of samples a single call may produce
pub const MAX_POLAR_SAMPLES: usize = 10_000_000;

/// Sample a polar curve `r(θ)` into cartesian points
///
/// The first point is taken at `start + step` and sampling stops once θ
/// reaches `end`. Each θ is computed from its index, so a step too small to
/// move θ at the magnitude of `start` is rejected instead of looping forever.
pub fn sample_polar(r: impl Fn(f32) -> f32, start: f32, end: f32, step: f32) -> Result<Vec<Vec2>> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(PlotError::InvalidStep(step));
    }
    if !(start < end) || !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidInterval { start, end });
    }
    if start + step == start {
        return Err(PlotError::InvalidStep(step));
    }

    let count = ((end as f64 - start as f64) / step as f64).ceil();
    if !count.is_finite() || count > MAX_POLAR_SAMPLES as f64 {
        return Err(PlotError::InvalidStep(step));
    }
    let count = count as usize;

    let points = (1..=count)
        .map(|i| {
            let theta = (start as f64 + i as f64 * step as f64) as f32;
            let radius = r(theta);
            Vec2::new(theta.cos() * radius, theta.sin() * radius)
        })
        .collect();

    Ok(points)
}
