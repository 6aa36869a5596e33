use glam::Vec2;

/// Map a pixel position to normalized device coordinates
///
/// Pixel space grows right and down from the top-left corner; NDC spans
/// `[-1, 1]` on both axes and grows up.
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(x / width * 2.0 - 1.0, -(y / height * 2.0) + 1.0)
}

/// Place a curve-space point in pixel space around `origin`
///
/// The y axis is negated so that mathematical "up" is also "up" on screen.
pub fn curve_to_pixel(point: Vec2, origin: Vec2, scale: Vec2) -> Vec2 {
    Vec2::new(origin.x + point.x * scale.x, origin.y - point.y * scale.y)
}
