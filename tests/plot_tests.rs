use std::rc::Rc;

use lemniscate::{
    Color, Curve, HeadlessBackend, Placement, PlotError, Style, Vec2, Window,
};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-5
}

fn setup(width: f32, height: f32) -> (Rc<HeadlessBackend>, Window<HeadlessBackend>) {
    let backend = Rc::new(HeadlessBackend::new());
    let window = Window::create(backend.clone(), width, height, "plot").unwrap();
    (backend, window)
}

// ============================================================================
// Coordinate Transform Tests
// ============================================================================

#[test]
fn test_transform_corners_and_center() {
    for (width, height) in [(500.0, 250.0), (640.0, 480.0), (1.0, 3.0)] {
        let (_backend, window) = setup(width, height);
        assert!(approx(window.coordinates_to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0)));
        assert!(approx(window.coordinates_to_ndc(width, height), Vec2::new(1.0, -1.0)));
        assert!(approx(
            window.coordinates_to_ndc(width / 2.0, height / 2.0),
            Vec2::new(0.0, 0.0)
        ));
    }
}

#[test]
fn test_transform_scenario() {
    let (_backend, window) = setup(500.0, 250.0);
    assert!(approx(window.coordinates_to_ndc(100.0, 125.0), Vec2::new(-0.6, 0.0)));
}

// ============================================================================
// Sampling Tests
// ============================================================================

#[test]
fn test_square_on_zero_two() {
    let (_backend, window) = setup(500.0, 250.0);
    let curve = Curve::from_function(&window, |x| x * x, 0.0, 2.0, 2, Placement::new(0.0, 0.0, 1.0, 1.0)).unwrap();

    let expected = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(2.0, 4.0),
    ];
    assert_eq!(curve.points(), &expected);
}

#[test]
fn test_interior_points_are_doubled() {
    let (_backend, window) = setup(500.0, 250.0);
    let curve = Curve::from_function(&window, |x| 3.0 * x, 0.0, 1.0, 5, Placement::new(0.0, 0.0, 1.0, 1.0)).unwrap();
    let points = curve.points();

    assert_eq!(points.len(), 10);
    for pair in points[1..points.len() - 1].chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

#[test]
fn test_point_mode_keeps_points_in_order() {
    let (_backend, window) = setup(500.0, 500.0);
    let points: Vec<Vec2> = (0..17).map(|i| Vec2::new(i as f32, (i * i) as f32)).collect();
    let curve = Curve::from_points(&window, points.clone(), Placement::new(250.0, 250.0, 25.0, 25.0)).unwrap();
    assert_eq!(curve.points().len(), 17);
    assert_eq!(curve.points(), points.as_slice());
}

#[test]
fn test_degenerate_inputs_are_rejected() {
    let (_backend, window) = setup(100.0, 100.0);
    let placement = Placement::new(50.0, 50.0, 10.0, 10.0);

    let err = Curve::from_function(&window, |x| x, 3.0, 3.0, 10, placement).err().unwrap();
    assert!(matches!(err, PlotError::InvalidInterval { start, end } if start == 3.0 && end == 3.0));

    let err = Curve::from_function(&window, |x| x, 0.0, 3.0, 0, placement).err().unwrap();
    assert!(matches!(err, PlotError::InvalidSmoothness));

    let err = Curve::from_points(&window, vec![], placement).err().unwrap();
    assert!(matches!(err, PlotError::EmptyPoints));
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_present_submits_transformed_segments() {
    let (backend, window) = setup(500.0, 250.0);
    let curve = Curve::from_points(
        &window,
        vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0)],
        Placement::new(100.0, 125.0, 50.0, 50.0),
    )
    .unwrap();

    let mut frame = window.activate();
    frame.clear();
    curve.show(&mut frame).unwrap();
    window.present(frame).unwrap();

    let presented = backend.last_frame(window.surface().id()).unwrap();
    assert_eq!(presented.clear, Some(Style::default().background));
    assert_eq!(presented.segments.len(), 1);

    // (100, 125) -> (200, 75) in pixels
    let segment = presented.segments[0];
    assert!(approx(segment.from, Vec2::new(-0.6, 0.0)));
    assert!(approx(segment.to, Vec2::new(-0.2, 0.4)));
    assert_eq!(segment.color, Color::MAGENTA);
    assert_eq!(segment.width, 2.0);
}

#[test]
fn test_set_color_applies_to_next_show() {
    let (backend, window) = setup(200.0, 200.0);
    let mut curve = Curve::from_function(&window, |x| x, -1.0, 1.0, 3, Placement::new(100.0, 100.0, 10.0, 10.0)).unwrap();
    let points_before = curve.points().to_vec();

    let mut frame = window.activate();
    curve.show(&mut frame).unwrap();
    window.present(frame).unwrap();

    curve.set_color(Color::YELLOW);
    let mut frame = window.activate();
    curve.show(&mut frame).unwrap();
    window.present(frame).unwrap();

    let frames = backend.frames();
    assert!(frames[0].segments.iter().all(|s| s.color == Color::MAGENTA));
    assert!(frames[1].segments.iter().all(|s| s.color == Color::YELLOW));
    assert_eq!(curve.points(), points_before.as_slice());
}

#[test]
fn test_show_is_repeatable() {
    let (backend, window) = setup(300.0, 300.0);
    let curve = Curve::from_function(&window, f32::sin, 0.0, 6.0, 60, Placement::new(0.0, 150.0, 50.0, 50.0).with_axis(true)).unwrap();

    for _ in 0..3 {
        let mut frame = window.activate();
        frame.clear();
        curve.show(&mut frame).unwrap();
        window.present(frame).unwrap();
    }

    let frames = backend.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0], frames[1]);
    assert_eq!(frames[1], frames[2]);
    assert_eq!(frames[0].segments.len(), 64 + 60);
}

#[test]
fn test_axis_has_31_ticks_per_axis() {
    let (backend, window) = setup(500.0, 250.0);
    let curve = Curve::from_points(
        &window,
        vec![Vec2::ZERO],
        Placement::new(100.0, 125.0, 50.0, 50.0).with_axis(true),
    )
    .unwrap();

    let mut frame = window.activate();
    curve.show(&mut frame).unwrap();
    window.present(frame).unwrap();

    let segments = backend.last_frame(window.surface().id()).unwrap().segments;
    let ticks = &segments[2..];

    // y-axis ticks are horizontal, x-axis ticks are vertical
    let horizontal = ticks.iter().filter(|s| s.from.y == s.to.y).count();
    let vertical = ticks.iter().filter(|s| s.from.x == s.to.x).count();
    assert_eq!(horizontal, 31);
    assert_eq!(vertical, 31);
    assert!(segments.iter().all(|s| s.color == Color::WHITE && s.width == 1.0));
}

#[test]
fn test_axis_spans_whole_window() {
    let (_backend, window) = setup(400.0, 200.0);
    let curve = Curve::from_points(
        &window,
        vec![Vec2::ZERO],
        Placement::new(100.0, 50.0, 20.0, 20.0).with_axis(true),
    )
    .unwrap();

    let mut frame = window.activate();
    curve.show(&mut frame).unwrap();

    let horizontal = frame.segments()[0];
    assert_eq!(horizontal.from.x, -1.0);
    assert_eq!(horizontal.to.x, 1.0);
    let vertical = frame.segments()[1];
    assert_eq!(vertical.from.y, 1.0);
    assert_eq!(vertical.to.y, -1.0);
}

#[test]
fn test_style_changes_axis_and_curve() {
    let backend = Rc::new(HeadlessBackend::new());
    let style = Style {
        axis_color: Color::rgb(0.5, 0.5, 0.5),
        axis_width: 3.0,
        curve_width: 5.0,
        first_tick: 0,
        last_tick: 4,
        ..Style::default()
    };
    let window = Window::create_with_style(backend, 100.0, 100.0, "styled", style).unwrap();
    let curve = Curve::from_points(
        &window,
        vec![Vec2::ZERO, Vec2::ONE],
        Placement::new(50.0, 50.0, 10.0, 10.0).with_axis(true),
    )
    .unwrap();

    let mut frame = window.activate();
    curve.show(&mut frame).unwrap();

    let segments = frame.segments();
    assert_eq!(segments.len(), 2 + 2 * 5 + 1);
    assert!(segments[..12].iter().all(|s| s.width == 3.0 && s.color == Color::rgb(0.5, 0.5, 0.5)));
    assert_eq!(segments[12].width, 5.0);
}

// ============================================================================
// Window Lifecycle Tests
// ============================================================================

#[test]
fn test_window_open_until_close_requested() {
    let (backend, window) = setup(100.0, 100.0);
    assert!(window.is_open());
    backend.request_close(window.surface().id());
    assert!(!window.is_open());
}

#[test]
fn test_present_polls_events() {
    let (backend, window) = setup(100.0, 100.0);
    window.present(window.activate()).unwrap();
    window.present(window.activate()).unwrap();
    assert_eq!(backend.poll_count(), 2);
}

#[test]
fn test_drop_releases_surface() {
    let backend = Rc::new(HeadlessBackend::new());
    {
        let _window = Window::create(backend.clone(), 100.0, 100.0, "short").unwrap();
        assert_eq!(backend.open_surfaces(), 1);
    }
    assert_eq!(backend.open_surfaces(), 0);
}

#[test]
fn test_activation_order_with_two_windows() {
    let backend = Rc::new(HeadlessBackend::new());
    let first = Window::create(backend.clone(), 100.0, 100.0, "first").unwrap();
    let second = Window::create(backend.clone(), 100.0, 100.0, "second").unwrap();
    let a = Curve::from_points(&first, vec![Vec2::ZERO, Vec2::ONE], Placement::new(0.0, 0.0, 1.0, 1.0)).unwrap();
    let b = Curve::from_points(&second, vec![Vec2::ZERO, Vec2::ONE], Placement::new(0.0, 0.0, 1.0, 1.0)).unwrap();

    let mut frame = first.activate();
    a.show(&mut frame).unwrap();
    first.present(frame).unwrap();

    let mut frame = second.activate();
    b.show(&mut frame).unwrap();
    second.present(frame).unwrap();

    let (first_id, second_id) = (first.surface().id(), second.surface().id());
    // activate, show, present for each window
    assert_eq!(
        backend.activations(),
        vec![first_id, first_id, first_id, second_id, second_id, second_id]
    );
    assert_eq!(backend.current(), Some(second_id));

    let frames = backend.frames();
    assert_eq!(frames[0].surface, first_id);
    assert_eq!(frames[1].surface, second_id);
}

#[test]
fn test_curve_cannot_draw_into_other_window() {
    let backend = Rc::new(HeadlessBackend::new());
    let first = Window::create(backend.clone(), 100.0, 100.0, "first").unwrap();
    let second = Window::create(backend.clone(), 100.0, 100.0, "second").unwrap();
    let curve = Curve::from_points(&first, vec![Vec2::ZERO, Vec2::ONE], Placement::new(0.0, 0.0, 1.0, 1.0)).unwrap();

    let mut frame = second.activate();
    let err = curve.show(&mut frame).err().unwrap();
    assert_eq!(
        err.to_string(),
        "plot error: frame belongs to window 'second', not 'first'"
    );
}
