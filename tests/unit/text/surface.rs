use super::*;

fn alpha_coverage(layer: &Layer) -> usize {
    layer.data.chunks_exact(4).filter(|px| px[3] > 0).count()
}

#[test]
fn empty_surface_finishes_transparent() {
    let surface = Surface::new(16, 16).unwrap();
    let layer = surface.finish();
    assert_eq!((layer.width, layer.height), (16, 16));
    assert_eq!(alpha_coverage(&layer), 0);
}

#[test]
fn oversized_dimensions_are_rejected() {
    assert!(Surface::new(70_000, 10).is_err());
    assert!(Surface::new(10, 70_000).is_err());
}

#[test]
fn fill_rect_lands_where_asked() {
    let mut surface = Surface::new(32, 32).unwrap();
    surface.fill_rect(kurbo::Rect::new(8.0, 8.0, 24.0, 24.0), [255, 0, 0, 255]);
    let layer = surface.finish();

    let at = |x: usize, y: usize| {
        let i = (y * 32 + x) * 4;
        [layer.data[i], layer.data[i + 1], layer.data[i + 2], layer.data[i + 3]]
    };
    assert_eq!(at(16, 16)[3], 255);
    assert_eq!(at(16, 16)[0], 255);
    assert_eq!(at(2, 2)[3], 0);
}

#[test]
fn fill_path_draws_a_triangle() {
    let mut surface = Surface::new(32, 32).unwrap();
    let mut path = kurbo::BezPath::new();
    path.move_to((16.0, 4.0));
    path.line_to((4.0, 28.0));
    path.line_to((28.0, 28.0));
    path.close_path();
    surface.fill_path(&path, [0, 255, 0, 255]);
    let layer = surface.finish();
    assert!(alpha_coverage(&layer) > 0);
}

#[test]
fn builtin_text_is_stamped_after_vector_flush() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(16.0);

    let mut surface = Surface::new(64, 32).unwrap();
    surface.draw_text(&mut engine, &font, kurbo::Point::new(2.0, 2.0), "OK", [255, 255, 255, 255]);
    let layer = surface.finish();
    assert!(alpha_coverage(&layer) > 0);
}

#[test]
fn builtin_text_draw_is_deterministic() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(16.0);

    let render = |engine: &mut TextEngine| {
        let mut surface = Surface::new(64, 32).unwrap();
        surface.draw_text(engine, &font, kurbo::Point::new(2.0, 2.0), "AB", [10, 200, 40, 255]);
        surface.finish()
    };
    assert_eq!(render(&mut engine).data, render(&mut engine).data);
}

#[test]
fn empty_text_draws_nothing() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(16.0);
    let mut surface = Surface::new(16, 16).unwrap();
    surface.draw_text(&mut engine, &font, kurbo::Point::new(0.0, 0.0), "", [255, 255, 255, 255]);
    assert_eq!(alpha_coverage(&surface.finish()), 0);
}
