use super::*;

fn alpha_at(layer: &crate::compose::composite::Layer, x: usize, y: usize) -> u8 {
    layer.data[(y * layer.width as usize + x) * 4 + 3]
}

#[test]
fn label_draws_background_and_text() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(24.0);
    let mut surface = Surface::new(200, 100).unwrap();

    draw_label(
        &mut surface,
        &mut engine,
        &font,
        "Sports",
        Point::new(10.0, 10.0),
        [0, 0, 0, 255],
        [255, 255, 255, 255],
        (8.0, 4.0),
    );
    let layer = surface.finish();

    // Inside the rectangle's padding region: background ink.
    assert!(alpha_at(&layer, 12, 12) > 0);
    // Well outside the rectangle: untouched.
    assert_eq!(alpha_at(&layer, 190, 90), 0);
}

#[test]
fn transparent_background_still_shows_text() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(24.0);
    let mut surface = Surface::new(200, 100).unwrap();

    draw_label(
        &mut surface,
        &mut engine,
        &font,
        "Hi-Tech",
        Point::new(10.0, 10.0),
        [255, 255, 255, 255],
        [0, 0, 0, 0],
        (8.0, 4.0),
    );
    let layer = surface.finish();
    assert!(layer.data.chunks_exact(4).any(|px| px[3] > 0));
}

#[test]
fn empty_text_draws_nothing() {
    let mut engine = TextEngine::new();
    let font = FontHandle::builtin(24.0);
    let mut surface = Surface::new(64, 64).unwrap();

    draw_label(
        &mut surface,
        &mut engine,
        &font,
        "",
        Point::new(5.0, 5.0),
        [255, 255, 255, 255],
        [0, 0, 0, 255],
        (8.0, 4.0),
    );
    let layer = surface.finish();
    assert!(layer.data.chunks_exact(4).all(|px| px[3] == 0));
}
