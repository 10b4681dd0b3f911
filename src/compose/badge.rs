//! Category badge: a background rectangle sized to its text plus padding.

use kurbo::{Point, Rect};

use crate::fonts::resolver::FontHandle;
use crate::text::engine::TextEngine;
use crate::text::surface::Surface;

/// Draw a label rectangle anchored at `anchor` (top-left corner), then the
/// text inset by `padding` so it sits visually centered in the rectangle.
///
/// Side-effect only; a label that cannot be measured simply draws nothing.
pub fn draw_label(
    surface: &mut Surface,
    engine: &mut TextEngine,
    font: &FontHandle,
    text: &str,
    anchor: Point,
    text_color: [u8; 4],
    bg_color: [u8; 4],
    padding: (f64, f64),
) {
    if text.is_empty() {
        return;
    }

    let text_width = f64::from(engine.measure_width(font, text));
    let text_height = f64::from(engine.line_height(font));

    let rect = Rect::new(
        anchor.x,
        anchor.y,
        anchor.x + text_width + 2.0 * padding.0,
        anchor.y + text_height + 2.0 * padding.1,
    );
    surface.fill_rect(rect, bg_color);
    surface.draw_text(
        engine,
        font,
        Point::new(anchor.x + padding.0, anchor.y + padding.1),
        text,
        text_color,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/compose/badge.rs"]
mod tests;
