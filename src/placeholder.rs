//! Deterministic procedural placeholder backgrounds.
//!
//! Used when no real background photograph is available. Everything except
//! the footer timestamp is a pure function of `(seed_text, size)`: keyword
//! hashes drive shape kind, position, size and color, so the same input text
//! always yields the same artwork.

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use tracing::debug;

use crate::compose::composite::Layer;
use crate::fonts::resolver::FontHandle;
use crate::foundation::error::{PostframeError, PostframeResult};
use crate::foundation::math::{DetRng, fnv1a64};
use crate::text::engine::TextEngine;
use crate::text::surface::Surface;

/// Height of the fixed decorative footer band.
const FOOTER_HEIGHT: u32 = 50;
/// Number of ambient translucent discs behind the keyword shapes.
const AMBIENT_DISCS: usize = 15;
/// At most this many keywords become shapes.
const MAX_KEYWORDS: usize = 5;

/// Words too common to say anything about the article.
const STOPWORDS: [&str; 7] = ["with", "this", "that", "from", "your", "have", "there"];

/// Generate a placeholder image for `seed_text` at `size` (width, height).
///
/// Deterministic per `(seed_text, size)` except for the wall-clock timestamp
/// drawn inside the footer band.
pub fn generate_placeholder(seed_text: &str, size: (u32, u32)) -> PostframeResult<image::RgbImage> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(PostframeError::validation(
            "placeholder size must be non-zero",
        ));
    }

    let mut base = gradient_layer(width, height);
    let mut surface = Surface::new(width, height)?;

    let keywords = extract_keywords(seed_text);
    debug!(?keywords, "placeholder keywords");

    let mut ambient = DetRng::new(fnv1a64(seed_text.as_bytes()));
    let min_dim = f64::from(width.min(height));
    for _ in 0..AMBIENT_DISCS {
        let cx = ambient.range_f64(0.0, f64::from(width));
        let cy = ambient.range_f64(0.0, f64::from(height));
        let radius = ambient.range_f64(min_dim * 0.05, min_dim * 0.1);
        let alpha = ambient.range_u64(30, 80) as u8;
        surface.fill_path(
            &Circle::new(Point::new(cx, cy), radius).to_path(0.1),
            [255, 255, 255, alpha],
        );
    }

    let mut centers: Vec<Point> = Vec::with_capacity(keywords.len());
    for keyword in &keywords {
        let hash = fnv1a64(keyword.as_bytes());
        let mut rng = DetRng::new(hash);

        let cx = rng.range_f64(f64::from(width) * 0.2, f64::from(width) * 0.8);
        let cy = rng.range_f64(f64::from(height) * 0.2, f64::from(height) * 0.8);
        let size_factor = keyword.chars().count() as f64 / 10.0 + 0.5;
        let shape_size = min_dim * 0.15 * size_factor;

        let [r, g, b] = hue_to_rgb((hash % 360) as f64 / 360.0);
        let alpha = (120 + rng.range_u64(0, 101)) as u8;
        let color = [r, g, b, alpha];

        let center = Point::new(cx, cy);
        match hash % 3 {
            0 => surface.fill_path(&Circle::new(center, shape_size).to_path(0.1), color),
            1 => surface.fill_rect(
                Rect::new(
                    cx - shape_size,
                    cy - shape_size / 2.0,
                    cx + shape_size,
                    cy + shape_size / 2.0,
                ),
                color,
            ),
            _ => surface.fill_path(&triangle(center, shape_size), color),
        }
        centers.push(center);
    }

    // Connecting polyline in extraction order, closed when there are enough
    // shapes to enclose an area.
    for pair in centers.windows(2) {
        surface.fill_path(&line_quad(pair[0], pair[1], 2.0), [255, 255, 255, 100]);
    }
    if centers.len() > 2 {
        surface.fill_path(
            &line_quad(centers[centers.len() - 1], centers[0], 2.0),
            [255, 255, 255, 100],
        );
    }

    draw_footer(&mut surface, width, height);

    let shapes = surface.finish();
    base.over(&shapes)?;
    base.flatten_rgb()
}

/// Extract up to [`MAX_KEYWORDS`] meaningful words from the seed text.
pub(crate) fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 4 && !STOPWORDS.contains(&w.to_lowercase().as_str()))
        .map(|w| {
            w.trim_matches(|c: char| ".,!?;:()[]{}".contains(c))
                .to_string()
        })
        .filter(|w| !w.is_empty())
        .take(MAX_KEYWORDS)
        .collect()
}

fn gradient_layer(width: u32, height: u32) -> Layer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        let progress = f64::from(y) / f64::from(height);
        let r = (100.0 + 155.0 * progress) as u8;
        let g = (50.0 + 100.0 * progress) as u8;
        let b = (180.0 - 100.0 * progress) as u8;
        for _ in 0..width {
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Layer {
        width,
        height,
        data,
    }
}

/// Six-sector hue-to-RGB at full saturation and value.
fn hue_to_rgb(hue: f64) -> [u8; 3] {
    let scaled = |v: f64| (255.0 * v.clamp(0.0, 1.0)) as u8;
    if hue < 1.0 / 6.0 {
        [255, scaled(hue * 6.0), 0]
    } else if hue < 2.0 / 6.0 {
        [scaled((2.0 / 6.0 - hue) * 6.0), 255, 0]
    } else if hue < 3.0 / 6.0 {
        [0, 255, scaled((hue - 2.0 / 6.0) * 6.0)]
    } else if hue < 4.0 / 6.0 {
        [0, scaled((4.0 / 6.0 - hue) * 6.0), 255]
    } else if hue < 5.0 / 6.0 {
        [scaled((hue - 4.0 / 6.0) * 6.0), 0, 255]
    } else {
        [255, 0, scaled((1.0 - hue) * 6.0)]
    }
}

fn triangle(center: Point, size: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(center.x, center.y - size));
    path.line_to(Point::new(center.x - size, center.y + size));
    path.line_to(Point::new(center.x + size, center.y + size));
    path.close_path();
    path
}

/// A straight line segment expressed as a filled quad of the given width.
fn line_quad(a: Point, b: Point, width: f64) -> BezPath {
    let d = b - a;
    let len = d.hypot();
    if len == 0.0 {
        return Circle::new(a, width / 2.0).to_path(0.1);
    }
    let n = Vec2::new(-d.y, d.x) * (width / (2.0 * len));

    let mut path = BezPath::new();
    path.move_to(a + n);
    path.line_to(b + n);
    path.line_to(b - n);
    path.line_to(a - n);
    path.close_path();
    path
}

fn draw_footer(surface: &mut Surface, width: u32, height: u32) {
    let w = f64::from(width);
    let h = f64::from(height);
    let top = h - f64::from(FOOTER_HEIGHT);

    surface.fill_rect(Rect::new(0.0, top, w, h), [20, 20, 20, 200]);

    let icon_y = h - f64::from(FOOTER_HEIGHT) / 2.0;
    surface.fill_path(
        &Circle::new(Point::new(30.0, icon_y), 10.0).to_path(0.1),
        [255, 255, 255, 150],
    );
    surface.fill_rect(
        Rect::new(60.0, icon_y - 10.0, 80.0, icon_y + 10.0),
        [255, 255, 255, 150],
    );
    surface.fill_rect(
        Rect::new(100.0, icon_y - 10.0, 120.0, icon_y + 10.0),
        [255, 255, 255, 150],
    );

    // The only non-deterministic pixels, kept inside the footer band.
    let timestamp = chrono::Local::now().format("%H:%M").to_string();
    let mut engine = TextEngine::new();
    let clock_font = FontHandle::builtin(12.0);
    surface.draw_text(
        &mut engine,
        &clock_font,
        Point::new(w - 80.0, top + 16.0),
        &timestamp,
        [255, 255, 255, 200],
    );
}

#[cfg(test)]
#[path = "../tests/unit/placeholder.rs"]
mod tests;
