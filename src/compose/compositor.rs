//! Layer compositor: the orchestration that turns a background photo and a
//! few strings into the final post image.
//!
//! Layer order is fixed: background, decorative frame, text overlay (date,
//! headline, category badge), logo overlay. Every optional layer degrades to
//! a logged skip; only an unusable background fails the render.

use std::path::PathBuf;

use kurbo::Point;
use tracing::warn;

use crate::assets::decode::{load_frame, prepare_background, prepare_logo};
use crate::compose::badge::draw_label;
use crate::fonts::resolver::FontResolver;
use crate::foundation::core::ComposeSpec;
use crate::foundation::error::PostframeResult;
use crate::locale::datefmt::format_today;
use crate::text::engine::{FitSpec, TextEngine};
use crate::text::surface::Surface;

#[derive(Clone, Debug)]
/// All inputs for one composition, supplied explicitly by the caller.
pub struct ComposeRequest {
    /// Background photograph. Resized to the canvas when dimensions differ.
    pub background: image::DynamicImage,
    /// Headline drawn in the text band.
    pub headline: String,
    /// Category key; its title-cased form becomes the badge text.
    pub category_key: String,
    /// Optional logo, assumed already decoded.
    pub logo: Option<image::DynamicImage>,
    /// Locale code driving date formatting (e.g. "en", "fr").
    pub locale: String,
}

/// Stateless compositor configured with a layout spec, a font resolver and
/// an optional frame asset path.
#[derive(Clone, Debug)]
pub struct Composer {
    spec: ComposeSpec,
    resolver: FontResolver,
    frame_path: Option<PathBuf>,
}

impl Composer {
    /// Compositor over an explicit spec, resolver and frame path.
    pub fn new(spec: ComposeSpec, resolver: FontResolver, frame_path: Option<PathBuf>) -> Self {
        Self {
            spec,
            resolver,
            frame_path,
        }
    }

    /// Compositor with the default spec, `fonts/` as the font directory and
    /// `Frame.png` as the frame asset.
    pub fn with_defaults() -> Self {
        Self::new(
            ComposeSpec::default(),
            FontResolver::new("fonts"),
            Some(PathBuf::from("Frame.png")),
        )
    }

    /// Layout spec in use.
    pub fn spec(&self) -> &ComposeSpec {
        &self.spec
    }

    /// Compose the final RGB image for `req`.
    ///
    /// The caller owns the returned image; the compositor holds nothing back
    /// across calls.
    #[tracing::instrument(skip(self, req), fields(locale = %req.locale, category = %req.category_key))]
    pub fn compose(&self, req: &ComposeRequest) -> PostframeResult<image::RgbImage> {
        let canvas = self.spec.canvas;
        let band = &self.spec.band;
        let fonts = &self.spec.fonts;
        let palette = &self.spec.palette;

        let mut base = prepare_background(&req.background, canvas)?;

        let frame = self
            .frame_path
            .as_deref()
            .and_then(|path| load_frame(path, canvas));

        // Band geometry is derived from fixed canvas proportions, never from
        // content.
        let band_height = f64::from(canvas.height) * band.height_fraction;
        let band_top = f64::from(canvas.height) - band_height + band.top_inset;
        let band_usable_height = band_height - band.bottom_inset;
        let max_text_width = f64::from(canvas.width) - 2.0 * band.side_margin;

        let mut engine = TextEngine::new();
        let mut overlay = Surface::new(canvas.width, canvas.height)?;

        // Date, at a fixed offset from the band's top-left.
        let date_font = self.resolver.resolve(&fonts.date, fonts.date_size);
        let date_str = format_today(&req.locale);
        let date_pos = Point::new(
            band.side_margin + band.date_offset.0,
            band_top + band.date_offset.1,
        );
        overlay.draw_text(&mut engine, &date_font, date_pos, &date_str, palette.accent);

        // Headline: fitted independently of the date, then centered in the
        // area below the reserved date space.
        let main_font = self.resolver.resolve(&fonts.main, fonts.main_initial_size);
        let fitted = engine.fit(
            &main_font,
            req.headline.trim(),
            &FitSpec {
                initial_size: fonts.main_initial_size,
                min_size: fonts.main_min_size,
                step: fonts.main_size_step,
                max_width: max_text_width as f32,
                max_height: (band_usable_height - band.date_reserve) as f32,
                line_spacing: band.line_spacing as f32,
            },
        );

        let content_height =
            band_usable_height - band.main_top_margin - band.main_bottom_margin;
        let mut line_y = band_top
            + band.main_top_margin
            + (content_height - f64::from(fitted.block_height)) / 2.0;
        for line in &fitted.lines {
            let line_width = f64::from(engine.measure_width(&fitted.font, line));
            let line_x = (f64::from(canvas.width) - line_width) / 2.0;
            overlay.draw_text(
                &mut engine,
                &fitted.font,
                Point::new(line_x, line_y),
                line,
                palette.text,
            );
            line_y += f64::from(fitted.line_height) + band.line_spacing;
        }

        // Category badge at its fixed anchor in the upper-right quadrant.
        let badge = &self.spec.badge;
        let badge_font = self.resolver.resolve(&fonts.category, fonts.category_size);
        let badge_text = title_case(&req.category_key);
        draw_label(
            &mut overlay,
            &mut engine,
            &badge_font,
            &badge_text,
            Point::new(
                f64::from(canvas.width) - badge.anchor_inset_right,
                badge.anchor_y,
            ),
            palette.badge_text,
            palette.badge_background,
            badge.padding,
        );

        let text_layer = overlay.finish();

        let logo_layer = req
            .logo
            .as_ref()
            .and_then(|logo| prepare_logo(logo, &self.spec.logo, canvas));

        // Fixed compositing order: background, frame, text, logo.
        if let Some(frame) = &frame {
            if let Err(e) = base.over(frame) {
                warn!(error = %e, "skipping frame layer");
            }
        }
        base.over(&text_layer)?;
        if let Some(logo) = &logo_layer {
            if let Err(e) = base.over(logo) {
                warn!(error = %e, "skipping logo layer");
            }
        }

        base.flatten_rgb()
    }
}

/// Title-case a category key the way the badge displays it: first letter of
/// every alphabetic run uppercased, the rest lowered (`hi-tech` → `Hi-Tech`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
