//! Image ingest: decoding, canvas normalization, frame and logo layers.
//!
//! Everything lands as a premultiplied RGBA8 [`Layer`]. Resampling uses
//! Lanczos3 whenever dimensions change.

use std::path::Path;

use anyhow::Context;
use image::imageops::FilterType;
use tracing::warn;

use crate::compose::composite::{Layer, premultiply_rgba8_in_place};
use crate::foundation::core::{Canvas, LogoSpec};
use crate::foundation::error::{PostframeError, PostframeResult};

/// Decode encoded image bytes into a premultiplied layer at the image's own
/// size.
pub fn decode_image(bytes: &[u8]) -> PostframeResult<Layer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    Layer::from_premul(width, height, data)
}

/// Normalize the background to a premultiplied layer at exactly the canvas
/// size.
///
/// A zero-sized background is the one hard failure of the compositing
/// pipeline.
pub fn prepare_background(img: &image::DynamicImage, canvas: Canvas) -> PostframeResult<Layer> {
    if img.width() == 0 || img.height() == 0 {
        return Err(PostframeError::background("background image has no pixels"));
    }

    let rgba = img.to_rgba8();
    let rgba = if rgba.dimensions() != (canvas.width, canvas.height) {
        image::imageops::resize(&rgba, canvas.width, canvas.height, FilterType::Lanczos3)
    } else {
        rgba
    };

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    Layer::from_premul(canvas.width, canvas.height, data)
}

/// Load the decorative frame asset, resizing to the canvas when needed.
///
/// Any problem (missing file, undecodable bytes) skips the frame with a
/// warning; a missing frame is never fatal.
pub fn load_frame(path: &Path, canvas: Canvas) -> Option<Layer> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "frame asset unavailable, compositing without it");
            return None;
        }
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "frame asset undecodable, compositing without it");
            return None;
        }
    };

    let rgba = img.to_rgba8();
    let rgba = if rgba.dimensions() != (canvas.width, canvas.height) {
        warn!(
            path = %path.display(),
            from = ?rgba.dimensions(),
            to = ?(canvas.width, canvas.height),
            "resizing frame to canvas"
        );
        image::imageops::resize(&rgba, canvas.width, canvas.height, FilterType::Lanczos3)
    } else {
        rgba
    };

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    Layer::from_premul(canvas.width, canvas.height, data).ok()
}

/// Build the logo overlay: resample to the fixed footprint, paste at the
/// fixed offset onto a transparent canvas-sized layer.
///
/// Returns `None` (with a warning) instead of failing the render when the
/// logo is unusable.
pub fn prepare_logo(
    logo: &image::DynamicImage,
    spec: &LogoSpec,
    canvas: Canvas,
) -> Option<Layer> {
    if logo.width() == 0 || logo.height() == 0 {
        warn!("logo image has no pixels, compositing without it");
        return None;
    }

    let rgba = logo.to_rgba8();
    let resized = image::imageops::resize(&rgba, spec.size.0, spec.size.1, FilterType::Lanczos3);
    let mut data = resized.into_raw();
    premultiply_rgba8_in_place(&mut data);

    let stamp = match Layer::from_premul(spec.size.0, spec.size.1, data) {
        Ok(layer) => layer,
        Err(e) => {
            warn!(error = %e, "logo layer invalid, compositing without it");
            return None;
        }
    };

    let mut layer = Layer::transparent(canvas.width, canvas.height);
    layer.blit(&stamp, spec.offset.0, spec.offset.1);
    Some(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
