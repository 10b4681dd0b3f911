//! Postframe composes ready-to-post news images on the CPU.
//!
//! Given a background photograph (or a deterministic procedural placeholder),
//! a headline, a category key, an optional logo and a locale code, postframe
//! lays out and flattens a fixed-canvas composition: decorative frame,
//! semi-transparent text overlay with an auto-fitted wrapped headline and a
//! locale-aware date, a category badge, and the logo.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: background/frame/logo land as canvas-sized premultiplied
//!    RGBA8 [`Layer`]s (Lanczos3 resampling when dimensions differ)
//! 2. **Overlay**: date, fitted headline and badge are drawn onto a
//!    transparent [`Surface`]
//! 3. **Composite**: background → frame → text → logo, source-over in fixed
//!    order
//! 4. **Flatten**: the result is returned to the caller as a straight RGB
//!    image; encoding is the caller's concern
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout uses fixed design constants, never
//!   content-derived positions; the placeholder generator is a pure function
//!   of its seed text outside its clock footer.
//! - **Degrade, don't fail**: every optional layer (frame, preferred font,
//!   logo, locale) falls back or is skipped with a log; only an unusable
//!   background aborts a render.
//! - **No shared state**: each composition call allocates, uses and drops
//!   its own buffers and font handles.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod fonts;
mod foundation;
mod locale;
mod placeholder;
mod text;

pub use assets::decode::{decode_image, load_frame, prepare_background, prepare_logo};
pub use compose::badge::draw_label;
pub use compose::composite::{Layer, PremulRgba8, over, over_in_place, premultiply_rgba8_in_place};
pub use compose::compositor::{ComposeRequest, Composer, title_case};
pub use fonts::resolver::{FontHandle, FontResolver, FontSource};
pub use foundation::core::{
    BadgeSpec, Canvas, ComposeSpec, FontPlan, LogoSpec, Palette, TextBandSpec,
};
pub use foundation::error::{PostframeError, PostframeResult};
pub use locale::datefmt::{format_date, format_today};
pub use placeholder::generate_placeholder;
pub use text::engine::{BrushRgba8, FitSpec, FittedText, TextEngine};
pub use text::surface::Surface;
