//! Text measurement, greedy wrapping and font-size fitting.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, warn};

use crate::fonts::builtin;
use crate::fonts::resolver::{FontHandle, FontSource};
use crate::foundation::math::fnv1a64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color embedded in Parley text layouts.
pub struct BrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<[u8; 4]> for BrushRgba8 {
    fn from(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Parameters for the shrinking font-size search.
pub struct FitSpec {
    /// First (largest) size tried.
    pub initial_size: f32,
    /// Floor size. The search never goes below this.
    pub min_size: f32,
    /// Fixed decrement between trials.
    pub step: f32,
    /// Maximum measured line width in pixels.
    pub max_width: f32,
    /// Vertical budget for the whole block in pixels.
    pub max_height: f32,
    /// Extra pixels between consecutive lines.
    pub line_spacing: f32,
}

#[derive(Clone, Debug)]
/// Result of [`TextEngine::fit`]: wrapped lines plus the chosen font.
pub struct FittedText {
    /// Wrapped lines, in draw order.
    pub lines: Vec<String>,
    /// Font handle at the chosen size.
    pub font: FontHandle,
    /// Per-line height measured from the reference string.
    pub line_height: f32,
    /// Total block height including inter-line spacing.
    pub block_height: f32,
}

/// Reference string with an ascender and a descender; line height is
/// measured from it so vertical rhythm stays constant across lines
/// regardless of actual glyph content.
const LINE_HEIGHT_REFERENCE: &str = "Mg";

/// Stateful helper building Parley layouts over resolved font handles.
///
/// One engine instance lives for the duration of a single render call; font
/// registrations are not shared across calls.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<BrushRgba8>,
    families: HashMap<u64, Option<String>>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Construct a new engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Family name registered for `handle`'s bytes, if the bytes shape up as
    /// a usable font. `None` for the built-in glyph set.
    pub fn family_name(&mut self, handle: &FontHandle) -> Option<String> {
        let FontSource::Bytes { data, origin } = handle.source() else {
            return None;
        };
        let key = fnv1a64(data.as_slice());
        if let Some(cached) = self.families.get(&key) {
            return cached.clone();
        }

        let registered = self.register_family(data);
        if registered.is_none() {
            warn!(origin = %origin, "font bytes failed to register, degrading to built-in glyphs");
        }
        self.families.insert(key, registered.clone());
        registered
    }

    fn register_family(&mut self, data: &Arc<Vec<u8>>) -> Option<String> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(data.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id)?;
        let name = self.font_ctx.collection.family_name(family_id)?.to_string();
        debug!(family = %name, "registered font family");
        Some(name)
    }

    /// Shape `text` into a Parley layout for measurement or rendering.
    /// `None` when the handle renders through the built-in glyph set.
    pub(crate) fn build_layout(
        &mut self,
        handle: &FontHandle,
        text: &str,
        brush: BrushRgba8,
    ) -> Option<parley::Layout<BrushRgba8>> {
        let family = self.family_name(handle)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(handle.size()));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<BrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }

    /// Measured pixel width of `text` under `handle`.
    pub fn measure_width(&mut self, handle: &FontHandle, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.build_layout(handle, text, BrushRgba8::default()) {
            Some(layout) => layout
                .lines()
                .map(|line| line.metrics().advance)
                .fold(0.0f32, f32::max),
            None => builtin::text_width(text, handle.builtin_scale()) as f32,
        }
    }

    /// Line height for `handle`, measured from [`LINE_HEIGHT_REFERENCE`].
    pub fn line_height(&mut self, handle: &FontHandle) -> f32 {
        match self.build_layout(handle, LINE_HEIGHT_REFERENCE, BrushRgba8::default()) {
            Some(layout) => layout
                .lines()
                .next()
                .map(|line| {
                    let m = line.metrics();
                    m.ascent + m.descent
                })
                .unwrap_or(handle.size() * 1.2),
            None => builtin::line_height(handle.builtin_scale()) as f32,
        }
    }

    /// Greedy word wrap of `text` to `max_width` pixels.
    ///
    /// Whole-string fast path first; otherwise words accumulate onto a line
    /// while the measured width of line-plus-next-word stays within budget.
    /// A single word wider than `max_width` is placed alone on its own line
    /// unmodified.
    pub fn wrap(&mut self, handle: &FontHandle, text: &str, max_width: f32) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        if self.measure_width(handle, text) <= max_width {
            return vec![text.to_string()];
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut lines = Vec::new();
        let mut i = 0;
        while i < words.len() {
            let mut line = String::new();
            while i < words.len() {
                let candidate = if line.is_empty() {
                    words[i].to_string()
                } else {
                    format!("{line} {}", words[i])
                };
                if self.measure_width(handle, &candidate) <= max_width {
                    line = candidate;
                    i += 1;
                } else {
                    break;
                }
            }
            if line.is_empty() {
                // Single word wider than the budget: keep it whole.
                line = words[i].to_string();
                i += 1;
            }
            lines.push(line);
        }
        lines
    }

    /// Choose the largest font size whose wrapped block fits the vertical
    /// budget, shrinking from `initial_size` by `step` down to `min_size`.
    ///
    /// If nothing fits even at the floor, the floor size is used anyway and
    /// the overflowing block is returned (clipping is accepted, not an
    /// error).
    pub fn fit(&mut self, base: &FontHandle, text: &str, spec: &FitSpec) -> FittedText {
        // Step must be positive or the search below cannot terminate.
        let step = spec.step.max(0.5);
        let mut size = spec.initial_size;
        while size >= spec.min_size {
            let font = base.with_size(size);
            let lines = self.wrap(&font, text, spec.max_width);
            let line_height = self.line_height(&font);
            let block_height = block_height(lines.len(), line_height, spec.line_spacing);
            if block_height <= spec.max_height {
                debug!(size, n_lines = lines.len(), "headline fits");
                return FittedText {
                    lines,
                    font,
                    line_height,
                    block_height,
                };
            }
            size -= step;
        }

        let font = base.with_size(spec.min_size);
        let lines = self.wrap(&font, text, spec.max_width);
        let line_height = self.line_height(&font);
        let block_height = block_height(lines.len(), line_height, spec.line_spacing);
        warn!(
            min_size = spec.min_size,
            block_height, "text exceeds the height budget even at the floor size, may clip"
        );
        FittedText {
            lines,
            font,
            line_height,
            block_height,
        }
    }
}

fn block_height(n_lines: usize, line_height: f32, line_spacing: f32) -> f32 {
    if n_lines == 0 {
        return 0.0;
    }
    n_lines as f32 * line_height + (n_lines - 1) as f32 * line_spacing
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
