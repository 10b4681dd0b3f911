//! Canvas-sized vector/glyph drawing surface.
//!
//! Wraps a `vello_cpu` render context and reads back a premultiplied RGBA8
//! [`Layer`]. Text drawn with a loaded font goes through Parley glyph runs;
//! text on the built-in glyph set is stamped into the pixmap after the
//! vector flush, preserving draw order relative to filled shapes.

use kurbo::PathEl;

use crate::compose::composite::Layer;
use crate::fonts::builtin;
use crate::fonts::resolver::{FontHandle, FontSource};
use crate::foundation::error::{PostframeError, PostframeResult};
use crate::text::engine::{BrushRgba8, TextEngine};

struct DeferredStamp {
    x: i64,
    y: i64,
    text: String,
    scale: u32,
    color: [u8; 4],
}

/// A transparent drawing surface at a fixed pixel size.
pub struct Surface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    deferred: Vec<DeferredStamp>,
}

impl Surface {
    /// Allocate a transparent surface. Dimensions must fit in `u16`.
    pub fn new(width: u32, height: u32) -> PostframeResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| PostframeError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| PostframeError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width: w,
            height: h,
            ctx: vello_cpu::RenderContext::new(w, h),
            deferred: Vec::new(),
        })
    }

    /// Fill an axis-aligned rectangle with a straight RGBA color.
    pub fn fill_rect(&mut self, rect: kurbo::Rect, rgba: [u8; 4]) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(rgba));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Fill an arbitrary path with a straight RGBA color.
    pub fn fill_path(&mut self, path: &kurbo::BezPath, rgba: [u8; 4]) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(rgba));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Draw one run of text with its layout box's top-left at `pos`.
    pub fn draw_text(
        &mut self,
        engine: &mut TextEngine,
        font: &FontHandle,
        pos: kurbo::Point,
        text: &str,
        rgba: [u8; 4],
    ) {
        if text.is_empty() {
            return;
        }

        let brush = BrushRgba8::from(rgba);
        let layout = engine.build_layout(font, text, brush);
        let (Some(layout), FontSource::Bytes { data, .. }) = (layout, font.source()) else {
            self.deferred.push(DeferredStamp {
                x: pos.x.round() as i64,
                y: pos.y.round() as i64,
                text: text.to_string(),
                scale: font.builtin_scale(),
                color: rgba,
            });
            return;
        };

        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(data.as_ref().clone()), 0);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((pos.x, pos.y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let b = run.style().brush;
                self.ctx
                    .set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far and return the surface as a layer.
    pub fn finish(mut self) -> Layer {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();

        for stamp in &self.deferred {
            builtin::stamp(
                &mut data,
                u32::from(self.width),
                u32::from(self.height),
                stamp.x,
                stamp.y,
                &stamp.text,
                stamp.scale,
                stamp.color,
            );
        }

        Layer {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }
}

fn color_to_cpu(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/surface.rs"]
mod tests;
