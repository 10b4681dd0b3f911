//! Premultiplied-alpha pixel math and the [`Layer`] compositing unit.
//!
//! Layers are canvas-sized premultiplied RGBA8 buffers; `over` follows the
//! usual source-over rule on premultiplied channels.

use crate::foundation::error::{PostframeError, PostframeResult};
use crate::foundation::math::mul_div255;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over one premultiplied pixel onto another.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over `src` onto `dst` across two equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> PostframeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PostframeError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert straight RGBA8 bytes to premultiplied form in place.
pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = mul_div255(u16::from(px[0]), a);
        px[1] = mul_div255(u16::from(px[1]), a);
        px[2] = mul_div255(u16::from(px[2]), a);
    }
}

#[derive(Clone, Debug)]
/// A same-size image merged into the canvas via alpha compositing.
///
/// Pixel bytes are row-major premultiplied RGBA8. Layers are created fresh
/// per render call and never mutated after being composited.
pub struct Layer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl Layer {
    /// Construct a layer from premultiplied bytes, validating the length.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> PostframeResult<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PostframeError::validation(format!(
                "layer byte length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Source-over `other` onto this layer. Both must share dimensions.
    pub fn over(&mut self, other: &Layer) -> PostframeResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(PostframeError::validation(format!(
                "layer size mismatch: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        over_in_place(&mut self.data, &other.data)
    }

    /// Copy `src` pixels into this layer with `src`'s top-left at `(x, y)`.
    ///
    /// Out-of-bounds source rows/columns are clipped. Destination pixels are
    /// replaced, so pasting onto a transparent layer preserves `src` alpha.
    pub fn blit(&mut self, src: &Layer, x: i64, y: i64) {
        for sy in 0..src.height as i64 {
            let ty = y + sy;
            if ty < 0 || ty >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width as i64 {
                let tx = x + sx;
                if tx < 0 || tx >= self.width as i64 {
                    continue;
                }
                let si = (sy as usize * src.width as usize + sx as usize) * 4;
                let ti = (ty as usize * self.width as usize + tx as usize) * 4;
                self.data[ti..ti + 4].copy_from_slice(&src.data[si..si + 4]);
            }
        }
    }

    /// Flatten to a straight RGB image, un-premultiplying translucent pixels.
    pub fn flatten_rgb(&self) -> PostframeResult<image::RgbImage> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(4) {
            let a = px[3];
            match a {
                0 => out.extend_from_slice(&[0, 0, 0]),
                255 => out.extend_from_slice(&px[..3]),
                _ => {
                    for c in &px[..3] {
                        let v = (u32::from(*c) * 255 + u32::from(a) / 2) / u32::from(a);
                        out.push(v.min(255) as u8);
                    }
                }
            }
        }
        image::RgbImage::from_raw(self.width, self.height, out).ok_or_else(|| {
            PostframeError::validation("flattened buffer does not match layer size")
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composite.rs"]
mod tests;
