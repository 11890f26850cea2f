// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing embedded bitmap glyphs.
//!
//! Bitmaps are always resized to a square cell of `font_size * pixel_density`
//! pixels, whatever the shape of the source image. Fonts crop their bitmaps to
//! the glyph cell, so this keeps them aligned with outline glyphs of the same
//! size.

use glyph_api::face::FontFace;
use glyph_api::glyph::{GlyphBitmap, ImageFormat};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use log::debug;
use peniko::color::PremulRgba8;
use tiny_skia::ColorU8;

use crate::Renderer;
use crate::capabilities::Capabilities;
use crate::error::GlyphError;
use crate::pixmap::{Pixmap, unpremultiply};
use crate::scale::{cell_pixels, pixel_origin};

impl<F: FontFace> Renderer<F> {
    /// Draw `bitmap` with its top-left corner at `(x, y)`.
    ///
    /// Returns the cell size plus the advance of the overlay outline, if any.
    /// Bitmaps in a format this build cannot draw produce no pixels and
    /// contribute no advance.
    pub fn draw_bitmap(
        &self,
        pixmap: &mut Pixmap,
        bitmap: &GlyphBitmap,
        x: f32,
        y: f32,
    ) -> Result<f32, GlyphError> {
        let mut advance = 0.0;
        if Capabilities::current().supports(&bitmap.format) {
            let cell = self.cell_size();
            if let Some(image) = decode(bitmap)? {
                if let Some(scaled) = resize_to_cell(&image, cell_pixels(cell)) {
                    pixmap.draw_pixmap(scaled.as_ref(), pixel_origin(x), pixel_origin(y));
                }
            }
            advance = cell;
        } else {
            debug!("no decoder for {:?} glyph bitmaps, skipping", bitmap.format);
        }

        if let Some(outline) = &bitmap.outline {
            advance += self.draw_outline(pixmap, outline, x, y);
        }
        Ok(advance)
    }
}

/// Decode `bitmap` into straight-alpha RGBA.
///
/// Returns `Ok(None)` for formats that are accepted but not drawn.
pub fn decode(bitmap: &GlyphBitmap) -> Result<Option<RgbaImage>, GlyphError> {
    let format = match bitmap.format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Tiff => image::ImageFormat::Tiff,
        ImageFormat::Bgra { width, height } => {
            return decode_bgra(&bitmap.data, width, height).map(Some);
        }
        ImageFormat::Mask { .. } => return Ok(None),
    };
    let image = image::load_from_memory_with_format(&bitmap.data, format).map_err(|source| {
        GlyphError::Decode {
            format: bitmap.format,
            source,
        }
    })?;
    Ok(Some(image.to_rgba8()))
}

/// Convert premultiplied BGRA rows into straight-alpha RGBA.
fn decode_bgra(data: &[u8], width: u32, height: u32) -> Result<RgbaImage, GlyphError> {
    let expected =
        usize::try_from(u64::from(width) * u64::from(height) * 4).unwrap_or(usize::MAX);
    if data.len() < expected {
        return Err(GlyphError::BitmapSize {
            expected,
            actual: data.len(),
        });
    }
    let rgba = data[..expected]
        .chunks_exact(4)
        .flat_map(|p| {
            unpremultiply(PremulRgba8 {
                r: p[2],
                g: p[1],
                b: p[0],
                a: p[3],
            })
        })
        .collect();
    RgbaImage::from_raw(width, height, rgba).ok_or(GlyphError::BitmapSize {
        expected,
        actual: data.len(),
    })
}

/// Resize `image` to a `side x side` premultiplied pixmap with bicubic filtering.
fn resize_to_cell(image: &RgbaImage, side: u32) -> Option<tiny_skia::Pixmap> {
    if side == 0 || image.width() == 0 || image.height() == 0 {
        return None;
    }
    let scaled = imageops::resize(image, side, side, FilterType::CatmullRom);
    let mut cell = tiny_skia::Pixmap::new(side, side)?;
    for (dst, p) in cell.pixels_mut().iter_mut().zip(scaled.pixels()) {
        *dst = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
    }
    Some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgra_is_swizzled_and_unpremultiplied() {
        let bitmap = GlyphBitmap {
            format: ImageFormat::Bgra {
                width: 2,
                height: 1,
            },
            // Opaque blue, then half transparent red.
            data: vec![255, 0, 0, 255, 0, 0, 128, 128],
            outline: None,
        };
        let image = decode(&bitmap).unwrap().unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn short_bgra_data_is_an_error() {
        let bitmap = GlyphBitmap {
            format: ImageFormat::Bgra {
                width: 2,
                height: 2,
            },
            data: vec![0; 12],
            outline: None,
        };
        assert!(matches!(
            decode(&bitmap),
            Err(GlyphError::BitmapSize {
                expected: 16,
                actual: 12
            })
        ));
    }

    #[test]
    fn masks_decode_to_nothing() {
        let bitmap = GlyphBitmap {
            format: ImageFormat::Mask {
                width: 8,
                height: 1,
                bpp: 1,
            },
            data: vec![0xff],
            outline: None,
        };
        assert!(decode(&bitmap).unwrap().is_none());
    }

    #[test]
    fn garbage_png_is_a_decode_error() {
        let bitmap = GlyphBitmap {
            format: ImageFormat::Png,
            data: b"definitely not a png".to_vec(),
            outline: None,
        };
        assert!(matches!(
            decode(&bitmap),
            Err(GlyphError::Decode {
                format: ImageFormat::Png,
                ..
            })
        ));
    }

    #[test]
    fn empty_cell_resizes_to_nothing() {
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        assert!(resize_to_cell(&image, 0).is_none());
        let pixmap = resize_to_cell(&image, 3).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (3, 3));
    }
}
