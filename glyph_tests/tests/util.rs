// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures.

use std::io::Cursor;

use glyph_api::GlyphId;
use glyph_api::face::{FaceMetrics, FontFace};
use glyph_api::glyph::{GlyphBitmap, GlyphData, GlyphSvg, ImageFormat};
use glyph_api::kurbo::BezPath;
use glyph_render::pixmap::Pixmap;

/// A face with a handful of glyphs assigned to characters.
///
/// The glyph for the `n`th added character has id `n + 1`, id 0 is an empty
/// notdef. Every glyph advances by the same amount.
#[derive(Clone, Debug)]
pub(crate) struct TestFace {
    pub(crate) units_per_em: u16,
    pub(crate) advance: f32,
    glyphs: Vec<(char, GlyphData)>,
}

impl TestFace {
    /// 1000 units per em, 600 unit advances, ascent 800 and descent -200.
    pub(crate) fn new() -> Self {
        Self {
            units_per_em: 1000,
            advance: 600.0,
            glyphs: Vec::new(),
        }
    }

    pub(crate) fn with_glyph(mut self, ch: char, data: GlyphData) -> Self {
        self.glyphs.push((ch, data));
        self
    }
}

impl FontFace for TestFace {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_data(&self, glyph: GlyphId, _ppem: f32) -> GlyphData {
        let index = glyph.to_u32() as usize;
        index
            .checked_sub(1)
            .and_then(|i| self.glyphs.get(i))
            .map_or(GlyphData::None, |(_, data)| data.clone())
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        let index = self.glyphs.iter().position(|(c, _)| *c == ch)?;
        Some(GlyphId::new(index as u32 + 1))
    }

    fn advance_width(&self, _glyph: GlyphId) -> Option<f32> {
        Some(self.advance)
    }

    fn metrics(&self) -> FaceMetrics {
        FaceMetrics {
            ascent: 800.0,
            descent: -200.0,
        }
    }
}

/// A clockwise rectangle in font units.
pub(crate) fn rect(path: &mut BezPath, x0: f64, y0: f64, x1: f64, y1: f64) {
    path.move_to((x0, y0));
    path.line_to((x0, y1));
    path.line_to((x1, y1));
    path.line_to((x1, y0));
    path.close_path();
}

pub(crate) fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut path = BezPath::new();
    rect(&mut path, x0, y0, x1, y1);
    path
}

/// A PNG of `width x height` pixels of a single color.
pub(crate) fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encoding a PNG in memory");
    out.into_inner()
}

pub(crate) fn png_glyph(width: u32, height: u32, rgba: [u8; 4]) -> GlyphData {
    GlyphData::Bitmap(GlyphBitmap {
        format: ImageFormat::Png,
        data: solid_png(width, height, rgba),
        outline: None,
    })
}

/// An SVG document of `width x height` filled with `fill`.
pub(crate) fn svg_glyph(width: u32, height: u32, fill: &str) -> GlyphData {
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}" fill="{fill}"/></svg>"#
    );
    GlyphData::Svg(GlyphSvg {
        source: source.into_bytes(),
        outline: None,
    })
}

pub(crate) fn is_blank(pixmap: &Pixmap) -> bool {
    pixmap.data().iter().all(|p| p.a == 0)
}

/// Asserts that a pixel is within one step of `expected` on every channel.
#[track_caller]
pub(crate) fn assert_pixel(pixmap: &Pixmap, x: u16, y: u16, expected: [u8; 4]) {
    let p = pixmap.sample(x, y);
    let actual = [p.r, p.g, p.b, p.a];
    let close = actual
        .iter()
        .zip(expected)
        .all(|(a, e)| a.abs_diff(e) <= 1);
    assert!(close, "pixel ({x}, {y}) is {actual:?}, expected {expected:?}");
}
