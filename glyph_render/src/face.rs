// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading glyph data from OpenType fonts.

use glyph_api::face::{FaceMetrics, FontFace};
use glyph_api::glyph::{GlyphBitmap, GlyphData, GlyphSvg, ImageFormat};
use glyph_api::kurbo::BezPath;
use peniko::Blob;
use skrifa::bitmap::{BitmapData, BitmapStrikes};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::error::FaceError;

/// A [`FontFace`] backed by OpenType font data.
///
/// Glyphs resolve to the first representation found, in this order: an SVG
/// document from the `SVG ` table, an embedded bitmap (`sbix`, `CBDT` or
/// `EBDT`), the outline (`glyf` or `CFF`).
#[derive(Clone, Debug)]
pub struct SkrifaFace {
    data: Blob<u8>,
    index: u32,
    units_per_em: u16,
    metrics: FaceMetrics,
}

impl SkrifaFace {
    /// Creates a face for font `index` of the font file or collection in `data`.
    pub fn new(data: impl Into<Blob<u8>>, index: u32) -> Result<Self, FaceError> {
        let data = data.into();
        let font = FontRef::from_index(data.data(), index)?;
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        Ok(Self {
            units_per_em: metrics.units_per_em,
            metrics: FaceMetrics {
                ascent: metrics.ascent,
                descent: metrics.descent,
            },
            data,
            index,
        })
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(self.data.data(), self.index).ok()
    }
}

impl FontFace for SkrifaFace {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_data(&self, glyph: GlyphId, ppem: f32) -> GlyphData {
        let Some(font) = self.font() else {
            return GlyphData::None;
        };
        if let Some(source) = svg_document(&font, glyph) {
            return GlyphData::Svg(GlyphSvg {
                source: source.to_vec(),
                outline: None,
            });
        }
        if let Some(bitmap) = bitmap_glyph(&font, glyph, ppem) {
            return GlyphData::Bitmap(bitmap);
        }
        outline(&font, glyph).map_or(GlyphData::None, GlyphData::Outline)
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        self.font()?.charmap().map(ch)
    }

    fn advance_width(&self, glyph: GlyphId) -> Option<f32> {
        self.font()?
            .glyph_metrics(Size::unscaled(), LocationRef::default())
            .advance_width(glyph)
    }

    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }
}

/// Finds the SVG document covering `glyph`.
fn svg_document<'a>(font: &FontRef<'a>, glyph: GlyphId) -> Option<&'a [u8]> {
    font.svg().ok()?.glyph_data(glyph).ok()?
}

fn bitmap_glyph(font: &FontRef<'_>, glyph: GlyphId, ppem: f32) -> Option<GlyphBitmap> {
    let strikes = BitmapStrikes::new(font);
    if strikes.is_empty() {
        return None;
    }
    let bitmap = strikes.glyph_for_size(Size::new(ppem), glyph)?;
    let (width, height) = (bitmap.width, bitmap.height);
    let (format, data) = match bitmap.data {
        BitmapData::Png(data) => (ImageFormat::Png, data),
        BitmapData::Bgra(data) => (ImageFormat::Bgra { width, height }, data),
        BitmapData::Mask(mask) => (
            ImageFormat::Mask {
                width,
                height,
                bpp: mask.bpp,
            },
            mask.data,
        ),
    };
    Some(GlyphBitmap {
        format,
        data: data.to_vec(),
        outline: None,
    })
}

fn outline(font: &FontRef<'_>, glyph: GlyphId) -> Option<BezPath> {
    let outlines = font.outline_glyphs();
    let outline = outlines.get(glyph)?;
    let mut path = OutlinePath(BezPath::new());
    outline
        .draw(
            DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
            &mut path,
        )
        .ok()?;
    Some(path.0)
}

/// Collects an outline in font units, y pointing up.
struct OutlinePath(BezPath);

impl OutlinePen for OutlinePath {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((x, y));
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((x, y));
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to((cx0, cy0), (cx1, cy1), (x, y));
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.0.quad_to((cx, cy), (x, y));
    }

    #[inline]
    fn close(&mut self) {
        self.0.close_path();
    }
}
