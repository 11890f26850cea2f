// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Types for glyphs.

use peniko::kurbo::BezPath;
use skrifa::GlyphId;
use skrifa::raw::types::F26Dot6;

/// A glyph positioned by a text shaper.
///
/// Advances and offsets are in pixels at the font size the run was shaped
/// with. They do not include the pixel density of the output surface; the
/// renderer applies it when positioning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapedGlyph {
    /// The font-specific identifier for this glyph.
    ///
    /// This ID is specific to the font being used and corresponds to the
    /// glyph index within that font. It is *not* a Unicode code point.
    pub id: GlyphId,
    /// Horizontal pen movement after this glyph.
    pub x_advance: F26Dot6,
    /// Vertical pen movement after this glyph, positive up.
    pub y_advance: F26Dot6,
    /// Horizontal positioning adjustment.
    pub x_offset: F26Dot6,
    /// Vertical positioning adjustment, positive up.
    pub y_offset: F26Dot6,
}

impl ShapedGlyph {
    /// Creates a glyph with a horizontal advance and no offsets.
    pub fn new(id: GlyphId, x_advance: F26Dot6) -> Self {
        Self {
            id,
            x_advance,
            y_advance: F26Dot6::from_bits(0),
            x_offset: F26Dot6::from_bits(0),
            y_offset: F26Dot6::from_bits(0),
        }
    }

    /// Sets the positioning offsets of this glyph.
    pub fn with_offset(mut self, x_offset: F26Dot6, y_offset: F26Dot6) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }
}

/// Aggregate line metrics of a shaped run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the line, positive up.
    pub ascent: F26Dot6,
    /// Distance from the baseline to the bottom of the line, usually negative.
    pub descent: F26Dot6,
}

/// A sequence of glyphs produced by one shaping call.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedRun {
    /// Glyphs in shaping order.
    pub glyphs: Vec<ShapedGlyph>,
    /// Line metrics at the font size the run was shaped at.
    pub line: LineMetrics,
}

/// Encoding of an embedded bitmap glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG encoded image.
    Png,
    /// JPEG encoded image.
    Jpeg,
    /// TIFF encoded image.
    Tiff,
    /// Uncompressed premultiplied BGRA rows.
    Bgra {
        /// Number of columns.
        width: u32,
        /// Number of rows.
        height: u32,
    },
    /// Single channel monochrome or grayscale mask.
    ///
    /// Accepted but not drawn.
    Mask {
        /// Number of columns.
        width: u32,
        /// Number of rows.
        height: u32,
        /// Bits per pixel, one of 1, 2, 4 or 8.
        bpp: u8,
    },
}

/// An embedded raster image for a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphBitmap {
    /// How `data` is encoded.
    pub format: ImageFormat,
    /// The encoded image.
    pub data: Vec<u8>,
    /// Outline drawn on top of the image, in font units.
    pub outline: Option<BezPath>,
}

/// An embedded SVG document for a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSvg {
    /// The SVG document, possibly gzip compressed.
    pub source: Vec<u8>,
    /// Outline drawn on top of the document, in font units.
    pub outline: Option<BezPath>,
}

/// The representation of a single glyph, as resolved by a font face.
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphData {
    /// A vector outline in font units, y pointing up.
    Outline(BezPath),
    /// An embedded raster image.
    Bitmap(GlyphBitmap),
    /// An embedded SVG document.
    Svg(GlyphSvg),
    /// The face has nothing to draw for this glyph.
    None,
}

impl GlyphData {
    /// Returns a short name of the representation, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Outline(_) => "outline",
            Self::Bitmap(_) => "bitmap",
            Self::Svg(_) => "svg",
            Self::None => "none",
        }
    }
}
