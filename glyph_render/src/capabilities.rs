// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which glyph formats this build can draw.
//!
//! Glyphs in a format that is not supported draw nothing and report no error.
//! Query these flags to find out ahead of time.

use glyph_api::glyph::{GlyphData, ImageFormat};

/// Glyph formats supported by this build.
///
/// Decoders are selected at compile time through cargo features.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// PNG bitmaps (`png` feature).
    pub png: bool,
    /// JPEG bitmaps (`jpeg` feature).
    pub jpeg: bool,
    /// TIFF bitmaps (`tiff` feature).
    pub tiff: bool,
    /// Raw BGRA bitmaps.
    pub bgra: bool,
    /// Monochrome and grayscale masks.
    pub mask: bool,
    /// SVG documents (`svg` feature).
    pub svg: bool,
}

impl Capabilities {
    /// The capabilities of this build.
    pub const fn current() -> Self {
        Self {
            png: cfg!(feature = "png"),
            jpeg: cfg!(feature = "jpeg"),
            tiff: cfg!(feature = "tiff"),
            bgra: true,
            mask: false,
            svg: cfg!(feature = "svg"),
        }
    }

    /// Whether bitmaps in `format` are drawn.
    pub fn supports(&self, format: &ImageFormat) -> bool {
        match format {
            ImageFormat::Png => self.png,
            ImageFormat::Jpeg => self.jpeg,
            ImageFormat::Tiff => self.tiff,
            ImageFormat::Bgra { .. } => self.bgra,
            ImageFormat::Mask { .. } => self.mask,
        }
    }

    /// Whether `glyph` produces pixels, ignoring any overlay outline.
    pub fn draws(&self, glyph: &GlyphData) -> bool {
        match glyph {
            GlyphData::Outline(_) => true,
            GlyphData::Bitmap(bitmap) => self.supports(&bitmap.format),
            GlyphData::Svg(_) => self.svg,
            GlyphData::None => false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::current()
    }
}
