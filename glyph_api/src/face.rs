// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to font data and text shaping.

use skrifa::GlyphId;

use crate::glyph::{GlyphData, ShapedRun};

/// Vertical metrics of a face, in font units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FaceMetrics {
    /// Distance from the baseline to the top of the line, positive up.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line, usually negative.
    pub descent: f32,
}

/// A source of glyph data.
///
/// Implementations must return the same representation for the same
/// `(glyph, ppem)` pair for as long as the face is alive.
pub trait FontFace {
    /// Number of font units per em.
    fn units_per_em(&self) -> u16;

    /// Resolves the representation of `glyph` for drawing at `ppem` pixels
    /// per em.
    ///
    /// `ppem` only selects among embedded strikes. Outlines are always
    /// returned in font units.
    fn glyph_data(&self, glyph: GlyphId, ppem: f32) -> GlyphData;

    /// Maps a character to its nominal glyph, if the face has one.
    fn nominal_glyph(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of `glyph` in font units.
    fn advance_width(&self, glyph: GlyphId) -> Option<f32>;

    /// Vertical metrics of the face.
    fn metrics(&self) -> FaceMetrics;
}

impl<T: FontFace + ?Sized> FontFace for &T {
    fn units_per_em(&self) -> u16 {
        (**self).units_per_em()
    }

    fn glyph_data(&self, glyph: GlyphId, ppem: f32) -> GlyphData {
        (**self).glyph_data(glyph, ppem)
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        (**self).nominal_glyph(ch)
    }

    fn advance_width(&self, glyph: GlyphId) -> Option<f32> {
        (**self).advance_width(glyph)
    }

    fn metrics(&self) -> FaceMetrics {
        (**self).metrics()
    }
}

/// Turns text into positioned glyphs.
pub trait Shaper {
    /// Shapes `text` with `face` at `font_size` pixels per em.
    fn shape<F: FontFace + ?Sized>(&self, face: &F, text: &str, font_size: f32) -> ShapedRun;
}
