// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal shaper.

use glyph_api::face::{FontFace, Shaper};
use glyph_api::glyph::{LineMetrics, ShapedGlyph, ShapedRun};
use glyph_api::{F26Dot6, GlyphId};

/// Maps every character to its nominal glyph with the glyph's default advance.
///
/// There is no kerning, no ligature substitution and no reordering, which is
/// enough for simple scripts and monospaced text. Characters the face does not
/// cover become glyph 0, the notdef glyph.
#[derive(Copy, Clone, Debug, Default)]
pub struct NominalShaper;

impl Shaper for NominalShaper {
    fn shape<F: FontFace + ?Sized>(&self, face: &F, text: &str, font_size: f32) -> ShapedRun {
        let upem = face.units_per_em();
        let scale = if upem == 0 {
            0.0
        } else {
            f64::from(font_size) / f64::from(upem)
        };
        let to_fixed = |units: f32| F26Dot6::from_f64(f64::from(units) * scale);

        let glyphs = text
            .chars()
            .map(|ch| {
                let id = face.nominal_glyph(ch).unwrap_or(GlyphId::new(0));
                let advance = face.advance_width(id).unwrap_or(0.0);
                ShapedGlyph::new(id, to_fixed(advance))
            })
            .collect();
        let metrics = face.metrics();
        ShapedRun {
            glyphs,
            line: LineMetrics {
                ascent: to_fixed(metrics.ascent),
                descent: to_fixed(metrics.descent),
            },
        }
    }
}
