// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use glyph_api::face::FontFace;
use peniko::Color;
use peniko::color::palette::css::BLACK;

use crate::error::ConfigError;
use crate::scale;

/// Draws glyphs of one face at one size and color.
///
/// All fields may be changed between draw calls; every call reads them afresh
/// and nothing is kept from previous calls.
#[derive(Clone, Debug)]
pub struct Renderer<F> {
    /// The face glyph data is read from.
    pub face: F,
    /// Size of the font in pixels per em, before pixel density is applied.
    pub font_size: f32,
    /// Multiplier for high density surfaces. Zero means `1`.
    pub pixel_density: f32,
    /// Fill color of outline glyphs.
    pub color: Color,
}

impl<F: FontFace> Renderer<F> {
    /// Creates a renderer drawing black 16 pixel glyphs at density `1`.
    pub fn new(face: F) -> Self {
        Self {
            face,
            font_size: 16.0,
            pixel_density: 1.0,
            color: BLACK,
        }
    }

    /// The pixel density in effect.
    pub fn density(&self) -> f32 {
        scale::effective_density(self.pixel_density)
    }

    /// Device pixels per font unit.
    pub fn scale(&self) -> f32 {
        scale::device_scale(self.font_size, self.pixel_density, self.face.units_per_em())
    }

    /// Side of the square cell bitmap and SVG glyphs are drawn into.
    pub fn cell_size(&self) -> f32 {
        scale::cell_size(self.font_size, self.pixel_density)
    }

    /// Reports configurations that silently draw nothing.
    pub fn check_config(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::NonPositiveFontSize(self.font_size));
        }
        if !self.pixel_density.is_finite() || self.pixel_density < 0.0 {
            return Err(ConfigError::InvalidDensity(self.pixel_density));
        }
        if self.face.units_per_em() == 0 {
            return Err(ConfigError::ZeroUnitsPerEm);
        }
        Ok(())
    }
}
