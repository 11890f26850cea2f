// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use glyph_api::glyph::ImageFormat;
use thiserror::Error;

/// Errors that abort drawing a single glyph.
///
/// A run keeps going when one of its glyphs fails; the pen still advances
/// past the failed glyph.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The embedded bitmap could not be decoded.
    #[error("failed to decode {format:?} glyph bitmap")]
    Decode {
        /// The declared format of the bitmap.
        format: ImageFormat,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// Raw bitmap data does not match its declared dimensions.
    #[error("glyph bitmap holds {actual} bytes, expected {expected}")]
    BitmapSize {
        /// Bytes required by the declared dimensions.
        expected: usize,
        /// Bytes present.
        actual: usize,
    },
    /// The embedded SVG document could not be parsed.
    #[cfg(feature = "svg")]
    #[error("failed to parse SVG glyph document")]
    Svg(#[from] usvg::Error),
}

/// Problems with a [`Renderer`](crate::Renderer)'s configuration.
///
/// Drawing with such a configuration is not an error: it produces no pixels.
/// This type lets callers detect it up front.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The font size is zero, negative or not finite.
    #[error("font size must be finite and positive, got {0}")]
    NonPositiveFontSize(f32),
    /// The pixel density is negative or not finite.
    #[error("pixel density must be finite and not negative, got {0}")]
    InvalidDensity(f32),
    /// The face reports zero units per em.
    #[error("font face has zero units per em")]
    ZeroUnitsPerEm,
}

/// Errors creating a [`SkrifaFace`](crate::face::SkrifaFace).
#[cfg(feature = "text")]
#[derive(Debug, Error)]
pub enum FaceError {
    /// The font data could not be read.
    #[error("failed to read font data")]
    Read(#[from] skrifa::raw::ReadError),
}
