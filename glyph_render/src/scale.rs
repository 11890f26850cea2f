// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping from font units to device pixels.
//!
//! Font space has its y axis pointing up from the baseline, raster space has
//! it pointing down from the top-left corner. A point `(x, y)` in font units
//! lands at `(x * scale + pen.x, -y * scale + pen.y)` on the surface.

use glyph_api::F26Dot6;
use glyph_api::kurbo::{Affine, Point};

/// Returns the pixel density to use for `pixel_density`.
///
/// Zero is the unset value and means `1`, as do negative and non-finite values.
pub fn effective_density(pixel_density: f32) -> f32 {
    if pixel_density.is_finite() && pixel_density > 0.0 {
        pixel_density
    } else {
        1.0
    }
}

/// Number of device pixels per font unit.
///
/// The result is degenerate (see [`is_degenerate`]) for non-positive font
/// sizes and for faces with zero units per em.
pub fn device_scale(font_size: f32, pixel_density: f32, units_per_em: u16) -> f32 {
    font_size * effective_density(pixel_density) / f32::from(units_per_em)
}

/// Whether nothing can be drawn at `scale`.
pub fn is_degenerate(scale: f32) -> bool {
    !scale.is_finite() || scale <= 0.0
}

/// Side of the square cell bitmap and SVG glyphs are drawn into, in device pixels.
pub fn cell_size(font_size: f32, pixel_density: f32) -> f32 {
    font_size * effective_density(pixel_density)
}

/// Whole pixels covered by a cell of `size`, or zero if the cell is empty.
#[expect(
    clippy::cast_possible_truncation,
    reason = "cell sizes are clamped to the u16 range of a pixmap"
)]
pub(crate) fn cell_pixels(size: f32) -> u32 {
    if size.is_finite() && size >= 1.0 {
        size.min(f32::from(u16::MAX)) as u32
    } else {
        0
    }
}

/// Transform from font units to device pixels for a glyph drawn at `pen`.
pub fn glyph_transform(scale: f32, pen: Point) -> Affine {
    let s = f64::from(scale);
    Affine::new([s, 0.0, 0.0, -s, pen.x, pen.y])
}

/// Converts a 26.6 fixed point shaping value to device pixels.
pub fn fixed_to_device(value: F26Dot6, pixel_density: f32) -> f64 {
    value.to_f64() * f64::from(effective_density(pixel_density))
}

/// Integer pixel position of a device coordinate.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to int conversion is intended"
)]
pub(crate) fn pixel_origin(coord: f32) -> i32 {
    coord.floor() as i32
}

/// Pen position rounded up to a whole pixel.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to int conversion is intended"
)]
pub(crate) fn pixel_ceil(coord: f64) -> i32 {
    coord.ceil() as i32
}
