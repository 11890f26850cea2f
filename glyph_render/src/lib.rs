// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws shaped glyph runs onto a [`Pixmap`](pixmap::Pixmap).
//!
//! A [`Renderer`] holds the font face, size, pixel density and fill color. For
//! every glyph of a [`ShapedRun`](glyph::ShapedRun) it asks the face for the
//! glyph's representation and draws it:
//!
//! - vector outlines are scaled into device space and filled with the non-zero
//!   winding rule;
//! - embedded bitmaps (PNG, JPEG, TIFF, raw BGRA) are decoded, resized to a square
//!   cell of `font_size * pixel_density` pixels and composited source-over;
//! - embedded SVG documents are rasterized into the same cell, preserving their
//!   aspect ratio, and composited source-over.
//!
//! Bitmap and SVG glyphs may carry an outline that is drawn on top of the image.
//!
//! The pen advances by the shaped advances only, so chaining runs (for
//! example, runs of different fonts on one line) leaves no gaps.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `png` (enabled by default): Decode PNG glyph bitmaps and load/save [`Pixmap`](pixmap::Pixmap)s.
//! - `jpeg` (enabled by default): Decode JPEG glyph bitmaps.
//! - `tiff` (enabled by default): Decode TIFF glyph bitmaps.
//! - `svg` (enabled by default): Draw SVG glyphs.
//! - `text` (enabled by default): Read glyph data from OpenType fonts with [`SkrifaFace`](face::SkrifaFace).
//!
//! Which formats a build can draw is reported by [`Capabilities`](capabilities::Capabilities).

#![forbid(unsafe_code)]

pub mod bitmap;
pub mod capabilities;
pub mod error;
#[cfg(feature = "text")]
pub mod face;
pub mod outline;
pub mod pixmap;
mod render;
pub mod run;
pub mod scale;
pub mod shape;
#[cfg(feature = "svg")]
pub mod svg;

pub use glyph_api::{color, face as provider, glyph, kurbo, peniko};
pub use render::Renderer;
