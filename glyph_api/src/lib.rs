// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by glyph renderers.
//!
//! A text shaper produces a [`ShapedRun`](glyph::ShapedRun): glyph identifiers plus
//! advances and offsets. A [`FontFace`](face::FontFace) resolves each identifier into
//! one of the [`GlyphData`](glyph::GlyphData) representations, which a renderer then
//! turns into pixels.

#![forbid(unsafe_code)]

pub mod face;
pub mod glyph;

pub use peniko;
pub use peniko::color;
pub use peniko::kurbo;
pub use skrifa::GlyphId;
pub use skrifa::raw::types::F26Dot6;
