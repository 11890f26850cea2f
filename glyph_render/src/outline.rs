// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filling glyph outlines.

use glyph_api::face::FontFace;
use glyph_api::kurbo::{Affine, BezPath, PathEl, Point};
use log::debug;
use peniko::Color;
use tiny_skia::{FillRule, Paint, PathBuilder, Transform};

use crate::Renderer;
use crate::pixmap::Pixmap;
use crate::scale::{glyph_transform, is_degenerate};

impl<F: FontFace> Renderer<F> {
    /// Fill `outline`, given in font units, with the pen at `(x, y)`.
    ///
    /// All contours go through a single non-zero winding fill, so overlapping
    /// contours combine and counter-wound contours cut holes.
    ///
    /// Outlines never change the advance; the returned additional advance is
    /// always zero.
    pub fn draw_outline(&self, pixmap: &mut Pixmap, outline: &BezPath, x: f32, y: f32) -> f32 {
        let scale = self.scale();
        if is_degenerate(scale) {
            debug!("skipping outline at degenerate scale {scale}");
            return 0.0;
        }
        let pen = Point::new(f64::from(x), f64::from(y));
        fill_outline(pixmap, outline, glyph_transform(scale, pen), self.color);
        0.0
    }
}

/// Fill `outline` mapped through `transform` with `color`.
pub fn fill_outline(pixmap: &mut Pixmap, outline: &BezPath, transform: Affine, color: Color) {
    let Some(path) = device_path(outline, transform) else {
        return;
    };
    let Some(mut target) = pixmap.as_target() else {
        return;
    };
    let rgba = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    target.fill_path(
        &path,
        &paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Builds the device space path, or `None` if nothing would be filled.
fn device_path(outline: &BezPath, transform: Affine) -> Option<tiny_skia::Path> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "device coordinates fit comfortably in f32"
    )]
    let pt = |p: Point| {
        let p = transform * p;
        (p.x as f32, p.y as f32)
    };
    let mut builder = PathBuilder::new();
    for el in outline.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let (x, y) = pt(p);
                builder.move_to(x, y);
            }
            PathEl::LineTo(p) => {
                let (x, y) = pt(p);
                builder.line_to(x, y);
            }
            PathEl::QuadTo(p1, p2) => {
                let (x1, y1) = pt(p1);
                let (x, y) = pt(p2);
                builder.quad_to(x1, y1, x, y);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let (x1, y1) = pt(p1);
                let (x2, y2) = pt(p2);
                let (x, y) = pt(p3);
                builder.cubic_to(x1, y1, x2, y2, x, y);
            }
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
