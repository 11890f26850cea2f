// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing SVG glyphs.

use glyph_api::face::FontFace;
use glyph_api::glyph::GlyphSvg;
use tiny_skia::Transform;

use crate::Renderer;
use crate::error::GlyphError;
use crate::pixmap::Pixmap;
use crate::scale::{cell_pixels, pixel_origin};

impl<F: FontFace> Renderer<F> {
    /// Draw `svg` with its top-left corner at `(x, y)`.
    ///
    /// The document is scaled to fit the glyph cell while keeping its aspect
    /// ratio. The returned advance is the full cell size, plus the advance of a
    /// non-empty overlay outline.
    pub fn draw_svg(
        &self,
        pixmap: &mut Pixmap,
        svg: &GlyphSvg,
        x: f32,
        y: f32,
    ) -> Result<f32, GlyphError> {
        let cell = self.cell_size();
        let tree = usvg::Tree::from_data(&svg.source, &usvg::Options::default())?;
        let side = cell_pixels(cell);
        if let Some(image) = rasterize(&tree, side, side) {
            pixmap.draw_pixmap(image.as_ref(), pixel_origin(x), pixel_origin(y));
        }

        let mut advance = cell;
        if let Some(outline) = svg.outline.as_ref().filter(|o| !o.elements().is_empty()) {
            advance += self.draw_outline(pixmap, outline, x, y);
        }
        Ok(advance)
    }
}

/// Largest size with the aspect ratio of `width x height` that fits into
/// `max_width x max_height`.
///
/// The dimension that runs out first is clamped to its maximum and the other
/// one shrinks proportionally.
#[expect(
    clippy::cast_possible_truncation,
    reason = "results never exceed the maximum dimensions"
)]
pub fn fit_aspect(width: f32, height: f32, max_width: u32, max_height: u32) -> (u32, u32) {
    let aspect = width / height;
    let (max_w, max_h) = (max_width as f32, max_height as f32);
    let view_aspect = max_w / max_h;
    if view_aspect > aspect {
        ((max_h * aspect) as u32, max_height)
    } else if view_aspect < aspect {
        (max_width, (max_w / aspect) as u32)
    } else {
        (max_width, max_height)
    }
}

/// Render `tree` into a pixmap no larger than `max_width x max_height`.
///
/// Returns `None` if the result would be empty.
fn rasterize(tree: &usvg::Tree, max_width: u32, max_height: u32) -> Option<tiny_skia::Pixmap> {
    let size = tree.size();
    let (width, height) = fit_aspect(size.width(), size.height(), max_width, max_height);
    let mut target = tiny_skia::Pixmap::new(width, height)?;
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(tree, transform, &mut target.as_mut());
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_documents_shrink_in_height() {
        assert_eq!(fit_aspect(200.0, 100.0, 20, 20), (20, 10));
    }

    #[test]
    fn tall_documents_shrink_in_width() {
        assert_eq!(fit_aspect(50.0, 100.0, 20, 20), (10, 20));
    }

    #[test]
    fn square_documents_fill_the_cell() {
        assert_eq!(fit_aspect(64.0, 64.0, 20, 20), (20, 20));
    }

    #[test]
    fn rasterized_size_follows_aspect() {
        let source = br#"<svg xmlns="http://www.w3.org/2000/svg" width="30" height="10"><rect width="30" height="10"/></svg>"#;
        let tree = usvg::Tree::from_data(source, &usvg::Options::default()).unwrap();
        let pixmap = rasterize(&tree, 12, 12).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (12, 4));
        assert_eq!(pixmap.pixel(6, 2).map(|p| p.alpha()), Some(255));
    }

    #[test]
    fn empty_cell_rasterizes_to_nothing() {
        let source = br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        let tree = usvg::Tree::from_data(source, &usvg::Options::default()).unwrap();
        assert!(rasterize(&tree, 0, 0).is_none());
    }
}
