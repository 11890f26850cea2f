// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing shaped runs.

use glyph_api::face::{FontFace, Shaper};
use glyph_api::glyph::{GlyphData, ShapedGlyph, ShapedRun};
use glyph_api::kurbo::Point;
use log::{trace, warn};

use crate::Renderer;
use crate::error::GlyphError;
use crate::pixmap::Pixmap;
use crate::scale::{fixed_to_device, pixel_ceil};

impl<F: FontFace> Renderer<F> {
    /// Shape `text` and draw it at the left edge of `pixmap`, with the baseline
    /// one ascent below the top.
    ///
    /// Returns the pen position after the last glyph, rounded up to a whole pixel.
    pub fn draw_string<S: Shaper>(&self, shaper: &S, text: &str, pixmap: &mut Pixmap) -> i32 {
        let run = shaper.shape(&self.face, text, self.font_size);
        let baseline = pixel_ceil(fixed_to_device(run.line.ascent, self.pixel_density));
        self.draw_shaped_run_at(&run, pixmap, 0, baseline)
    }

    /// Shape `text` and draw it with the pen starting at `(x, y)`, `y` being the baseline.
    ///
    /// Returns the pen position after the last glyph, rounded up to a whole pixel.
    pub fn draw_string_at<S: Shaper>(
        &self,
        shaper: &S,
        text: &str,
        pixmap: &mut Pixmap,
        x: i32,
        y: i32,
    ) -> i32 {
        let run = shaper.shape(&self.face, text, self.font_size);
        self.draw_shaped_run_at(&run, pixmap, x, y)
    }

    /// Draw every glyph of `run` in order, with the pen starting at
    /// `(start_x, start_y)`.
    ///
    /// The run should have been shaped at this renderer's font size. A glyph
    /// that fails to draw is logged and left blank; the rest of the run is
    /// still drawn.
    ///
    /// Returns the pen position after the last glyph, rounded up to a whole
    /// pixel, so that another run can continue from there.
    pub fn draw_shaped_run_at(
        &self,
        run: &ShapedRun,
        pixmap: &mut Pixmap,
        start_x: i32,
        start_y: i32,
    ) -> i32 {
        let mut pen = Point::new(f64::from(start_x), f64::from(start_y));
        for (index, glyph) in run.glyphs.iter().enumerate() {
            if let Err(err) = self.draw_glyph(pixmap, glyph, &mut pen) {
                warn!(
                    "skipping glyph {} at index {index} of run: {err}",
                    glyph.id.to_u32()
                );
            }
        }
        pixel_ceil(pen.x)
    }

    /// Draw a single glyph at `pen` and move `pen` past it.
    ///
    /// The glyph's offsets are subtracted from the pen before drawing, then
    /// its advances are applied. Both are scaled by the pixel density. The pen
    /// moves even if drawing fails, so a caller drawing glyph by glyph stays in
    /// step with [`draw_shaped_run_at`](Self::draw_shaped_run_at).
    ///
    /// Returns the advance reported by the glyph's renderer.
    pub fn draw_glyph(
        &self,
        pixmap: &mut Pixmap,
        glyph: &ShapedGlyph,
        pen: &mut Point,
    ) -> Result<f32, GlyphError> {
        pen.x -= fixed_to_device(glyph.x_offset, self.pixel_density);
        pen.y -= fixed_to_device(glyph.y_offset, self.pixel_density);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "device coordinates fit comfortably in f32"
        )]
        let (x, y) = (pen.x as f32, pen.y as f32);
        let data = self.face.glyph_data(glyph.id, self.cell_size());
        trace!(
            "drawing glyph {} as {} at ({x}, {y})",
            glyph.id.to_u32(),
            data.kind()
        );
        let drawn = match &data {
            GlyphData::Outline(outline) => Ok(self.draw_outline(pixmap, outline, x, y)),
            GlyphData::Bitmap(bitmap) => self.draw_bitmap(pixmap, bitmap, x, y),
            #[cfg(feature = "svg")]
            GlyphData::Svg(svg) => self.draw_svg(pixmap, svg, x, y),
            #[cfg(not(feature = "svg"))]
            GlyphData::Svg(_) => Ok(0.0),
            GlyphData::None => Ok(0.0),
        };

        pen.x += fixed_to_device(glyph.x_advance, self.pixel_density);
        // Shaping advances point up, the raster y axis points down.
        pen.y -= fixed_to_device(glyph.y_advance, self.pixel_density);
        drawn
    }
}
