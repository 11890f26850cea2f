// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph lookup and drawing through OpenType font data.

use glyph_api::GlyphId;
use glyph_api::face::FontFace;
use glyph_api::glyph::{GlyphData, ImageFormat};
use glyph_api::kurbo::{Rect, Shape};
use glyph_render::Renderer;
use glyph_render::face::SkrifaFace;
use glyph_render::pixmap::Pixmap;
use glyph_render::shape::NominalShaper;

use crate::font_data::{BITMAP_GLYPH, OUTLINE_GLYPH, STRIKE_PPEM, SVG_GLYPH, test_font};
use crate::util::{assert_pixel, solid_png};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

const SVG_DOCUMENT: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="blue"/></svg>"#;

fn face() -> SkrifaFace {
    let font = test_font(&solid_png(2, 2, RED), SVG_DOCUMENT);
    SkrifaFace::new(font, 0).unwrap()
}

#[test]
fn face_reads_head_and_hhea() {
    let face = face();
    assert_eq!(face.units_per_em(), 1000);
    assert_eq!(face.metrics().ascent, 800.0);
    assert_eq!(face.metrics().descent, -200.0);
    assert_eq!(face.advance_width(GlyphId::new(OUTLINE_GLYPH)), Some(600.0));
}

#[test]
fn charmap_resolves_covered_characters() {
    let face = face();
    assert_eq!(face.nominal_glyph('A'), Some(GlyphId::new(OUTLINE_GLYPH)));
    assert_eq!(face.nominal_glyph('B'), Some(GlyphId::new(BITMAP_GLYPH)));
    assert_eq!(face.nominal_glyph('C'), Some(GlyphId::new(SVG_GLYPH)));
    assert_eq!(face.nominal_glyph('z'), None);
}

#[test]
fn plain_glyph_resolves_to_its_outline() {
    let data = face().glyph_data(GlyphId::new(OUTLINE_GLYPH), 20.0);
    let GlyphData::Outline(path) = data else {
        panic!("expected an outline, got {}", data.kind());
    };
    assert_eq!(path.bounding_box(), Rect::new(100.0, 100.0, 900.0, 900.0));
}

#[test]
fn bitmap_strike_wins_over_outline() {
    let png = solid_png(2, 2, RED);
    let face = SkrifaFace::new(test_font(&png, SVG_DOCUMENT), 0).unwrap();

    let data = face.glyph_data(GlyphId::new(BITMAP_GLYPH), f32::from(STRIKE_PPEM));

    let GlyphData::Bitmap(bitmap) = data else {
        panic!("expected a bitmap, got {}", data.kind());
    };
    assert_eq!(bitmap.format, ImageFormat::Png);
    assert_eq!(bitmap.data, png);
    assert!(bitmap.outline.is_none());
}

#[test]
fn svg_document_wins_over_outline() {
    let data = face().glyph_data(GlyphId::new(SVG_GLYPH), 20.0);
    let GlyphData::Svg(svg) = data else {
        panic!("expected an SVG document, got {}", data.kind());
    };
    assert_eq!(svg.source, SVG_DOCUMENT);
}

#[test]
fn notdef_has_nothing_to_draw() {
    assert_eq!(face().glyph_data(GlyphId::new(0), 20.0), GlyphData::None);
}

#[test]
fn draw_string_draws_every_kind_of_glyph() {
    let mut renderer = Renderer::new(face());
    renderer.font_size = 20.0;
    assert_eq!(renderer.check_config(), Ok(()));
    let mut pixmap = Pixmap::new(64, 48);

    let end = renderer.draw_string(&NominalShaper, "ABC", &mut pixmap);

    // Baseline at 16, pen advancing by 12 pixels.
    assert_eq!(end, 36);
    // The outline of `A` spans 2..18 horizontally, -2..14 vertically.
    assert_pixel(&pixmap, 10, 8, BLACK);
    // The bitmap of `B` and the document of `C` fill 20 pixel cells below the baseline.
    assert_pixel(&pixmap, 18, 25, RED);
    assert_pixel(&pixmap, 40, 25, BLUE);
    assert_pixel(&pixmap, 50, 8, CLEAR);
    assert_pixel(&pixmap, 10, 40, CLEAR);
}
