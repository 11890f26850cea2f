// Copyright 2025 the Glyph Render Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use peniko::Color;
use peniko::color::PremulRgba8;
use tiny_skia::{PixmapPaint, PixmapRef, PremultipliedColorU8, Transform};

const TRANSPARENT: PremulRgba8 = PremulRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// A pixmap of premultiplied RGBA8 values.
///
/// This is the surface glyphs are drawn onto. Drawing never resizes it;
/// anything outside its bounds is clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in RGBA8 format.
    buf: Vec<PremulRgba8>,
}

impl Pixmap {
    /// Create a new, fully transparent pixmap with the given dimensions in pixels.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![TRANSPARENT; usize::from(width) * usize::from(height)];
        Self { width, height, buf }
    }

    /// Create a new pixmap with the given premultiplied RGBA8 data.
    ///
    /// The `data` vector must be of length `width * height` exactly.
    ///
    /// The pixels are in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the `data` vector is not of length `width * height`.
    pub fn from_parts(data: Vec<PremulRgba8>, width: u16, height: u16) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "Expected `data` to have length of exactly `width * height`"
        );
        Self {
            width,
            height,
            buf: data,
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Replace every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.buf.fill(color.premultiply().to_rgba8());
    }

    /// Returns a reference to the underlying data as premultiplied RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data(&self) -> &[PremulRgba8] {
        &self.buf
    }

    /// Returns a mutable reference to the underlying data as premultiplied RGBA8.
    ///
    /// The pixels are in row-major order.
    pub fn data_mut(&mut self) -> &mut [PremulRgba8] {
        &mut self.buf
    }

    /// Returns a reference to the underlying data as premultiplied RGBA8 bytes.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Sample a pixel from the pixmap.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline(always)]
    pub fn sample(&self, x: u16, y: u16) -> PremulRgba8 {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside a {}x{} pixmap",
            self.width,
            self.height
        );
        self.buf[self.index(x, y)]
    }

    /// Composite `src` onto this pixmap with its top-left corner at `(x, y)`,
    /// using the source-over operator.
    ///
    /// Opaque source pixels replace the destination, translucent ones are
    /// blended by their alpha. Parts of `src` outside the pixmap are dropped.
    pub fn composite_over(&mut self, src: &Self, x: i32, y: i32) {
        let (width, height) = (u32::from(src.width), u32::from(src.height));
        if let Some(src) = PixmapRef::from_bytes(src.data_as_u8_slice(), width, height) {
            self.draw_pixmap(src, x, y);
        }
    }

    /// Source-over `src` with its top-left corner at `(x, y)`.
    pub(crate) fn draw_pixmap(&mut self, src: PixmapRef<'_>, x: i32, y: i32) {
        // tiny-skia builds its destination rect in `i32`, so placements that
        // miss the pixmap must not reach it.
        let (left, top) = (i64::from(x), i64::from(y));
        if left >= i64::from(self.width)
            || top >= i64::from(self.height)
            || left + i64::from(src.width()) <= 0
            || top + i64::from(src.height()) <= 0
        {
            return;
        }
        if let Some(mut target) = self.as_target() {
            target.draw_pixmap(
                x,
                y,
                src,
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Borrow this pixmap as a `tiny-skia` drawing target.
    ///
    /// Returns `None` for empty pixmaps.
    pub(crate) fn as_target(&mut self) -> Option<tiny_skia::PixmapMut<'_>> {
        let (width, height) = (u32::from(self.width), u32::from(self.height));
        tiny_skia::PixmapMut::from_bytes(bytemuck::cast_slice_mut(&mut self.buf), width, height)
    }

    /// Create a pixmap from a PNG file.
    #[cfg(feature = "png")]
    pub fn from_png(data: impl std::io::Read) -> Result<Self, png::DecodingError> {
        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut img_data = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut img_data)?;

        let decoded_data = &img_data[..info.buffer_size()];
        let width = u16::try_from(info.width).map_err(|_| png::DecodingError::LimitsExceeded)?;
        let height = u16::try_from(info.height).map_err(|_| png::DecodingError::LimitsExceeded)?;

        let premultiply = |r, g, b, a| {
            let c = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
            PremulRgba8 {
                r: c.red(),
                g: c.green(),
                b: c.blue(),
                a: c.alpha(),
            }
        };
        let buf: Vec<PremulRgba8> = match info.color_type {
            png::ColorType::Rgba => decoded_data
                .chunks_exact(4)
                .map(|p| premultiply(p[0], p[1], p[2], p[3]))
                .collect(),
            png::ColorType::Rgb => decoded_data
                .chunks_exact(3)
                .map(|p| premultiply(p[0], p[1], p[2], 255))
                .collect(),
            png::ColorType::GrayscaleAlpha => decoded_data
                .chunks_exact(2)
                .map(|p| premultiply(p[0], p[0], p[0], p[1]))
                .collect(),
            png::ColorType::Grayscale => decoded_data
                .iter()
                .map(|&v| premultiply(v, v, v, 255))
                .collect(),
            // EXPAND turns indexed images into RGB(A).
            png::ColorType::Indexed => return Err(png::DecodingError::LimitsExceeded),
        };

        if buf.len() != usize::from(width) * usize::from(height) {
            return Err(png::DecodingError::LimitsExceeded);
        }
        Ok(Self::from_parts(buf, width, height))
    }

    /// Encode the pixmap as a straight-alpha RGBA8 PNG.
    #[cfg(feature = "png")]
    pub fn write_png(&self, out: impl std::io::Write) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(out, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        let data: Vec<u8> = self
            .buf
            .iter()
            .flat_map(|p| unpremultiply(*p))
            .collect();
        writer.write_image_data(&data)?;
        writer.finish()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}

/// Undo premultiplication, returning straight-alpha RGBA8.
///
/// Color channels larger than alpha are clamped to it.
pub(crate) fn unpremultiply(c: PremulRgba8) -> [u8; 4] {
    let clamp = |v: u8| v.min(c.a);
    PremultipliedColorU8::from_rgba(clamp(c.r), clamp(c.g), clamp(c.b), c.a).map_or([0; 4], |c| {
        let c = c.demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    })
}
