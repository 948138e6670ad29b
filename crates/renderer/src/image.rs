//! Output pixel buffers and the raw-window to display coordinate transform.

/// Pixel layout of a [`RenderedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 1 byte per pixel
    Gray8,
    /// 3 bytes per pixel, R G B
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// A finished image, row-major, row 0 = northernmost row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    width: usize,
    height: usize,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl RenderedImage {
    /// Black image of the given size.
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; width * height * format.bytes_per_pixel()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Bytes of one display row.
    pub fn row_stride(&self) -> usize {
        self.width * self.format.bytes_per_pixel()
    }

    /// The bytes of the pixel at display position (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let bpp = self.format.bytes_per_pixel();
        let start = y * self.row_stride() + x * bpp;
        &self.pixels[start..start + bpp]
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte index of the first channel of the pixel showing raw window
    /// sample (`raw_row`, `col`).
    #[inline]
    pub fn raw_index(&self, raw_row: usize, col: usize) -> usize {
        display_row(raw_row, self.height) * self.row_stride() + col * self.format.bytes_per_pixel()
    }
}

/// Display row of raw window row `raw_row`.
///
/// Sample windows are stored south to north, images are shown north to
/// south. Both the encoder and the relief overlay place pixels through this
/// function.
#[inline]
pub fn display_row(raw_row: usize, height: usize) -> usize {
    height - 1 - raw_row
}
