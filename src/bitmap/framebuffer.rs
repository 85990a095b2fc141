use crate::bitmap::BresenhamLine;
use crate::errors::GameSenseError;
use crate::screen::ScreenDeviceType;

/// Packed 1-bit-per-pixel monochrome bitmap with fixed dimensions.
///
/// The byte length is always `ceil(width / 8) * height`. Trailing bits of a row
/// (when the width is not a multiple of 8) are padding and never set.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Bytes per row.
    stride: usize,
    bits: Vec<u8>,
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bits.len())
            .finish()
    }
}

impl Framebuffer {
    /// Creates an all-off bitmap.
    ///
    /// Both dimensions must be non-zero, and the packed buffer must fit in
    /// memory; otherwise `InvalidDimensions` is returned.
    pub fn new(width: u32, height: u32) -> Result<Self, GameSenseError> {
        let invalid = || GameSenseError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let stride = width.div_ceil(8) as usize;
        let len = stride
            .checked_mul(height as usize)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(invalid)?;

        let mut bits = Vec::new();
        bits.try_reserve_exact(len).map_err(|_| invalid())?;
        bits.resize(len, 0);

        Ok(Self { width, height, stride, bits })
    }

    /// Creates an all-off bitmap matching the screen size of `device`.
    pub fn for_device(device: ScreenDeviceType) -> Self {
        let (width, height) = device.dimensions();
        let stride = width.div_ceil(8) as usize;
        Self {
            width,
            height,
            stride,
            bits: vec![0; stride * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes per row, `ceil(width / 8)`.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total byte length of the packed bitmap.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Byte index and bit mask for `(x, y)`, or `OutOfRange`.
    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), GameSenseError> {
        if x >= self.width || y >= self.height {
            return Err(GameSenseError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let index = y as usize * self.stride + (x / 8) as usize;
        let mask = 1u8 << (7 - (x % 8));
        Ok((index, mask))
    }

    fn write(&mut self, index: usize, mask: u8, on: bool) {
        if on {
            self.bits[index] |= mask;
        } else {
            self.bits[index] &= !mask;
        }
    }

    /// Turns a single pixel on or off.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<(), GameSenseError> {
        let (index, mask) = self.locate(x, y)?;
        self.write(index, mask, on);
        Ok(())
    }

    /// Returns whether the pixel at `(x, y)` is on.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<bool, GameSenseError> {
        let (index, mask) = self.locate(x, y)?;
        Ok(self.bits[index] & mask != 0)
    }

    /// Draws a one pixel wide line from `(x1, y1)` to `(x2, y2)`, both ends inclusive.
    ///
    /// Both endpoints must lie inside the bitmap. Every point of the line is
    /// within their bounding box, so the line is either drawn completely or
    /// not at all.
    pub fn draw_line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, on: bool) -> Result<(), GameSenseError> {
        self.locate(x1, y1)?;
        self.locate(x2, y2)?;
        log::trace!("draw_line ({}, {}) -> ({}, {}) on={}", x1, y1, x2, y2, on);

        for (x, y) in BresenhamLine::new(x1, y1, x2, y2) {
            let (index, mask) = self.locate(x, y)?;
            self.write(index, mask, on);
        }
        Ok(())
    }

    /// Fills the rectangle `[x, x + width) x [y, y + height)`.
    ///
    /// The rectangle is not clipped: if any of its pixels falls outside the
    /// bitmap the call fails and nothing is drawn. An empty rectangle is a no-op.
    pub fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32, on: bool) -> Result<(), GameSenseError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        // The far corner is in range only if every other pixel is.
        self.locate(x.saturating_add(width - 1), y.saturating_add(height - 1))?;
        log::trace!("draw_rect ({}, {}) {}x{} on={}", x, y, width, height, on);

        for j in y..y + height {
            for i in x..x + width {
                let (index, mask) = self.locate(i, j)?;
                self.write(index, mask, on);
            }
        }
        Ok(())
    }

    /// Sets every pixel to `on`, leaving row padding bits clear.
    pub fn clear(&mut self, on: bool) {
        if !on {
            self.bits.fill(0);
            return;
        }

        self.bits.fill(0xFF);
        let tail = self.width % 8;
        if tail != 0 {
            let last_mask = 0xFFu8 << (8 - tail);
            for row in self.bits.chunks_mut(self.stride) {
                if let Some(last) = row.last_mut() {
                    *last = last_mask;
                }
            }
        }
    }

    /// Number of pixels currently on.
    pub fn count_set_pixels(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Borrowed view of the packed bytes in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Copy of the packed bytes in storage order, ready to be sent as image data.
    pub fn export_bytes(&self) -> Vec<u8> {
        self.bits.clone()
    }
}
