//! Fixed-size pixel storage
//!
//! [`PixelGrid`] is the in-memory image that [`Display::show`](crate::Display::show)
//! sends to the controller. It is generic over the value stored per cell:
//!
//! - [`Color`] for RGB wings (three wire bytes per pixel)
//! - [`Brightness`] for single-channel wings (one wire byte per pixel)
//!
//! Coordinates are zero-based `(col, row)`. Accessing a cell outside the
//! grid returns [`OutOfBounds`] instead of clamping or wrapping.
//!
//! ## Example
//!
//! ```
//! use ledwing::{Color, PixelGrid};
//!
//! let mut grid: PixelGrid<Color, 12, 6> = PixelGrid::new();
//! grid.set(11, 5, Color::WHITE).unwrap();
//! assert_eq!(grid.get(11, 5), Ok(Color::WHITE));
//! assert!(grid.set(12, 0, Color::WHITE).is_err());
//! ```

use crate::color::Color;

/// A value that can be stored in a [`PixelGrid`] and serialized to the wire
pub trait Pixel: Copy + PartialEq + core::fmt::Debug {
    /// Bytes written to the controller per pixel
    const CHANNELS: usize;
    /// Value of a cell that was never written
    const OFF: Self;

    /// Write this pixel's bytes into `out`, which is exactly `CHANNELS` long
    fn write_channels(self, out: &mut [u8]);
}

impl Pixel for Color {
    const CHANNELS: usize = 3;
    const OFF: Self = Color::BLACK;

    fn write_channels(self, out: &mut [u8]) {
        out.copy_from_slice(&self.channels());
    }
}

/// Single-channel LED intensity, 0 (off) to 255 (full)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(pub u8);

impl Brightness {
    /// LED off
    pub const OFF: Self = Self(0);
    /// Full intensity
    pub const FULL: Self = Self(0xFF);
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

impl Pixel for Brightness {
    const CHANNELS: usize = 1;
    const OFF: Self = Brightness::OFF;

    fn write_channels(self, out: &mut [u8]) {
        out[0] = self.0;
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Brightness {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Gray8> for Brightness {
    fn from(value: embedded_graphics_core::pixelcolor::Gray8) -> Self {
        use embedded_graphics_core::pixelcolor::GrayColor;
        Self(value.luma())
    }
}

#[cfg(feature = "graphics")]
impl From<Brightness> for embedded_graphics_core::pixelcolor::Gray8 {
    fn from(value: Brightness) -> Self {
        Self::new(value.0)
    }
}

/// Coordinates fell outside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Requested column
    pub col: i32,
    /// Requested row
    pub row: i32,
    /// Grid width
    pub cols: usize,
    /// Grid height
    pub rows: usize,
}

impl core::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Pixel ({}, {}) outside {}x{} grid",
            self.col, self.row, self.cols, self.rows
        )
    }
}

impl core::error::Error for OutOfBounds {}

/// Output buffer cannot hold a serialized frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferTooSmall {
    /// Required buffer size in bytes
    pub required: usize,
    /// Provided buffer size in bytes
    pub provided: usize,
}

impl core::fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Buffer too small: required {} bytes, provided {}",
            self.required, self.provided
        )
    }
}

impl core::error::Error for BufferTooSmall {}

/// A `COLS` x `ROWS` image of `P` values
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid<P: Pixel, const COLS: usize, const ROWS: usize> {
    /// Cells, indexed `[row][col]`
    cells: [[P; COLS]; ROWS],
}

impl<P: Pixel, const COLS: usize, const ROWS: usize> Default for PixelGrid<P, COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pixel, const COLS: usize, const ROWS: usize> PixelGrid<P, COLS, ROWS> {
    /// Length of the serialized frame in bytes
    pub const FRAME_LEN: usize = COLS * ROWS * P::CHANNELS;

    /// Create a grid with every cell off
    pub const fn new() -> Self {
        Self {
            cells: [[P::OFF; COLS]; ROWS],
        }
    }

    /// Grid size as `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (COLS, ROWS)
    }

    /// Write one cell
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `col` or `row` is negative or past the edge.
    pub fn set(&mut self, col: i32, row: i32, value: P) -> Result<(), OutOfBounds> {
        let (c, r) = self.index(col, row)?;
        self.cells[r][c] = value;
        Ok(())
    }

    /// Read one cell
    ///
    /// Cells that were never written read as `P::OFF`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `col` or `row` is negative or past the edge.
    pub fn get(&self, col: i32, row: i32) -> Result<P, OutOfBounds> {
        let (c, r) = self.index(col, row)?;
        Ok(self.cells[r][c])
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: P) {
        for row in self.cells.iter_mut() {
            row.fill(value);
        }
    }

    /// Turn every cell off
    pub fn clear(&mut self) {
        self.fill(P::OFF);
    }

    /// Iterate over `(col, row, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, P)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, value)| (c, r, *value)))
    }

    /// Serialize the grid row-major into `out`
    ///
    /// Returns the number of bytes written, [`Self::FRAME_LEN`]. Bytes past
    /// that are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BufferTooSmall`] if `out` is shorter than `FRAME_LEN`. `out`
    /// is not modified in that case.
    pub fn flatten_into(&self, out: &mut [u8]) -> Result<usize, BufferTooSmall> {
        let len = Self::FRAME_LEN;
        let Some(frame) = out.get_mut(..len) else {
            return Err(BufferTooSmall {
                required: len,
                provided: out.len(),
            });
        };
        let chunks = frame.chunks_exact_mut(P::CHANNELS);
        for (chunk, value) in chunks.zip(self.cells.iter().flat_map(|row| row.iter())) {
            value.write_channels(chunk);
        }
        Ok(len)
    }

    fn index(&self, col: i32, row: i32) -> Result<(usize, usize), OutOfBounds> {
        let out_of_bounds = OutOfBounds {
            col,
            row,
            cols: COLS,
            rows: ROWS,
        };
        let c = usize::try_from(col).map_err(|_| out_of_bounds)?;
        let r = usize::try_from(row).map_err(|_| out_of_bounds)?;
        if c >= COLS || r >= ROWS {
            return Err(out_of_bounds);
        }
        Ok((c, r))
    }
}
