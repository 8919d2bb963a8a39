//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`OutOfBounds`] - Pixel access outside the grid
//! - [`BufferTooSmall`] - Output buffer shorter than a serialized frame
//!
//! Color conversion has no error type: every RGB and HSL input maps to a
//! color by masking, clamping or wrapping.
//!
//! ## Example
//!
//! ```
//! use ledwing::{Builder, BuilderError};
//!
//! // Address does not fit in 7 bits
//! let result = Builder::new().address(0x80).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
//!
//! // Both frames in the same bank
//! let result = Builder::new().frame_banks([1, 1]).build();
//! assert!(result.is_err());
//! ```

pub use crate::grid::{BufferTooSmall, OutOfBounds};
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error
    ///
    /// The transport rejected a write. Passed through from the
    /// [`DisplayInterface`] implementation unchanged.
    Interface(I::Error),
    /// Pixel coordinates outside the grid
    OutOfBounds {
        /// Requested column
        col: i32,
        /// Requested row
        row: i32,
        /// Grid width
        cols: usize,
        /// Grid height
        rows: usize,
    },
    /// Buffer too small for a serialized frame
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> From<OutOfBounds> for Error<I> {
    fn from(err: OutOfBounds) -> Self {
        Self::OutOfBounds {
            col: err.col,
            row: err.row,
            cols: err.cols,
            rows: err.rows,
        }
    }
}

impl<I: DisplayInterface> From<BufferTooSmall> for Error<I> {
    fn from(err: BufferTooSmall) -> Self {
        Self::BufferTooSmall {
            required: err.required,
            provided: err.provided,
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::OutOfBounds {
                col,
                row,
                cols,
                rows,
            } => write!(f, "Pixel ({col}, {row}) outside {cols}x{rows} grid"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Bus address does not fit in 7 bits
    InvalidAddress(u8),
    /// A bank is used for more than one purpose
    ///
    /// The two frame banks must differ from each other and from the
    /// configuration bank.
    BankConflict {
        /// The bank assigned twice
        bank: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(address) => {
                write!(f, "Invalid address {address:#04X} (max 0x7F)")
            }
            Self::BankConflict { bank } => write!(f, "Bank {bank:#04X} assigned twice"),
        }
    }
}

impl core::error::Error for BuilderError {}
