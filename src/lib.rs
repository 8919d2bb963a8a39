//! LED Matrix Wing Driver
//!
//! A driver for small I2C LED matrices that keep two frames in controller
//! memory: a 12x6 RGB wing and a 17x7 single-channel brightness wing.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Integer-only RGB and HSL color conversion
//! - Gamma corrected, tear-free double-buffered updates
//! - Configurable register map
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ledwing::{Builder, Interface, NamedColor, RgbDisplay, color::hsl};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = Interface::new(i2c);
//! let config = match Builder::new().address(0x74).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = RgbDisplay::new(interface, config);
//! for col in 0..12 {
//!     let _ = display.set_pixel(col, 0, hsl(col * 30, 99, 50));
//! }
//! let _ = display.set_pixel(0, 5, NamedColor::Orange.into());
//! let _ = display.show();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Packed RGB colors, HSL conversion and named colors
pub mod color;
/// Register map defaults
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Double-buffered display driver
pub mod display;
/// Error types for the driver
pub mod error;
/// Gamma correction tables
pub mod gamma;
/// Fixed-size pixel storage
pub mod grid;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{Color, NamedColor};
pub use config::{Builder, Config, MAX_ADDRESS};
pub use display::{
    BRIGHTNESS_COLS, BRIGHTNESS_ROWS, BrightnessDisplay, Display, FRAME_BUFFER_SIZE, RGB_COLS,
    RGB_ROWS, RgbDisplay, TransferStep,
};
pub use error::{BufferTooSmall, BuilderError, Error, OutOfBounds};
pub use gamma::GammaTable;
pub use grid::{Brightness, Pixel, PixelGrid};
pub use interface::{DisplayInterface, Interface};
