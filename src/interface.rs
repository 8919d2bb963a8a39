//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for talking to the matrix controller over I2C.
//!
//! The driver only ever needs two primitives: a single register write and a
//! bulk write starting at a register. Both are blocking and report bus
//! failures through their `Result`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use ledwing::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockI2c);
//!
//! // Select the configuration bank
//! let _ = interface.write_byte(0x74, 0xFD, 0x0B);
//!
//! // Write pixel data
//! let _ = interface.write_buffer(0x74, 0x24, &[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the register transport to the matrix controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// write registers.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for other buses or to record traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write one byte to `register` on the device at `address`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_byte(&mut self, address: u8, register: u8, value: u8)
    -> InterfaceResult<(), Self::Error>;

    /// Write `data` to consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_buffer(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error>;
}

/// I2C implementation of [`DisplayInterface`]
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
///
/// ## Example
///
/// ```rust,no_run
/// use ledwing::{Config, Interface, RgbDisplay};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = Interface::new(MockI2c);
///
/// // Use with Display
/// let _display = RgbDisplay::new(interface, Config::default());
/// ```
#[derive(Debug)]
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn write_byte(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(address, &[register, value])
    }

    fn write_buffer(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes go out back to back, without a repeated start
        self.i2c.transaction(
            address,
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
    }
}
