//! Graphics support via embedded-graphics
//!
//! With the `graphics` feature, [`Display`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait, so
//! primitives, fonts and images from the embedded-graphics ecosystem can be
//! drawn straight into the pixel grid.
//!
//! Drawing follows the embedded-graphics contract: pixels that fall outside
//! the matrix are clipped rather than reported. Drawn pixels only reach the
//! LEDs on the next [`Display::show`], which applies gamma correction and
//! the frame bank sequence as usual.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle, Rectangle},
//! };
//! use ledwing::{Color, Config, NamedColor, RgbDisplay};
//! # use ledwing::DisplayInterface;
//! # #[derive(Debug)]
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = ();
//! #     fn write_byte(&mut self, _: u8, _: u8, _: u8) -> Result<(), ()> { Ok(()) }
//! #     fn write_buffer(&mut self, _: u8, _: u8, _: &[u8]) -> Result<(), ()> { Ok(()) }
//! # }
//! let mut display = RgbDisplay::new(Bus, Config::default());
//!
//! let _ = display.clear(Color::BLACK);
//!
//! let _ = Rectangle::new(Point::new(1, 1), Size::new(4, 3))
//!     .into_styled(PrimitiveStyle::with_fill(Color::from(NamedColor::Blue)))
//!     .draw(&mut display);
//!
//! // Runs off the right edge; the overflow is clipped
//! let _ = Line::new(Point::new(0, 5), Point::new(20, 5))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::WHITE, 1))
//!     .draw(&mut display);
//!
//! let _ = display.show();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::{Pixel as GraphicsPixel, PixelColor},
};

use crate::display::Display;
use crate::grid::Pixel;
use crate::interface::DisplayInterface;

impl<I, P, const COLS: usize, const ROWS: usize> DrawTarget for Display<I, P, COLS, ROWS>
where
    I: DisplayInterface,
    P: Pixel + PixelColor,
{
    type Color = P;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = GraphicsPixel<Self::Color>>,
    {
        for GraphicsPixel(Point { x, y }, color) in pixels {
            // off-matrix pixels are clipped
            let _ = self.grid_mut().set(x, y, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<I, P, const COLS: usize, const ROWS: usize> OriginDimensions for Display<I, P, COLS, ROWS>
where
    I: DisplayInterface,
    P: Pixel,
{
    fn size(&self) -> Size {
        Size::new(COLS as u32, ROWS as u32)
    }
}
