//! Packed RGB colors and the integer HSL conversion
//!
//! This module defines the [`Color`] type used by RGB matrix wings, the
//! free functions that pack and unpack it, the fixed-point [`hsl`]
//! conversion, and the [`NamedColor`] palette.
//!
//! ## Color Representation
//!
//! A color is a 24-bit integer holding one byte per channel:
//!
//! | Bits    | Channel |
//! |---------|---------|
//! | 23..16  | Red     |
//! | 15..8   | Green   |
//! | 7..0    | Blue    |
//!
//! Packing never fails. Each channel is masked to its low byte, so values
//! outside `0..=255` wrap the same way a hardware register would.
//!
//! ## Example
//!
//! ```
//! use ledwing::{Color, NamedColor, color::hsl};
//!
//! let orange = Color::rgb(255, 165, 0);
//! assert_eq!(orange, NamedColor::Orange.color());
//! assert_eq!(orange.packed(), 0xFFA500);
//!
//! // 256 wraps to 0, -1 wraps to 255
//! assert_eq!(Color::rgb(256, 0, -1).packed(), 0x0000FF);
//!
//! let red = hsl(0, 99, 50);
//! assert!(red.red() > 0xF0 && red.green() < 0x08 && red.blue() < 0x08);
//! ```

/// A packed 24-bit RGB color
///
/// Black is the default value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// All channels off
    pub const BLACK: Self = Self(0x000000);
    /// All channels full
    pub const WHITE: Self = Self(0xFFFFFF);

    /// Build a color from red, green and blue channels
    ///
    /// Each channel is masked to 8 bits before packing.
    pub const fn rgb(red: i32, green: i32, blue: i32) -> Self {
        pack_rgb(red, green, blue)
    }

    /// Build a color from an already packed value
    ///
    /// Bits above the 24-bit color range are discarded.
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// The packed 24-bit value
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        unpack_red(self)
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        unpack_green(self)
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        unpack_blue(self)
    }

    /// Channels in wire order (red, green, blue)
    pub const fn channels(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.packed()
    }
}

/// Pack three channels into a [`Color`], keeping only the low byte of each
pub const fn pack_rgb(red: i32, green: i32, blue: i32) -> Color {
    Color((((red & 0xFF) as u32) << 16) | (((green & 0xFF) as u32) << 8) | ((blue & 0xFF) as u32))
}

/// Extract the red channel
pub const fn unpack_red(color: Color) -> u8 {
    ((color.0 >> 16) & 0xFF) as u8
}

/// Extract the green channel
pub const fn unpack_green(color: Color) -> u8 {
    ((color.0 >> 8) & 0xFF) as u8
}

/// Extract the blue channel
pub const fn unpack_blue(color: Color) -> u8 {
    (color.0 & 0xFF) as u8
}

/// Highest accepted saturation and luminosity
pub const HSL_MAX: i32 = 99;

/// Convert hue, saturation and luminosity into a [`Color`]
///
/// Integer-only conversion with channels scaled to 0..=255.
///
/// * `h` - hue in degrees, wrapped into `0..360` (negative hues wrap too)
/// * `s` - saturation, clamped to `0..=99`
/// * `l` - luminosity, clamped to `0..=99`
///
/// No input is rejected.
///
/// ```
/// use ledwing::color::hsl;
///
/// assert_eq!(hsl(360, 99, 50), hsl(0, 99, 50));
/// assert_eq!(hsl(-120, 99, 50), hsl(240, 99, 50));
/// assert_eq!(hsl(75, 40, 0).packed(), 0);
/// ```
#[allow(clippy::many_single_char_names)]
pub const fn hsl(h: i32, s: i32, l: i32) -> Color {
    let h = h.rem_euclid(360);
    let s = clamp(s, 0, HSL_MAX);
    let l = clamp(l, 0, HSL_MAX);

    // chroma, 0..=255
    let c = ((100 - (2 * l - 100).abs()) * s * 256) / 10_000;
    // sector 0..=5 and position inside it, 0..=255
    let h1 = h / 60;
    let h2 = (h - h1 * 60) * 256 / 60;
    let temp = ((h1 % 2) * 256 + h2 - 256).abs();
    // second largest component
    let x = (c * (256 - temp)) >> 8;

    let (r, g, b) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let m = ((l * 2 * 256 / 100) - c) / 2;
    pack_rgb(r + m, g + m, b + m)
}

const fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Well known colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum NamedColor {
    /// `#FF0000`
    Red = 0xFF0000,
    /// `#FFA500`
    Orange = 0xFFA500,
    /// `#FFFF00`
    Yellow = 0xFFFF00,
    /// `#00FF00`
    Green = 0x00FF00,
    /// `#0000FF`
    Blue = 0x0000FF,
    /// `#4B0082`
    Indigo = 0x4B0082,
    /// `#8A2BE2`
    Violet = 0x8A2BE2,
    /// `#FF00FF`
    Purple = 0xFF00FF,
    /// `#FFFFFF`
    White = 0xFFFFFF,
    /// `#000000`
    Black = 0x000000,
}

impl NamedColor {
    /// Every named color, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// The packed color for this name
    pub const fn color(self) -> Color {
        Color(self as u32)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        named.color()
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU24;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb888> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb888) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::rgb(color.r() as i32, color.g() as i32, color.b() as i32)
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb888 {
    fn from(color: Color) -> Self {
        Self::new(color.red(), color.green(), color.blue())
    }
}
