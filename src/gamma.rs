//! Gamma correction for LED brightness
//!
//! LEDs respond linearly to PWM duty cycle but the eye does not, so a
//! linear ramp of intensities looks washed out at the top and jumpy at the
//! bottom. [`GammaTable`] remaps each byte of the frame just before it is
//! sent to the controller.
//!
//! ## Example
//!
//! ```
//! use ledwing::GammaTable;
//!
//! let gamma = GammaTable::DEFAULT;
//! assert_eq!(gamma.correct(0), 0);
//! assert_eq!(gamma.correct(255), 255);
//! assert!(gamma.correct(128) < 128);
//!
//! let mut frame = [0u8, 128, 255];
//! GammaTable::LINEAR.apply(&mut frame);
//! assert_eq!(frame, [0, 128, 255]);
//! ```

/// Number of entries in a gamma table, one per input byte
pub const GAMMA_TABLE_SIZE: usize = 256;

/// Gamma 2.8 curve: `round(255 * (i / 255) ^ 2.8)`
const GAMMA_2_8: [u8; GAMMA_TABLE_SIZE] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5,
    5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10,
    10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16,
    17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25,
    25, 26, 27, 27, 28, 29, 29, 30, 31, 32, 32, 33, 34, 35, 35, 36,
    37, 38, 39, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 50,
    51, 52, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 66, 67, 68,
    69, 70, 72, 73, 74, 75, 77, 78, 79, 81, 82, 83, 85, 86, 87, 89,
    90, 92, 93, 95, 96, 98, 99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// A 256-entry intensity lookup table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GammaTable([u8; GAMMA_TABLE_SIZE]);

impl GammaTable {
    /// Perceptual correction used unless configured otherwise
    pub const DEFAULT: Self = Self(GAMMA_2_8);

    /// Identity mapping, no correction
    pub const LINEAR: Self = Self::linear();

    /// Wrap a custom lookup table
    pub const fn new(table: [u8; GAMMA_TABLE_SIZE]) -> Self {
        Self(table)
    }

    const fn linear() -> Self {
        let mut table = [0u8; GAMMA_TABLE_SIZE];
        let mut i = 0;
        while i < GAMMA_TABLE_SIZE {
            table[i] = i as u8;
            i += 1;
        }
        Self(table)
    }

    /// Corrected output for a linear intensity
    #[inline]
    pub const fn correct(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Correct every byte of `buffer` in place
    pub fn apply(&self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            *byte = self.correct(*byte);
        }
    }

    /// The raw table
    pub fn as_bytes(&self) -> &[u8; GAMMA_TABLE_SIZE] {
        &self.0
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
