//! Register map defaults
//!
//! The controller exposes several memory banks behind a single register
//! window. Writing a bank number to [`BANK_SELECT`] switches which bank the
//! following register writes land in:
//!
//! - Frame banks ([`FRAME_BANKS`]) hold pixel data starting at [`COLOR_DATA`].
//!   A 12x6 RGB frame is 216 bytes, so the controller's color region must
//!   span registers 0x24 through 0xFB, ending below [`BANK_SELECT`].
//! - The configuration bank ([`CONFIG_BANK`]) holds control registers,
//!   including [`FRAME_SELECT`] which picks the frame shown on the LEDs.
//!
//! Every value here is only a default; see [`Builder`](crate::Builder) to
//! override them for a different board.
//!
//! ## Update Sequence
//!
//! A frame update is always the same four writes:
//!
//! 1. `BANK_SELECT <- hidden frame bank`
//! 2. `COLOR_DATA.. <- gamma corrected pixels`
//! 3. `BANK_SELECT <- CONFIG_BANK`
//! 4. `FRAME_SELECT <- hidden frame bank`

/// Default 7-bit I2C address (0x74)
pub const DEFAULT_ADDRESS: u8 = 0x74;

/// Bank select register (0xFD)
///
/// Always reachable regardless of the current bank.
pub const BANK_SELECT: u8 = 0xFD;

/// Configuration bank number (0x0B)
pub const CONFIG_BANK: u8 = 0x0B;

/// Frame select register in the configuration bank (0x01)
///
/// Takes the number of the frame to display.
pub const FRAME_SELECT: u8 = 0x01;

/// First pixel data register in a frame bank (0x24)
pub const COLOR_DATA: u8 = 0x24;

/// Bank numbers for frame 0 and frame 1
pub const FRAME_BANKS: [u8; 2] = [0x00, 0x01];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::grid::{Brightness, PixelGrid};

    #[test]
    fn test_frames_end_below_bank_select() {
        let rgb_last = COLOR_DATA as usize + PixelGrid::<Color, 12, 6>::FRAME_LEN - 1;
        assert_eq!(rgb_last, 0xFB);
        assert!(rgb_last < BANK_SELECT as usize);

        let mono_last = COLOR_DATA as usize + PixelGrid::<Brightness, 17, 7>::FRAME_LEN - 1;
        assert!(mono_last < BANK_SELECT as usize);
    }
}
