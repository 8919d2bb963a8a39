//! Display configuration types and builder

use crate::command::{
    BANK_SELECT, COLOR_DATA, CONFIG_BANK, DEFAULT_ADDRESS, FRAME_BANKS, FRAME_SELECT,
};
pub use crate::error::BuilderError;
use crate::gamma::GammaTable;

/// Largest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Display configuration
///
/// Register map and gamma curve for one controller.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit bus address of the controller
    pub address: u8,
    /// Register that selects the active bank
    pub bank_select_register: u8,
    /// First register of the pixel data region in a frame bank
    pub color_data_register: u8,
    /// Register in the configuration bank that picks the displayed frame
    pub frame_select_register: u8,
    /// Bank number of the configuration bank
    pub config_bank: u8,
    /// Bank numbers for frame 0 and frame 1
    pub frame_banks: [u8; 2],
    /// Curve applied to every byte before it is sent
    pub gamma: GammaTable,
}

impl Config {
    /// Bank number holding `frame` (0 or 1)
    pub fn frame_bank(&self, frame: u8) -> u8 {
        self.frame_banks[usize::from(frame & 1)]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            bank_select_register: BANK_SELECT,
            color_data_register: COLOR_DATA,
            frame_select_register: FRAME_SELECT,
            config_bank: CONFIG_BANK,
            frame_banks: FRAME_BANKS,
            gamma: GammaTable::DEFAULT,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ledwing::{Builder, GammaTable};
///
/// let config = match Builder::new().address(0x75).gamma(GammaTable::LINEAR).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x75);
/// ```
#[must_use]
pub struct Builder {
    config: Config,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit bus address
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set the bank select register
    pub fn bank_select_register(mut self, register: u8) -> Self {
        self.config.bank_select_register = register;
        self
    }

    /// Set the first pixel data register
    pub fn color_data_register(mut self, register: u8) -> Self {
        self.config.color_data_register = register;
        self
    }

    /// Set the frame select register
    pub fn frame_select_register(mut self, register: u8) -> Self {
        self.config.frame_select_register = register;
        self
    }

    /// Set the configuration bank number
    pub fn config_bank(mut self, bank: u8) -> Self {
        self.config.config_bank = bank;
        self
    }

    /// Set the bank numbers used for frame 0 and frame 1
    pub fn frame_banks(mut self, banks: [u8; 2]) -> Self {
        self.config.frame_banks = banks;
        self
    }

    /// Set the gamma curve
    pub fn gamma(mut self, gamma: GammaTable) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidAddress` if the address does not fit in 7 bits
    /// - `BuilderError::BankConflict` if the two frame banks are equal or one
    ///   of them is the configuration bank
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if config.address > MAX_ADDRESS {
            return Err(BuilderError::InvalidAddress(config.address));
        }
        let [front, back] = config.frame_banks;
        if front == back {
            return Err(BuilderError::BankConflict { bank: front });
        }
        if let Some(bank) = config
            .frame_banks
            .into_iter()
            .find(|bank| *bank == config.config_bank)
        {
            return Err(BuilderError::BankConflict { bank });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address, 0x74);
        assert_eq!(config.bank_select_register, 0xFD);
        assert_eq!(config.color_data_register, 0x24);
        assert_eq!(config.frame_select_register, 0x01);
        assert_eq!(config.config_bank, 0x0B);
        assert_eq!(config.frame_banks, [0x00, 0x01]);
        assert_eq!(config.gamma, GammaTable::DEFAULT);
    }

    #[test]
    fn test_overrides() {
        let config = Builder::new()
            .address(0x77)
            .bank_select_register(0xFE)
            .color_data_register(0x10)
            .frame_select_register(0x02)
            .config_bank(0x0C)
            .frame_banks([0x02, 0x03])
            .gamma(GammaTable::LINEAR)
            .build()
            .unwrap();
        assert_eq!(config.address, 0x77);
        assert_eq!(config.bank_select_register, 0xFE);
        assert_eq!(config.color_data_register, 0x10);
        assert_eq!(config.frame_select_register, 0x02);
        assert_eq!(config.config_bank, 0x0C);
        assert_eq!(config.frame_bank(0), 0x02);
        assert_eq!(config.frame_bank(1), 0x03);
        assert_eq!(config.gamma, GammaTable::LINEAR);
    }

    #[test]
    fn test_invalid_address() {
        let result = Builder::new().address(0x80).build();
        assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
    }

    #[test]
    fn test_equal_frame_banks() {
        let result = Builder::new().frame_banks([0x03, 0x03]).build();
        assert!(matches!(result, Err(BuilderError::BankConflict { bank: 0x03 })));
    }

    #[test]
    fn test_frame_bank_overlaps_config_bank() {
        let result = Builder::new().frame_banks([0x00, 0x0B]).build();
        assert!(matches!(result, Err(BuilderError::BankConflict { bank: 0x0B })));
    }
}
