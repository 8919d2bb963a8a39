//! Core display operations

use log::{debug, trace, warn};

use crate::color::Color;
use crate::config::Config;
use crate::error::Error;
use crate::grid::{Brightness, Pixel, PixelGrid};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Capacity of the transfer buffer built by [`Display::show`]
///
/// `COLS * ROWS * P::CHANNELS` must not exceed this; the check happens at
/// compile time when a display type is created.
pub const FRAME_BUFFER_SIZE: usize = 256;

/// Columns on the RGB wing
pub const RGB_COLS: usize = 12;
/// Rows on the RGB wing
pub const RGB_ROWS: usize = 6;
/// Columns on the brightness wing
pub const BRIGHTNESS_COLS: usize = 17;
/// Rows on the brightness wing
pub const BRIGHTNESS_ROWS: usize = 7;

/// 12x6 RGB matrix
pub type RgbDisplay<I> = Display<I, Color, RGB_COLS, RGB_ROWS>;
/// 17x7 single-channel matrix
pub type BrightnessDisplay<I> = Display<I, Brightness, BRIGHTNESS_COLS, BRIGHTNESS_ROWS>;

/// One register write of the frame update sequence
///
/// [`Display::show`] runs these in [`TransferStep::SEQUENCE`] order and
/// stops at the first failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStep {
    /// Point the register window at the hidden frame bank
    SelectDataBank,
    /// Write the gamma corrected pixels into the hidden frame
    WriteColors,
    /// Point the register window back at the configuration bank
    SelectConfigBank,
    /// Display the frame that was just written
    ShowFrame,
}

impl TransferStep {
    /// Steps in the order they are sent
    pub const SEQUENCE: [Self; 4] = [
        Self::SelectDataBank,
        Self::WriteColors,
        Self::SelectConfigBank,
        Self::ShowFrame,
    ];
}

/// Double-buffered matrix display
///
/// Owns the pixel grid and the index of the frame currently on the LEDs.
/// Drawing only touches the grid; nothing reaches the controller until
/// [`show`](Self::show).
///
/// ## Example
///
/// ```
/// use ledwing::{Color, Config, NamedColor, RgbDisplay, color::hsl};
/// # use ledwing::DisplayInterface;
/// # #[derive(Debug)]
/// # struct Bus;
/// # impl DisplayInterface for Bus {
/// #     type Error = ();
/// #     fn write_byte(&mut self, _: u8, _: u8, _: u8) -> Result<(), ()> { Ok(()) }
/// #     fn write_buffer(&mut self, _: u8, _: u8, _: &[u8]) -> Result<(), ()> { Ok(()) }
/// # }
/// let mut display = RgbDisplay::new(Bus, Config::default());
///
/// display.set_pixel(0, 0, NamedColor::Violet.into()).unwrap();
/// display.set_pixel(11, 5, hsl(200, 99, 50)).unwrap();
/// assert!(display.set_pixel(12, 0, Color::WHITE).is_err());
///
/// assert_eq!(display.active_frame(), 0);
/// display.show().unwrap();
/// assert_eq!(display.active_frame(), 1);
/// ```
pub struct Display<I, P, const COLS: usize, const ROWS: usize>
where
    I: DisplayInterface,
    P: Pixel,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixels waiting to be shown
    grid: PixelGrid<P, COLS, ROWS>,
    /// Frame currently displayed (0 or 1)
    active_frame: u8,
}

impl<I, P, const COLS: usize, const ROWS: usize> Display<I, P, COLS, ROWS>
where
    I: DisplayInterface,
    P: Pixel,
{
    /// Bytes sent to the color data region on every update
    pub const FRAME_LEN: usize = PixelGrid::<P, COLS, ROWS>::FRAME_LEN;

    /// Create a new Display instance
    ///
    /// The grid starts with every pixel off and frame 0 marked as displayed.
    /// Nothing is sent to the controller.
    pub fn new(interface: I, config: Config) -> Self {
        const {
            assert!(
                PixelGrid::<P, COLS, ROWS>::FRAME_LEN <= FRAME_BUFFER_SIZE,
                "frame does not fit the transfer buffer"
            );
        }
        Self {
            interface,
            config,
            grid: PixelGrid::new(),
            active_frame: 0,
        }
    }

    /// Set one pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the coordinates are outside the grid.
    pub fn set_pixel(&mut self, col: i32, row: i32, value: P) -> DisplayResult<I> {
        self.grid.set(col, row, value)?;
        Ok(())
    }

    /// Read back one pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the coordinates are outside the grid.
    pub fn get_pixel(&self, col: i32, row: i32) -> Result<P, Error<I>> {
        Ok(self.grid.get(col, row)?)
    }

    /// Set every pixel to `value`
    pub fn fill(&mut self, value: P) {
        self.grid.fill(value);
    }

    /// Turn every pixel off
    ///
    /// Takes effect on the next [`show`](Self::show).
    pub fn blank(&mut self) {
        self.grid.clear();
    }

    /// Send the grid to the controller and display it
    ///
    /// Writes the gamma corrected grid into the frame bank that is not on
    /// the LEDs, then switches the controller to that frame. On success the
    /// active frame flips, so the next call writes the other bank.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` with the transport error if any write
    /// fails. The remaining writes are skipped and the active frame is left
    /// unchanged, so calling `show` again targets the same bank.
    pub fn show(&mut self) -> DisplayResult<I> {
        let mut frame = [0u8; FRAME_BUFFER_SIZE];
        let len = self.render_frame(&mut frame)?;
        let target = self.active_frame ^ 1;
        let bank = self.config.frame_bank(target);

        debug!("show: writing {len} bytes to frame {target} (bank {bank:#04X})");

        for step in TransferStep::SEQUENCE {
            trace!("show: {step:?}");
            if let Err(e) = self.run_step(step, bank, &frame[..len]) {
                warn!(
                    "show: {step:?} failed, frame {} stays active",
                    self.active_frame
                );
                return Err(Error::Interface(e));
            }
        }

        self.active_frame = target;
        debug!("show: frame {target} active");
        Ok(())
    }

    /// Serialize the grid and apply gamma correction
    ///
    /// This is exactly the payload [`show`](Self::show) writes to the color
    /// data region. Returns the number of bytes used, [`Self::FRAME_LEN`].
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `out` is shorter than
    /// [`Self::FRAME_LEN`].
    pub fn render_frame(&self, out: &mut [u8]) -> Result<usize, Error<I>> {
        let len = self.grid.flatten_into(out)?;
        // after flattening, so each channel is corrected on its own
        self.config.gamma.apply(&mut out[..len]);
        Ok(len)
    }

    fn run_step(&mut self, step: TransferStep, bank: u8, frame: &[u8]) -> Result<(), I::Error> {
        let address = self.config.address;
        match step {
            TransferStep::SelectDataBank => {
                self.interface
                    .write_byte(address, self.config.bank_select_register, bank)
            }
            TransferStep::WriteColors => {
                self.interface
                    .write_buffer(address, self.config.color_data_register, frame)
            }
            TransferStep::SelectConfigBank => self.interface.write_byte(
                address,
                self.config.bank_select_register,
                self.config.config_bank,
            ),
            TransferStep::ShowFrame => {
                self.interface
                    .write_byte(address, self.config.frame_select_register, bank)
            }
        }
    }

    /// Frame currently on the LEDs (0 or 1)
    pub fn active_frame(&self) -> u8 {
        self.active_frame
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        COLS
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        ROWS
    }

    /// The pixel grid
    pub fn grid(&self) -> &PixelGrid<P, COLS, ROWS> {
        &self.grid
    }

    /// The pixel grid, mutably
    pub fn grid_mut(&mut self) -> &mut PixelGrid<P, COLS, ROWS> {
        &mut self.grid
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the display and give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hsl;
    use crate::config::Builder;
    use crate::gamma::GammaTable;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    enum Write {
        Byte {
            address: u8,
            register: u8,
            value: u8,
        },
        Buffer {
            address: u8,
            register: u8,
            data: Vec<u8>,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<Write>,
        /// Zero-based index of the write that should fail
        fail_at: Option<usize>,
        attempts: usize,
    }

    impl MockInterface {
        fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::default()
            }
        }

        fn attempt(&mut self, write: Write) -> Result<(), MockError> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_at == Some(attempt) {
                return Err(MockError);
            }
            self.writes.push(write);
            Ok(())
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), MockError> {
            self.attempt(Write::Byte {
                address,
                register,
                value,
            })
        }

        fn write_buffer(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), MockError> {
            self.attempt(Write::Buffer {
                address,
                register,
                data: data.to_vec(),
            })
        }
    }

    fn linear_config() -> Config {
        Builder::new().gamma(GammaTable::LINEAR).build().unwrap()
    }

    fn test_display(interface: MockInterface) -> RgbDisplay<MockInterface> {
        RgbDisplay::new(interface, linear_config())
    }

    fn expected_sequence(bank: u8, data: Vec<u8>) -> Vec<Write> {
        alloc::vec![
            Write::Byte {
                address: 0x74,
                register: 0xFD,
                value: bank
            },
            Write::Buffer {
                address: 0x74,
                register: 0x24,
                data
            },
            Write::Byte {
                address: 0x74,
                register: 0xFD,
                value: 0x0B
            },
            Write::Byte {
                address: 0x74,
                register: 0x01,
                value: bank
            },
        ]
    }

    #[test]
    fn test_new_display_is_blank_on_frame_zero() {
        let display = test_display(MockInterface::default());
        assert_eq!(display.active_frame(), 0);
        assert_eq!(display.cols(), 12);
        assert_eq!(display.rows(), 6);
        assert_eq!(display.get_pixel(0, 0).unwrap(), Color::BLACK);
        assert!(display.interface.writes.is_empty());
    }

    #[test]
    fn test_show_writes_hidden_bank_then_commits() {
        let mut display = test_display(MockInterface::default());
        display.set_pixel(0, 0, Color::rgb(1, 2, 3)).unwrap();

        display.show().unwrap();

        let mut data = alloc::vec![0u8; 216];
        data[..3].copy_from_slice(&[1, 2, 3]);
        assert_eq!(display.interface.writes, expected_sequence(1, data));
        assert_eq!(display.active_frame(), 1);
    }

    #[test]
    fn test_show_alternates_banks() {
        let mut display = test_display(MockInterface::default());
        display.show().unwrap();
        display.show().unwrap();
        display.show().unwrap();

        let banks: Vec<u8> = display
            .interface
            .writes
            .iter()
            .filter_map(|write| match write {
                Write::Byte {
                    register: 0x01,
                    value,
                    ..
                } => Some(*value),
                _ => None,
            })
            .collect();
        assert_eq!(banks, [1, 0, 1]);
        assert_eq!(display.active_frame(), 1);
    }

    #[test]
    fn test_failure_at_each_step_keeps_active_frame() {
        for (index, step) in TransferStep::SEQUENCE.iter().enumerate() {
            let mut display = test_display(MockInterface::failing_at(index));
            let result = display.show();

            assert!(
                matches!(result, Err(Error::Interface(MockError))),
                "{step:?} failure not reported"
            );
            assert_eq!(display.active_frame(), 0, "{step:?} flipped the frame");
            // nothing after the failed write is attempted
            assert_eq!(display.interface.attempts, index + 1);
        }
    }

    #[test]
    fn test_retry_after_failure_targets_same_bank() {
        let mut display = test_display(MockInterface::failing_at(3));
        assert!(display.show().is_err());
        display.show().unwrap();

        let selected: Vec<u8> = display
            .interface
            .writes
            .iter()
            .filter_map(|write| match write {
                Write::Byte {
                    register: 0xFD,
                    value,
                    ..
                } if *value != 0x0B => Some(*value),
                _ => None,
            })
            .collect();
        assert_eq!(selected, [1, 1]);
        assert_eq!(display.active_frame(), 1);
    }

    #[test]
    fn test_gamma_applied_per_channel() {
        let config = Builder::new().build().unwrap();
        let mut display = RgbDisplay::new(MockInterface::default(), config);
        display.set_pixel(0, 0, Color::rgb(128, 64, 255)).unwrap();

        let mut frame = [0u8; FRAME_BUFFER_SIZE];
        let len = display.render_frame(&mut frame).unwrap();
        assert_eq!(len, 216);
        assert_eq!(&frame[..3], &[37, 5, 255]);

        display.show().unwrap();
        match &display.interface.writes[1] {
            Write::Buffer { data, .. } => assert_eq!(&data[..3], &[37, 5, 255]),
            other => panic!("unexpected write {other:?}"),
        }
    }

    #[test]
    fn test_show_uses_configured_registers() {
        let config = Builder::new()
            .address(0x75)
            .bank_select_register(0xFE)
            .color_data_register(0x10)
            .frame_select_register(0x02)
            .config_bank(0x0C)
            .frame_banks([0x04, 0x05])
            .gamma(GammaTable::LINEAR)
            .build()
            .unwrap();
        let mut display = BrightnessDisplay::new(MockInterface::default(), config);
        display.set_pixel(16, 6, Brightness(9)).unwrap();
        display.show().unwrap();

        let mut data = alloc::vec![0u8; 119];
        data[118] = 9;
        assert_eq!(
            display.interface.writes,
            [
                Write::Byte {
                    address: 0x75,
                    register: 0xFE,
                    value: 0x05
                },
                Write::Buffer {
                    address: 0x75,
                    register: 0x10,
                    data
                },
                Write::Byte {
                    address: 0x75,
                    register: 0xFE,
                    value: 0x0C
                },
                Write::Byte {
                    address: 0x75,
                    register: 0x02,
                    value: 0x05
                },
            ]
        );
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut display = test_display(MockInterface::default());
        let result = display.set_pixel(12, 0, Color::WHITE);
        assert!(matches!(
            result,
            Err(Error::OutOfBounds {
                col: 12,
                row: 0,
                cols: 12,
                rows: 6
            })
        ));
        assert!(matches!(
            display.get_pixel(0, -1),
            Err(Error::OutOfBounds { row: -1, .. })
        ));
    }

    #[test]
    fn test_clear_blanks_next_frame() {
        let mut display = test_display(MockInterface::default());
        display.fill(hsl(90, 99, 50));
        assert!(display.grid().iter().all(|(_, _, c)| c == hsl(90, 99, 50)));
        display.blank();

        let mut frame = [0xAAu8; FRAME_BUFFER_SIZE];
        let len = display.render_frame(&mut frame).unwrap();
        assert!(frame[..len].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_render_frame_short_buffer() {
        let display = BrightnessDisplay::new(MockInterface::default(), Config::default());
        let mut frame = [0u8; 64];
        assert!(matches!(
            display.render_frame(&mut frame),
            Err(Error::BufferTooSmall {
                required: 119,
                provided: 64
            })
        ));

        let mut frame = [0u8; 119];
        assert!(matches!(display.render_frame(&mut frame), Ok(119)));
    }

    #[test]
    fn test_frame_lengths() {
        assert_eq!(RgbDisplay::<MockInterface>::FRAME_LEN, 216);
        assert_eq!(BrightnessDisplay::<MockInterface>::FRAME_LEN, 119);
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = test_display(MockInterface::default());
        display.show().unwrap();
        let interface = display.release();
        assert_eq!(interface.writes.len(), 4);
    }
}
