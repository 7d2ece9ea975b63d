//! Classic ESP32.
//!
//! Forty addressable pins, of which a handful are not bonded out on the
//! common packages, GPIO6 to GPIO11 carry the SPI flash, and GPIO34 to
//! GPIO39 are input-only pads.

use pin_manager::{PinRequest, SocCaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp32;

impl Esp32 {
    /// Canonical hardware I2C pins (SDA, SCL).
    pub const I2C_PINS: [PinRequest; 2] = [PinRequest::output(21), PinRequest::output(22)];

    /// Canonical hardware SPI pins (SCLK, MOSI, MISO).
    pub const SPI_PINS: [PinRequest; 3] = [
        PinRequest::output(18),
        PinRequest::output(23),
        PinRequest::input(19),
    ];
}

impl SocCaps for Esp32 {
    const PIN_COUNT: u8 = 40;
    const LEDC_CHANNELS: u8 = 16;

    fn is_usable(&self, pin: u8, output: bool) -> bool {
        if pin >= Self::PIN_COUNT {
            return false;
        }
        match pin {
            // Not bonded out.
            20 | 24 | 28..=31 => false,
            // SPI flash.
            6..=11 => false,
            // Input-only pads.
            34..=39 => !output,
            _ => true,
        }
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            1 | 3 => Some("serial console"),
            6..=11 => Some("SPI flash"),
            // Used by PSRAM on rev1 boards.
            16 | 17 => Some("PSRAM"),
            _ => None,
        }
    }
}
