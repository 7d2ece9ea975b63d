//! ESP32-S2. GPIO22 to GPIO25 are not bonded out, GPIO26 to GPIO32 carry
//! the SPI flash, and GPIO46 is an input-only pad.

use pin_manager::{PinRequest, SocCaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp32s2;

impl Esp32s2 {
    /// Canonical hardware I2C pins (SDA, SCL).
    pub const I2C_PINS: [PinRequest; 2] = [PinRequest::output(8), PinRequest::output(9)];

    /// Canonical hardware SPI pins (SCLK, MOSI, MISO).
    pub const SPI_PINS: [PinRequest; 3] = [
        PinRequest::output(36),
        PinRequest::output(35),
        PinRequest::input(37),
    ];
}

impl SocCaps for Esp32s2 {
    const PIN_COUNT: u8 = 47;
    const LEDC_CHANNELS: u8 = 8;

    fn is_usable(&self, pin: u8, output: bool) -> bool {
        if pin >= Self::PIN_COUNT {
            return false;
        }
        match pin {
            // Not bonded out plus SPI flash.
            22..=32 => false,
            // Input-only pad.
            46 => !output,
            _ => true,
        }
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            26..=32 => Some("SPI flash"),
            39..=42 => Some("USB-JTAG"),
            43 | 44 => Some("serial console"),
            46 => Some("pulled down, input only"),
            _ => None,
        }
    }
}
