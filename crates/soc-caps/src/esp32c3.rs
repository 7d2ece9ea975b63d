//! ESP32-C3. GPIO12 to GPIO17 carry the SPI flash; GPIO18 and GPIO19
//! serve the USB-CDC bridge.

use pin_manager::{PinRequest, SocCaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp32c3;

impl Esp32c3 {
    /// Canonical hardware I2C pins (SDA, SCL).
    pub const I2C_PINS: [PinRequest; 2] = [PinRequest::output(8), PinRequest::output(9)];

    /// Canonical hardware SPI pins (SCLK, MOSI, MISO).
    pub const SPI_PINS: [PinRequest; 3] = [
        PinRequest::output(4),
        PinRequest::output(6),
        PinRequest::input(5),
    ];
}

impl SocCaps for Esp32c3 {
    const PIN_COUNT: u8 = 22;
    const LEDC_CHANNELS: u8 = 6;

    fn is_usable(&self, pin: u8, _output: bool) -> bool {
        if pin >= Self::PIN_COUNT {
            return false;
        }
        match pin {
            // SPI flash.
            12..=17 => false,
            // USB-CDC bridge.
            18 | 19 => false,
            _ => true,
        }
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            12..=17 => Some("SPI flash"),
            18 | 19 => Some("USB-CDC"),
            20 | 21 => Some("serial console"),
            _ => None,
        }
    }
}
