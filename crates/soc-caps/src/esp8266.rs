//! ESP8266. Seventeen pins, no LEDC peripheral; PWM is done in software
//! elsewhere, so the channel pool is empty. GPIO6 to GPIO11 carry the
//! SPI flash.

use pin_manager::{PinRequest, SocCaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp8266;

impl Esp8266 {
    /// Canonical hardware I2C pins (SDA, SCL).
    pub const I2C_PINS: [PinRequest; 2] = [PinRequest::output(4), PinRequest::output(5)];

    /// Canonical hardware SPI pins (SCLK, MOSI, MISO).
    pub const SPI_PINS: [PinRequest; 3] = [
        PinRequest::output(14),
        PinRequest::output(13),
        PinRequest::input(12),
    ];
}

impl SocCaps for Esp8266 {
    const PIN_COUNT: u8 = 17;
    const LEDC_CHANNELS: u8 = 0;

    fn is_usable(&self, pin: u8, _output: bool) -> bool {
        if pin >= Self::PIN_COUNT {
            return false;
        }
        // SPI flash.
        !matches!(pin, 6..=11)
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            1 | 3 => Some("serial console"),
            6..=11 => Some("SPI flash"),
            // A0, addressed as GPIO17.
            17 => Some("analog in"),
            _ => None,
        }
    }
}
