//! ESP32-S3. GPIO19 and GPIO20 serve the USB-JTAG bridge, GPIO22 to
//! GPIO25 are not bonded out, and GPIO26 to GPIO32 carry the SPI flash.

use pin_manager::{PinRequest, SocCaps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp32s3;

impl Esp32s3 {
    /// Canonical hardware I2C pins (SDA, SCL).
    pub const I2C_PINS: [PinRequest; 2] = [PinRequest::output(8), PinRequest::output(9)];

    /// Canonical hardware SPI pins (SCLK, MOSI, MISO).
    pub const SPI_PINS: [PinRequest; 3] = [
        PinRequest::output(12),
        PinRequest::output(11),
        PinRequest::input(13),
    ];
}

impl SocCaps for Esp32s3 {
    const PIN_COUNT: u8 = 49;
    const LEDC_CHANNELS: u8 = 8;

    fn is_usable(&self, pin: u8, _output: bool) -> bool {
        if pin >= Self::PIN_COUNT {
            return false;
        }
        match pin {
            // USB-JTAG bridge.
            19 | 20 => false,
            // Not bonded out plus SPI flash.
            22..=32 => false,
            _ => true,
        }
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            19 | 20 => Some("USB-JTAG"),
            26..=32 => Some("SPI flash"),
            // Used by octal flash or PSRAM when fitted.
            33..=37 => Some("octal flash/PSRAM"),
            43 | 44 => Some("serial console"),
            _ => None,
        }
    }
}
