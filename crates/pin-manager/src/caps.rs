/// "No pin requested". Accepted by every allocate/release operation as a
/// successful no-op, so configuration arrays can carry unused slots.
pub const NO_PIN: u8 = 0xFF;

/// Size of the per-pin tables. No supported SoC addresses more GPIOs.
pub const MAX_PINS: usize = 64;

/// Describes what the target SoC allows per pin.
///
/// Implementors provide the chip capacity constants plus a usability
/// predicate that encodes the reserved ranges (flash/PSRAM, USB-JTAG,
/// nonexistent pads) and output capability. The manager consults this and
/// nothing else about the hardware, so the allocation engine itself stays
/// chip-agnostic and host-testable.
pub trait SocCaps {
    /// Number of addressable GPIO indices; pins at or beyond this fail closed.
    const PIN_COUNT: u8;
    /// Size of the PWM (LEDC) channel pool on this chip. Zero means the chip
    /// has no such peripheral and every channel request fails.
    const LEDC_CHANNELS: u8;

    /// Whether `pin` may be used at all, and in the requested direction.
    fn is_usable(&self, pin: u8, output: bool) -> bool;

    /// Informational note for pins with a fixed role (USB-JTAG, serial
    /// console, flash range). Purely diagnostic; reserved pins are rejected
    /// through [`is_usable`](Self::is_usable), not through this.
    fn special_role(&self, pin: u8) -> Option<&'static str> {
        let _ = pin;
        None
    }
}

/// One entry of a batch request: the pin plus its intended direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRequest {
    pub pin: u8,
    pub output: bool,
}

impl PinRequest {
    pub const fn output(pin: u8) -> Self {
        Self { pin, output: true }
    }

    pub const fn input(pin: u8) -> Self {
        Self { pin, output: false }
    }

    /// An intentionally absent entry ([`NO_PIN`]).
    pub const fn none() -> Self {
        Self { pin: NO_PIN, output: false }
    }

    /// Maps a signed config value to a request; negatives mean "unused".
    pub const fn from_config(value: i8, output: bool) -> Self {
        if value < 0 {
            Self { pin: NO_PIN, output }
        } else {
            Self { pin: value as u8, output }
        }
    }
}
