/// Identifies the subsystem that holds (or tried to obtain) a pin.
///
/// The set is closed: configuration code refers to these tags by value and
/// the diagnostics layer renders them through [`Owner::label`]. `None` is the
/// "unowned" sentinel and is never stored as a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Owner {
    None,
    /// Debug serial output, usually fixed to the console TX pin.
    DebugOut,
    Ethernet,
    /// Digital (one- or two-wire) LED strip driver.
    BusDigital,
    /// PWM-dimmed LED output.
    BusPwm,
    /// Simple on/off LED output.
    BusOnOff,
    Button,
    IrReceiver,
    Relay,
    /// External SPI RAM, claims the flash-adjacent pins.
    SpiRam,
    DmxOut,
    /// Hardware I2C bus, shared by reference counting.
    HwI2c,
    /// Hardware SPI bus, shared by reference counting.
    HwSpi,
    // Optional plug-in modules.
    ModAudioReactive,
    ModTemperature,
    ModPir,
    ModFourLineDisplay,
    ModRotaryEncoder,
    ModMultiRelay,
    ModStairway,
    ModRgbRotaryEncoder,
    ModQuinLedAnPenta,
    ModBme280,
    ModBh1750,
    ModSdCard,
    ModExample,
    ModUnspecified,
}

impl Owner {
    /// True for the bus classes whose pin sets may be co-held by several
    /// claimants (see the shared-bus claim counters on the manager).
    pub const fn is_shared_bus(self) -> bool {
        matches!(self, Owner::HwI2c | Owner::HwSpi)
    }

    /// Short human-readable name, used by the diagnostics helpers.
    pub const fn label(self) -> &'static str {
        match self {
            Owner::None => "no owner",
            Owner::DebugOut => "debug output",
            Owner::Ethernet => "Ethernet",
            Owner::BusDigital => "LEDs (digital)",
            Owner::BusPwm => "LEDs (PWM)",
            Owner::BusOnOff => "LEDs (on/off)",
            Owner::Button => "button",
            Owner::IrReceiver => "IR receiver",
            Owner::Relay => "relay",
            Owner::SpiRam => "PSRAM",
            Owner::DmxOut => "DMX out",
            Owner::HwI2c => "I2C (hw)",
            Owner::HwSpi => "SPI (hw)",
            Owner::ModAudioReactive => "audio reactive (mod)",
            Owner::ModTemperature => "temperature (mod)",
            Owner::ModPir => "PIR sensor (mod)",
            Owner::ModFourLineDisplay => "4-line display (mod)",
            Owner::ModRotaryEncoder => "rotary encoder (mod)",
            Owner::ModMultiRelay => "multi relay (mod)",
            Owner::ModStairway => "stairway (mod)",
            Owner::ModRgbRotaryEncoder => "RGB rotary encoder (mod)",
            Owner::ModQuinLedAnPenta => "pentacontroller (mod)",
            Owner::ModBme280 => "BME280 (mod)",
            Owner::ModBh1750 => "BH1750 (mod)",
            Owner::ModSdCard => "SD card (mod)",
            Owner::ModExample => "example (mod)",
            Owner::ModUnspecified => "module",
        }
    }
}
