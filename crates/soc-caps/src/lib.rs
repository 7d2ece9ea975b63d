//! Pin validity profiles for the supported SoC variants.
//!
//! Each chip gets a unit-struct profile implementing
//! [`pin_manager::SocCaps`] from const tables, together with its canonical
//! hardware I2C and SPI pin sets. Firmware builds pick their chip through a
//! cargo feature, which routes [`DefaultSoc`]; host code and tests name the
//! profiles directly.

#![no_std]

pub mod esp32;
pub mod esp32c3;
pub mod esp32s2;
pub mod esp32s3;
pub mod esp8266;

pub use esp32::Esp32;
pub use esp32c3::Esp32c3;
pub use esp32s2::Esp32s2;
pub use esp32s3::Esp32s3;
pub use esp8266::Esp8266;

const _ENABLED_SOCS: u32 = 0
    + if cfg!(feature = "esp32") { 1 } else { 0 }
    + if cfg!(feature = "esp32s2") { 1 } else { 0 }
    + if cfg!(feature = "esp32s3") { 1 } else { 0 }
    + if cfg!(feature = "esp32c3") { 1 } else { 0 }
    + if cfg!(feature = "esp8266") { 1 } else { 0 };
const _: () = if _ENABLED_SOCS > 1 {
    panic!("At most one SoC feature may be enabled.");
};

cfg_if::cfg_if! {
    if #[cfg(feature = "esp32")] {
        pub use esp32::Esp32 as DefaultSoc;
    }
    else if #[cfg(feature = "esp32s2")] {
        pub use esp32s2::Esp32s2 as DefaultSoc;
    }
    else if #[cfg(feature = "esp32s3")] {
        pub use esp32s3::Esp32s3 as DefaultSoc;
    }
    else if #[cfg(feature = "esp32c3")] {
        pub use esp32c3::Esp32c3 as DefaultSoc;
    }
    else if #[cfg(feature = "esp8266")] {
        pub use esp8266::Esp8266 as DefaultSoc;
    } else {
        // Without a chip feature, assume the classic ESP32.
        pub use esp32::Esp32 as DefaultSoc;
    }
}
