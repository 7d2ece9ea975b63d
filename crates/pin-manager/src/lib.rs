#![no_std]
//! GPIO and PWM-channel ownership arbitration for LED controller firmware.
//!
//! Many independent subsystems claim pins at configuration time: LED buses,
//! buttons, relays, IR receivers, the hardware I2C/SPI buses, optional
//! plug-in modules. [`PinManager`] guarantees no two of them end up on the
//! same physical line, lets the shared buses co-register their pin pairs
//! through claim counting, keeps a per-pin record of failed claims for the
//! settings UI, and hands out contiguous runs of LEDC channels for PWM
//! output. What the chip itself permits per pin is injected through a
//! [`SocCaps`] profile, so the engine runs unchanged on the host.

mod caps;
mod error;
mod event;
mod ledc;
mod manager;
mod owner;

pub mod diag;

pub use caps::{PinRequest, SocCaps, MAX_PINS, NO_PIN};
pub use error::PinError;
#[cfg(feature = "defmt")]
pub use event::DefmtSink;
pub use event::{EventSink, NullSink, PinEvent};
pub use ledc::{LedcPool, MAX_LEDC_CHANNELS};
pub use manager::PinManager;
pub use owner::Owner;
