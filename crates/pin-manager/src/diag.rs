//! Readable views of the allocation state for settings pages and debug
//! consoles. Nothing here feeds back into allocation decisions.

use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::String;

use crate::caps::{SocCaps, NO_PIN};
use crate::event::EventSink;
use crate::manager::PinManager;
use crate::owner::Owner;

/// Capacity of rendered conflict messages.
pub const CONFLICT_TEXT_LEN: usize = 48;

/// Who holds `pin`: the owner label, `"free"`, `"n/a"` for a pin this chip
/// does not offer, empty for the sentinel.
pub fn owner_text<M, C, S>(manager: &PinManager<M, C, S>, pin: u8) -> &'static str
where
    M: RawMutex,
    C: SocCaps,
    S: EventSink,
{
    if pin == NO_PIN {
        return "";
    }
    if !manager.is_usable(pin, false) {
        return "n/a";
    }
    if !manager.is_allocated(pin) {
        return "free";
    }
    manager.owner_of(pin).label()
}

/// The remembered clash for `pin`, rendered; `None` when the slot is clean.
pub fn conflict_text<M, C, S>(
    manager: &PinManager<M, C, S>,
    pin: u8,
) -> Option<String<CONFLICT_TEXT_LEN>>
where
    M: RawMutex,
    C: SocCaps,
    S: EventSink,
{
    let conflict = manager.conflict_of(pin);
    if conflict == Owner::None {
        return None;
    }
    let mut text = String::new();
    write!(&mut text, "pin {} contested by {}", pin, conflict.label()).ok();
    Some(text)
}

/// The profile's fixed-role note for `pin`, empty when there is nothing to
/// say. Reserved pins keep their note even though they are not usable.
pub fn special_text<C: SocCaps>(caps: &C, pin: u8) -> &'static str {
    if pin == NO_PIN {
        return "";
    }
    caps.special_role(pin).unwrap_or("")
}
