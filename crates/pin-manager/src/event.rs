use crate::error::PinError;
use crate::owner::Owner;

/// What happened during an allocate/release operation.
///
/// Events are emitted synchronously from inside the operation, one per pin,
/// so a sink sees them in table order. Queries emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinEvent {
    Allocated { pin: u8, owner: Owner },
    Released { pin: u8, owner: Owner },
    /// The chip does not allow this pin for the requested use.
    Unusable { pin: u8, requested: Owner },
    /// An allocate or release clashed with the current holder.
    Conflict { pin: u8, holder: Owner, requested: Owner },
}

impl PinEvent {
    /// The error a failure event corresponds to, `None` for successes.
    pub const fn as_error(self) -> Option<PinError> {
        match self {
            PinEvent::Unusable { pin, .. } => Some(PinError::NotUsable { pin }),
            PinEvent::Conflict { pin, holder, .. } => {
                Some(PinError::Owned { pin, holder })
            }
            _ => None,
        }
    }
}

/// Receives pin events from a manager.
pub trait EventSink {
    fn on_event(&mut self, event: PinEvent);
}

/// Discards every event. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: PinEvent) {}
}

/// Forwards events to defmt: successes at debug level, failures as warnings.
#[cfg(feature = "defmt")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl EventSink for DefmtSink {
    fn on_event(&mut self, event: PinEvent) {
        match event {
            PinEvent::Allocated { pin, owner } => {
                defmt::debug!("pin {} allocated by {}", pin, owner);
            }
            PinEvent::Released { pin, owner } => {
                defmt::debug!("pin {} released by {}", pin, owner);
            }
            PinEvent::Unusable { pin, requested } => {
                defmt::warn!("pin {} not usable, requested by {}", pin, requested);
            }
            PinEvent::Conflict { pin, holder, requested } => {
                defmt::warn!(
                    "pin {} held by {}, requested by {}",
                    pin,
                    holder,
                    requested
                );
            }
        }
    }
}
