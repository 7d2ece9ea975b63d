use crate::owner::Owner;

/// Errors that can occur during pin operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin is out of range, or reserved on this chip for the requested
    /// direction.
    NotUsable { pin: u8 },
    /// Pin is already allocated and the holder does not permit re-claim.
    Owned { pin: u8, holder: Owner },
    /// Release denied: the pin belongs to a different owner.
    NotOwner { pin: u8, holder: Owner },
}

impl PinError {
    /// The pin the operation failed on.
    pub const fn pin(self) -> u8 {
        match self {
            PinError::NotUsable { pin }
            | PinError::Owned { pin, .. }
            | PinError::NotOwner { pin, .. } => pin,
        }
    }
}
