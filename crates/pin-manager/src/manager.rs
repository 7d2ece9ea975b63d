use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::caps::{PinRequest, SocCaps, MAX_PINS, NO_PIN};
use crate::error::PinError;
use crate::event::{EventSink, NullSink, PinEvent};
use crate::ledc::LedcPool;
use crate::owner::Owner;

fn usable<C: SocCaps>(caps: &C, pin: u8, output: bool) -> bool {
    pin < C::PIN_COUNT && (pin as usize) < MAX_PINS && caps.is_usable(pin, output)
}

/// Claim counters for the shared-bus owner classes.
struct BusClaims {
    i2c: u8,
    spi: u8,
}

impl BusClaims {
    const fn new() -> Self {
        Self { i2c: 0, spi: 0 }
    }

    fn count(&self, owner: Owner) -> u8 {
        match owner {
            Owner::HwI2c => self.i2c,
            Owner::HwSpi => self.spi,
            _ => 0,
        }
    }

    fn add(&mut self, owner: Owner) {
        match owner {
            Owner::HwI2c => self.i2c = self.i2c.saturating_add(1),
            Owner::HwSpi => self.spi = self.spi.saturating_add(1),
            _ => {}
        }
    }

    /// Drops one claim and reports whether claimants remain. A zero count
    /// stays at zero and reports none remaining.
    fn remove(&mut self, owner: Owner) -> bool {
        let slot = match owner {
            Owner::HwI2c => &mut self.i2c,
            Owner::HwSpi => &mut self.spi,
            _ => return false,
        };
        *slot = slot.saturating_sub(1);
        *slot > 0
    }
}

/// Allocation state, kept behind the manager's mutex as one unit so every
/// operation sees and mutates it atomically.
struct Tables<S: EventSink> {
    alloc: u64,
    owners: [Owner; MAX_PINS],
    conflicts: [Owner; MAX_PINS],
    claims: BusClaims,
    ledc: LedcPool,
    sink: S,
}

impl<S: EventSink> Tables<S> {
    const fn new(ledc_channels: u8, sink: S) -> Self {
        Self {
            alloc: 0,
            owners: [Owner::None; MAX_PINS],
            conflicts: [Owner::None; MAX_PINS],
            claims: BusClaims::new(),
            ledc: LedcPool::new(ledc_channels),
            sink,
        }
    }

    // Bit and array accesses below rely on callers having bounds-checked
    // the pin through `usable`.

    fn taken(&self, pin: u8) -> bool {
        self.alloc & (1u64 << pin) != 0
    }

    /// Remembers the most recent owner that failed to get `pin`. `None` is
    /// never stored, and later successes never clear the slot.
    fn note_conflict(&mut self, pin: u8, requested: Owner) {
        if requested != Owner::None && (pin as usize) < MAX_PINS {
            self.conflicts[pin as usize] = requested;
        }
    }

    /// Validity and ownership checks shared by the single and batch claim
    /// paths. Records conflicts and emits events; the allocation state
    /// itself is untouched.
    fn check_claim<C: SocCaps>(
        &mut self,
        caps: &C,
        request: PinRequest,
        owner: Owner,
    ) -> Result<(), PinError> {
        let pin = request.pin;
        if !usable(caps, pin, request.output) {
            self.note_conflict(pin, owner);
            self.sink.on_event(PinEvent::Unusable { pin, requested: owner });
            return Err(PinError::NotUsable { pin });
        }
        let holder = self.owners[pin as usize];
        if self.taken(pin) && !(owner.is_shared_bus() && holder == owner) {
            self.note_conflict(pin, owner);
            self.sink.on_event(PinEvent::Conflict {
                pin,
                holder,
                requested: owner,
            });
            return Err(PinError::Owned { pin, holder });
        }
        Ok(())
    }

    fn mark(&mut self, pin: u8, owner: Owner) {
        self.alloc |= 1u64 << pin;
        self.owners[pin as usize] = owner;
        self.sink.on_event(PinEvent::Allocated { pin, owner });
    }

    /// Owner-filtered occupancy query. Fail-closed for bad pins; a mismatch
    /// against a real holder lands in the conflict table unless the filter
    /// is a shared-bus tag.
    fn owned_query<C: SocCaps>(&mut self, caps: &C, pin: u8, owner: Owner) -> bool {
        if !usable(caps, pin, false) {
            return true;
        }
        let holder = self.owners[pin as usize];
        if owner != Owner::None && holder != owner {
            if holder != Owner::None && !owner.is_shared_bus() {
                self.note_conflict(pin, owner);
            }
            return false;
        }
        self.taken(pin)
    }

    fn release_one<C: SocCaps>(
        &mut self,
        caps: &C,
        pin: u8,
        owner: Owner,
    ) -> Result<(), PinError> {
        if pin == NO_PIN {
            return Ok(());
        }
        if !usable(caps, pin, false) {
            return Err(PinError::NotUsable { pin });
        }
        let holder = self.owners[pin as usize];
        if holder != Owner::None && holder != owner {
            self.sink.on_event(PinEvent::Conflict {
                pin,
                holder,
                requested: owner,
            });
            return Err(PinError::NotOwner { pin, holder });
        }
        let was_taken = self.taken(pin);
        self.alloc &= !(1u64 << pin);
        self.owners[pin as usize] = Owner::None;
        if was_taken {
            self.sink.on_event(PinEvent::Released { pin, owner: holder });
        }
        Ok(())
    }
}

/// Arbitrates ownership of the controller's GPIO pins and its LEDC channel
/// pool.
///
/// One instance covers one chip, described by the [`SocCaps`] profile it is
/// constructed with. Construction is const so the manager can live in a
/// `static`; every operation takes `&self` and runs inside a single lock
/// scope, which is what makes the batch operations all-or-nothing. Pick the
/// mutex flavor to match the execution model: `NoopRawMutex` for a single
/// cooperative context, `CriticalSectionRawMutex` when pins are claimed
/// from multiple contexts.
pub struct PinManager<M: RawMutex, C: SocCaps, S: EventSink = NullSink> {
    caps: C,
    state: Mutex<M, RefCell<Tables<S>>>,
}

impl<M: RawMutex, C: SocCaps> PinManager<M, C> {
    /// A manager that discards events.
    pub const fn new(caps: C) -> Self {
        Self::with_sink(caps, NullSink)
    }
}

impl<M: RawMutex, C: SocCaps, S: EventSink> PinManager<M, C, S> {
    /// A manager that reports allocation activity to `sink`.
    pub const fn with_sink(caps: C, sink: S) -> Self {
        Self {
            caps,
            state: Mutex::new(RefCell::new(Tables::new(C::LEDC_CHANNELS, sink))),
        }
    }

    /// The capability profile this manager was built with.
    pub fn caps(&self) -> &C {
        &self.caps
    }

    /// Whether the chip allows `pin` in the given direction. [`NO_PIN`] and
    /// out-of-range indices are never usable.
    pub fn is_usable(&self, pin: u8, output: bool) -> bool {
        usable(&self.caps, pin, output)
    }

    /// Claims `pin` for `owner`.
    ///
    /// Fails if the chip reserves the pin (or the requested direction), or
    /// if the pin is already held; either failure is remembered in the
    /// pin's conflict slot. A shared-bus owner may re-claim a pin it
    /// already holds. Claim counting happens only in
    /// [`allocate_set`](Self::allocate_set), never here.
    pub fn allocate(&self, pin: u8, output: bool, owner: Owner) -> Result<(), PinError> {
        if pin == NO_PIN {
            return Ok(());
        }
        let request = PinRequest { pin, output };
        self.state.lock(|state| {
            let mut tables = state.borrow_mut();
            tables.check_claim(&self.caps, request, owner)?;
            tables.mark(pin, owner);
            Ok(())
        })
    }

    /// Claims every pin in `requests` for `owner`, or none of them.
    ///
    /// Phase one checks each entry exactly as [`allocate`](Self::allocate)
    /// would, recording a conflict per failing pin, without touching the
    /// allocation state; the whole set is examined before the first failure
    /// is reported. Phase two counts one shared-bus claim for the entire
    /// set and then marks every pin. Sentinel entries are skipped in both
    /// phases.
    pub fn allocate_set(&self, requests: &[PinRequest], owner: Owner) -> Result<(), PinError> {
        self.state.lock(|state| {
            let mut tables = state.borrow_mut();
            let mut failed = None;
            for request in requests {
                if request.pin == NO_PIN {
                    continue;
                }
                if let Err(err) = tables.check_claim(&self.caps, *request, owner) {
                    if failed.is_none() {
                        failed = Some(err);
                    }
                }
            }
            if let Some(err) = failed {
                return Err(err);
            }
            tables.claims.add(owner);
            for request in requests {
                if request.pin != NO_PIN {
                    tables.mark(request.pin, owner);
                }
            }
            Ok(())
        })
    }

    /// Releases `pin` if `owner` may do so.
    ///
    /// Releasing [`NO_PIN`] or an already-free pin succeeds. The pin's
    /// conflict slot is deliberately left behind as audit data.
    pub fn release(&self, pin: u8, owner: Owner) -> Result<(), PinError> {
        self.state
            .lock(|state| state.borrow_mut().release_one(&self.caps, pin, owner))
    }

    /// Releases a whole pin set, or nothing.
    ///
    /// Verification runs the owner-filtered query per pin, so unusable
    /// entries pass vacuously (releasing them is then a no-op) while a free
    /// or foreign-held pin aborts the set. For a shared-bus owner one claim
    /// is dropped first and the pins are only freed once the last claimant
    /// is gone.
    pub fn release_pins(&self, pins: &[u8], owner: Owner) -> Result<(), PinError> {
        self.release_many(pins.iter().copied(), owner)
    }

    /// [`release_pins`](Self::release_pins) over request entries, for
    /// callers holding their configuration as [`PinRequest`] arrays.
    pub fn release_set(&self, requests: &[PinRequest], owner: Owner) -> Result<(), PinError> {
        self.release_many(requests.iter().map(|request| request.pin), owner)
    }

    fn release_many(
        &self,
        pins: impl Iterator<Item = u8> + Clone,
        owner: Owner,
    ) -> Result<(), PinError> {
        self.state.lock(|state| {
            let mut tables = state.borrow_mut();
            let mut failed = None;
            for pin in pins.clone() {
                if pin == NO_PIN {
                    continue;
                }
                if !tables.owned_query(&self.caps, pin, owner) {
                    let holder = tables.owners[pin as usize];
                    tables.sink.on_event(PinEvent::Conflict {
                        pin,
                        holder,
                        requested: owner,
                    });
                    if failed.is_none() {
                        failed = Some(PinError::NotOwner { pin, holder });
                    }
                }
            }
            if let Some(err) = failed {
                return Err(err);
            }
            if tables.claims.remove(owner) {
                return Ok(());
            }
            for pin in pins {
                let _ = tables.release_one(&self.caps, pin, owner);
            }
            Ok(())
        })
    }

    /// Occupancy of `pin` regardless of owner. Invalid pins report as
    /// allocated so callers never treat them as available.
    pub fn is_allocated(&self, pin: u8) -> bool {
        if !usable(&self.caps, pin, false) {
            return true;
        }
        self.state.lock(|state| state.borrow().taken(pin))
    }

    /// Occupancy filtered by owner; `Owner::None` matches any holder.
    ///
    /// Fail-closed like [`is_allocated`](Self::is_allocated). A mismatch
    /// against a real holder is recorded in the pin's conflict slot
    /// (shared-bus filters excepted), so even a query can leave audit state
    /// behind.
    pub fn is_allocated_by(&self, pin: u8, owner: Owner) -> bool {
        self.state
            .lock(|state| state.borrow_mut().owned_query(&self.caps, pin, owner))
    }

    /// Current holder of `pin`, `Owner::None` for free or invalid pins.
    pub fn owner_of(&self, pin: u8) -> Owner {
        if !usable(&self.caps, pin, false) {
            return Owner::None;
        }
        self.state.lock(|state| state.borrow().owners[pin as usize])
    }

    /// Most recent recorded clash for `pin`, `Owner::None` when clean.
    pub fn conflict_of(&self, pin: u8) -> Owner {
        if !usable(&self.caps, pin, false) {
            return Owner::None;
        }
        self.state
            .lock(|state| state.borrow().conflicts[pin as usize])
    }

    /// Outstanding claim count for a shared-bus owner. Always zero for any
    /// other owner.
    pub fn shared_claims(&self, owner: Owner) -> u8 {
        self.state.lock(|state| state.borrow().claims.count(owner))
    }

    /// Reserves a contiguous run of LEDC channels, returning the first
    /// index of the run.
    pub fn allocate_ledc(&self, count: u8) -> Option<u8> {
        self.state
            .lock(|state| state.borrow_mut().ledc.allocate(count))
    }

    /// Returns a run of LEDC channels to the pool.
    pub fn release_ledc(&self, start: u8, count: u8) {
        self.state
            .lock(|state| state.borrow_mut().ledc.release(start, count))
    }
}
