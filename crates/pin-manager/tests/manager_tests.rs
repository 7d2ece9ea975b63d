use std::cell::RefCell;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use pin_manager::{diag, EventSink, Owner, PinError, PinEvent, PinManager, SocCaps, NO_PIN};

// ---------------------------------------------------------------------------
// Mock SoC profile
// ---------------------------------------------------------------------------

/// 16-pin chip: pins 6 and 7 are reserved, 10 and 11 are input only.
struct TestCaps;

impl SocCaps for TestCaps {
    const PIN_COUNT: u8 = 16;
    const LEDC_CHANNELS: u8 = 8;

    fn is_usable(&self, pin: u8, output: bool) -> bool {
        if pin >= Self::PIN_COUNT || pin == 6 || pin == 7 {
            return false;
        }
        !(output && (pin == 10 || pin == 11))
    }

    fn special_role(&self, pin: u8) -> Option<&'static str> {
        match pin {
            6 | 7 => Some("flash"),
            _ => None,
        }
    }
}

/// Collects events through a shared handle so tests can inspect them.
#[derive(Clone, Default)]
struct RecordingSink {
    events: Rc<RefCell<Vec<PinEvent>>>,
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: PinEvent) {
        self.events.borrow_mut().push(event);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_manager() -> PinManager<NoopRawMutex, TestCaps> {
    PinManager::new(TestCaps)
}

fn make_recording() -> (
    PinManager<NoopRawMutex, TestCaps, RecordingSink>,
    Rc<RefCell<Vec<PinEvent>>>,
) {
    let sink = RecordingSink::default();
    let events = sink.events.clone();
    (PinManager::with_sink(TestCaps, sink), events)
}

// ---------------------------------------------------------------------------
// Single-pin allocation
// ---------------------------------------------------------------------------

#[test]
fn fresh_table_has_no_allocations() {
    let mgr = make_manager();

    for pin in 0..TestCaps::PIN_COUNT {
        assert_eq!(mgr.owner_of(pin), Owner::None);
        assert_eq!(mgr.conflict_of(pin), Owner::None);
        if mgr.is_usable(pin, false) {
            assert!(!mgr.is_allocated(pin));
        }
    }
}

#[test]
fn allocate_then_query_round_trip() {
    let mgr = make_manager();

    assert_eq!(mgr.allocate(5, true, Owner::Button), Ok(()));
    assert!(mgr.is_allocated(5));
    assert!(mgr.is_allocated_by(5, Owner::Button));
    assert_eq!(mgr.owner_of(5), Owner::Button);
}

#[test]
fn allocate_refuses_reserved_pin() {
    let mgr = make_manager();

    assert_eq!(
        mgr.allocate(6, true, Owner::Button),
        Err(PinError::NotUsable { pin: 6 })
    );
    assert_eq!(mgr.owner_of(6), Owner::None);
}

#[test]
fn output_request_on_input_only_pin_records_conflict() {
    let mgr = make_manager();

    assert_eq!(
        mgr.allocate(10, true, Owner::BusPwm),
        Err(PinError::NotUsable { pin: 10 })
    );
    // Readable as input, so the record is visible.
    assert_eq!(mgr.conflict_of(10), Owner::BusPwm);
    assert_eq!(mgr.allocate(10, false, Owner::Button), Ok(()));
}

#[test]
fn second_owner_is_refused_and_remembered() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    assert_eq!(
        mgr.allocate(3, true, Owner::Button),
        Err(PinError::Owned { pin: 3, holder: Owner::Relay })
    );
    assert_eq!(mgr.owner_of(3), Owner::Relay);
    assert_eq!(mgr.conflict_of(3), Owner::Button);
}

#[test]
fn same_owner_cannot_claim_twice() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    assert_eq!(
        mgr.allocate(3, true, Owner::Relay),
        Err(PinError::Owned { pin: 3, holder: Owner::Relay })
    );
    assert_eq!(mgr.conflict_of(3), Owner::Relay);
}

#[test]
fn shared_bus_owner_may_reclaim_its_pin() {
    let mgr = make_manager();

    assert_eq!(mgr.allocate(8, true, Owner::HwI2c), Ok(()));
    assert_eq!(mgr.allocate(8, true, Owner::HwI2c), Ok(()));
    assert_eq!(mgr.owner_of(8), Owner::HwI2c);
    // The single-pin path never counts claims.
    assert_eq!(mgr.shared_claims(Owner::HwI2c), 0);
}

#[test]
fn sentinel_pin_is_always_a_no_op() {
    let mgr = make_manager();

    assert_eq!(mgr.allocate(NO_PIN, true, Owner::Button), Ok(()));
    assert_eq!(mgr.release(NO_PIN, Owner::Button), Ok(()));
    assert_eq!(mgr.owner_of(NO_PIN), Owner::None);
    assert!(!mgr.is_usable(NO_PIN, false));
}

#[test]
fn out_of_range_pin_fails_closed() {
    let mgr = make_manager();

    assert!(mgr.is_allocated(40));
    assert!(mgr.is_allocated_by(40, Owner::Button));
    assert_eq!(
        mgr.allocate(40, true, Owner::Button),
        Err(PinError::NotUsable { pin: 40 })
    );
    assert_eq!(
        mgr.release(40, Owner::Button),
        Err(PinError::NotUsable { pin: 40 })
    );
    assert_eq!(mgr.owner_of(40), Owner::None);
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn filtered_query_mismatch_is_recorded() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    assert!(!mgr.is_allocated_by(3, Owner::Button));
    assert_eq!(mgr.conflict_of(3), Owner::Button);
}

#[test]
fn shared_bus_filter_does_not_record() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    assert!(!mgr.is_allocated_by(3, Owner::HwI2c));
    assert_eq!(mgr.conflict_of(3), Owner::None);
}

#[test]
fn none_filter_matches_any_holder() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    assert!(mgr.is_allocated_by(3, Owner::None));
    assert_eq!(mgr.conflict_of(3), Owner::None);
}

#[test]
fn filter_on_free_pin_reports_unallocated() {
    let mgr = make_manager();

    assert!(!mgr.is_allocated_by(4, Owner::Button));
    assert_eq!(mgr.conflict_of(4), Owner::None);
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

#[test]
fn release_returns_pin_to_the_pool() {
    let mgr = make_manager();

    mgr.allocate(5, true, Owner::Button).unwrap();
    assert_eq!(mgr.release(5, Owner::Button), Ok(()));
    assert!(!mgr.is_allocated(5));
    assert_eq!(mgr.owner_of(5), Owner::None);
    assert_eq!(mgr.allocate(5, true, Owner::Relay), Ok(()));
}

#[test]
fn release_by_other_owner_is_denied() {
    let mgr = make_manager();

    mgr.allocate(5, true, Owner::Button).unwrap();
    assert_eq!(
        mgr.release(5, Owner::Relay),
        Err(PinError::NotOwner { pin: 5, holder: Owner::Button })
    );
    assert!(mgr.is_allocated(5));
    assert_eq!(mgr.owner_of(5), Owner::Button);
}

#[test]
fn releasing_a_free_pin_is_harmless() {
    let mgr = make_manager();

    assert_eq!(mgr.release(5, Owner::Button), Ok(()));
    assert!(!mgr.is_allocated(5));
}

#[test]
fn conflict_record_survives_release_and_reallocation() {
    let mgr = make_manager();

    mgr.allocate(3, true, Owner::Relay).unwrap();
    let _ = mgr.allocate(3, true, Owner::Button);
    mgr.release(3, Owner::Relay).unwrap();
    mgr.allocate(3, true, Owner::IrReceiver).unwrap();

    // Audit data stays put through the pin's later life.
    assert_eq!(mgr.conflict_of(3), Owner::Button);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn events_trace_a_pin_lifecycle() {
    let (mgr, events) = make_recording();

    mgr.allocate(3, true, Owner::Button).unwrap();
    let _ = mgr.allocate(3, true, Owner::Relay);
    mgr.release(3, Owner::Button).unwrap();

    assert_eq!(
        events.borrow().as_slice(),
        &[
            PinEvent::Allocated { pin: 3, owner: Owner::Button },
            PinEvent::Conflict { pin: 3, holder: Owner::Button, requested: Owner::Relay },
            PinEvent::Released { pin: 3, owner: Owner::Button },
        ]
    );
}

#[test]
fn unusable_pin_raises_an_event() {
    let (mgr, events) = make_recording();

    let _ = mgr.allocate(10, true, Owner::BusPwm);

    assert_eq!(
        events.borrow().as_slice(),
        &[PinEvent::Unusable { pin: 10, requested: Owner::BusPwm }]
    );
    assert_eq!(
        events.borrow()[0].as_error(),
        Some(PinError::NotUsable { pin: 10 })
    );
}

#[test]
fn releasing_a_free_pin_emits_nothing() {
    let (mgr, events) = make_recording();

    mgr.release(5, Owner::Button).unwrap();
    assert!(events.borrow().is_empty());
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[test]
fn owner_text_tracks_pin_state() {
    let mgr = make_manager();

    assert_eq!(diag::owner_text(&mgr, NO_PIN), "");
    assert_eq!(diag::owner_text(&mgr, 6), "n/a");
    assert_eq!(diag::owner_text(&mgr, 4), "free");

    mgr.allocate(4, true, Owner::BusDigital).unwrap();
    assert_eq!(diag::owner_text(&mgr, 4), "LEDs (digital)");
}

#[test]
fn conflict_text_renders_the_recorded_clash() {
    let mgr = make_manager();

    assert!(diag::conflict_text(&mgr, 4).is_none());

    mgr.allocate(4, true, Owner::Relay).unwrap();
    let _ = mgr.allocate(4, true, Owner::Button);

    let text = diag::conflict_text(&mgr, 4).unwrap();
    assert_eq!(text.as_str(), "pin 4 contested by button");
}

#[test]
fn special_text_comes_from_the_profile() {
    assert_eq!(diag::special_text(&TestCaps, 6), "flash");
    assert_eq!(diag::special_text(&TestCaps, 4), "");
    assert_eq!(diag::special_text(&TestCaps, NO_PIN), "");
}

// ---------------------------------------------------------------------------
// Static placement
// ---------------------------------------------------------------------------

static SHARED: PinManager<CriticalSectionRawMutex, TestCaps> = PinManager::new(TestCaps);

#[test]
fn manager_works_as_a_static() {
    assert_eq!(SHARED.allocate(12, true, Owner::Relay), Ok(()));
    assert_eq!(SHARED.owner_of(12), Owner::Relay);
    assert_eq!(SHARED.release(12, Owner::Relay), Ok(()));
    assert!(!SHARED.is_allocated(12));
}
