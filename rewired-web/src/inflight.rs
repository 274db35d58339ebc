//! Single-flight latch for async UI actions.
//!
//! Buttons that kick off a server mutation must ignore repeat clicks until
//! the first request settles. A plain `use_state(bool)` is not enough: the
//! re-render that disables the button is scheduled, so a second click can
//! land before it. The latch here flips synchronously and only notifies the
//! render path afterwards.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Latch guarding one logical action. Clones share the same latch.
#[derive(Clone)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
    observer: Callback<bool>,
}

impl InFlight {
    /// `observer` is invoked with the new busy state on every transition,
    /// typically to poke a `use_state` handle.
    #[must_use]
    pub fn new(observer: Callback<bool>) -> Self {
        Self {
            busy: Rc::new(Cell::new(false)),
            observer,
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claim the latch. Returns `None` when an earlier claim is still live,
    /// in which case the caller must do nothing.
    #[must_use]
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.busy.get() {
            return None;
        }
        self.busy.set(true);
        self.observer.emit(true);
        Some(InFlightGuard {
            busy: self.busy.clone(),
            observer: self.observer.clone(),
        })
    }
}

/// Releases the latch when dropped, usually at the end of a spawned future.
pub struct InFlightGuard {
    busy: Rc<Cell<bool>>,
    observer: Callback<bool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.set(false);
        self.observer.emit(false);
    }
}

/// Component-scoped latch whose transitions re-render the component, so
/// `is_busy` can drive a `disabled` attribute.
#[hook]
pub fn use_in_flight() -> InFlight {
    let rendered = use_state(|| false);
    let flight = use_mut_ref({
        let rendered = rendered.clone();
        move || InFlight::new(Callback::from(move |busy| rendered.set(busy)))
    });
    let flight = flight.borrow().clone();
    flight
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn observed() -> (InFlight, Rc<RefCell<Vec<bool>>>) {
        let transitions = Rc::new(RefCell::new(Vec::new()));
        let sink = transitions.clone();
        let flight = InFlight::new(Callback::from(move |busy| sink.borrow_mut().push(busy)));
        (flight, transitions)
    }

    #[test]
    fn second_claim_is_refused_until_the_guard_drops() {
        let (flight, _) = observed();

        let guard = flight.try_begin();
        assert!(guard.is_some());
        assert!(flight.is_busy());
        assert!(flight.try_begin().is_none());

        drop(guard);
        assert!(!flight.is_busy());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn observer_sees_each_transition() {
        let (flight, transitions) = observed();

        let guard = flight.try_begin();
        drop(guard);

        assert_eq!(*transitions.borrow(), vec![true, false]);
    }

    #[test]
    fn clones_share_the_latch() {
        let (flight, _) = observed();
        let clone = flight.clone();

        let _guard = flight.try_begin();
        assert!(clone.is_busy());
        assert!(clone.try_begin().is_none());
    }
}
