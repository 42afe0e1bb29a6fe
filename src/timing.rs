//! Rate-limiting primitives for scroll-reactive pipelines.
//!
//! Two strategies are used on this page: collapsing event bursts into one
//! animation frame (active-section tracking, navbar background) and firing
//! once after a quiescence window (section reveals). Both are kept here so
//! each call site reads as a declaration rather than an inlined idiom.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pending flag shared between an event source and its frame callback.
///
/// `try_enter` arms the gate and reports whether the caller won the slot;
/// further calls lose until `leave` re-opens it.
pub struct TickGate {
    busy: Cell<bool>,
}

impl TickGate {
    pub fn new() -> Self {
        TickGate { busy: Cell::new(false) }
    }

    pub fn try_enter(&self) -> bool {
        if self.busy.get() {
            return false;
        }
        self.busy.set(true);
        true
    }

    pub fn leave(&self) {
        self.busy.set(false);
    }
}

/// Runs its work at most once per animation frame, no matter how many
/// times `trigger` fires in between. Dropping the coalescer drops the
/// frame callback; a frame already scheduled by the browser then no-ops.
pub struct FrameCoalescer {
    gate: Rc<TickGate>,
    frame_cb: Closure<dyn FnMut()>,
}

impl FrameCoalescer {
    pub fn new(work: impl Fn() + 'static) -> Self {
        let gate = Rc::new(TickGate::new());
        let frame_gate = gate.clone();
        let frame_cb = Closure::wrap(Box::new(move || {
            work();
            frame_gate.leave();
        }) as Box<dyn FnMut()>);
        FrameCoalescer { gate, frame_cb }
    }

    pub fn trigger(&self) {
        if !self.gate.try_enter() {
            return;
        }
        let scheduled = web_sys::window()
            .and_then(|w| w.request_animation_frame(self.frame_cb.as_ref().unchecked_ref()).ok());
        if scheduled.is_none() {
            self.gate.leave();
        }
    }
}

/// Cancel-and-restart timeout: every `trigger` replaces the pending timer,
/// so the work runs once per quiescence window. Dropping the previous
/// `Timeout` handle is what cancels it.
pub struct Debounce {
    window_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
    work: Rc<dyn Fn()>,
}

impl Debounce {
    pub fn new(window_ms: u32, work: impl Fn() + 'static) -> Self {
        Debounce {
            window_ms,
            pending: Rc::new(RefCell::new(None)),
            work: Rc::new(work),
        }
    }

    pub fn trigger(&self) {
        let work = self.work.clone();
        let timer = Timeout::new(self.window_ms, move || work());
        // Replacing the slot drops any timer still pending, cancelling it.
        *self.pending.borrow_mut() = Some(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::TickGate;

    #[test]
    fn gate_admits_first_caller_only() {
        let gate = TickGate::new();
        assert!(gate.try_enter());
        assert!(!gate.try_enter());
        assert!(!gate.try_enter());
    }

    #[test]
    fn gate_rearms_after_leave() {
        let gate = TickGate::new();
        assert!(gate.try_enter());
        gate.leave();
        assert!(gate.try_enter());
    }
}
