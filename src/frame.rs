use gloo::render::{request_animation_frame, AnimationFrame};
use hotc_core::FrameGate;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Runs `on_frame` at most once per animation frame with the newest payload
/// offered since the previous frame.
///
/// The pending frame only holds a weak reference, so dropping the last
/// `Rc<FrameScheduler>` cancels it and nothing runs against a torn-down
/// mount.
pub struct FrameScheduler<P: 'static> {
    gate: RefCell<FrameGate<P>>,
    handle: RefCell<Option<AnimationFrame>>,
    on_frame: Box<dyn Fn(P)>,
}

impl<P: 'static> FrameScheduler<P> {
    pub fn new(on_frame: impl Fn(P) + 'static) -> Rc<Self> {
        Rc::new(Self {
            gate: RefCell::new(FrameGate::new()),
            handle: RefCell::new(None),
            on_frame: Box::new(on_frame),
        })
    }

    pub fn offer(self: &Rc<Self>, payload: P) {
        if !self.gate.borrow_mut().offer(payload) {
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            if let Some(scheduler) = weak.upgrade() {
                scheduler.fire();
            }
        });
        *self.handle.borrow_mut() = Some(handle);
    }

    // The fired handle stays put until the next offer replaces it; dropping
    // it here would free the closure that is currently running.
    fn fire(&self) {
        let payload = self.gate.borrow_mut().fire();
        if let Some(payload) = payload {
            (self.on_frame)(payload);
        }
    }

    /// Drop pending work; safe to call any number of times.
    pub fn cancel(&self) {
        {
            let mut gate = self.gate.borrow_mut();
            if gate.is_pending() {
                let (offered, fired) = gate.counts();
                log::debug!(
                    "[frame] cancelled pending frame after {} events, {} frames",
                    offered,
                    fired
                );
            }
            gate.cancel();
        }
        self.handle.borrow_mut().take();
    }
}

impl<P: 'static> Drop for FrameScheduler<P> {
    fn drop(&mut self) {
        self.cancel();
    }
}
