//! `requestAnimationFrame` plumbing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A per-frame callback loop. The callback receives the time since the
/// previous frame in seconds and returns whether the loop should keep
/// running. Cancelled when dropped.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let last_ts = Cell::new(None::<f64>);

        let id_handle = raf_id.clone();
        let reschedule = closure.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let dt = match last_ts.replace(Some(now)) {
                Some(prev) => ((now - prev) / 1000.0).max(0.0),
                None => 1.0 / 60.0,
            };
            if tick(dt) {
                id_handle.set(schedule(&reschedule));
            } else {
                id_handle.set(None);
            }
        }) as Box<dyn FnMut(f64)>));

        raf_id.set(schedule(&closure));
        Self { raf_id, closure }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The stored closure captures a clone of its own slot; dropping it
        // here breaks that cycle.
        self.closure.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(slot: &Rc<RefCell<Option<FrameClosure>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let slot = slot.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
