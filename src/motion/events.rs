//! RAII DOM listener registration.
//!
//! Every listener the site attaches must come back off when its view
//! unmounts; holding the `Closure` and the target together makes the
//! detach automatic in effect cleanups.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// A listener that detaches itself when dropped.
pub struct EventHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventHandle {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        web_sys::window().map(|window| Self::listen(window.as_ref(), event, handler))
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| Self::listen(document.as_ref(), event, handler))
    }
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
