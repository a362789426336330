//! Yew hooks over the motion primitives.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::events::EventHandle;
use super::visibility::ViewLatch;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Margin applied to the viewport before the intersection test, in px.
    /// Negative values shrink it, so the reveal fires once the region is
    /// properly on screen.
    pub margin_px: i32,
    /// Latch on first reveal instead of following the viewport.
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            margin_px: -50,
            once: true,
        }
    }
}

/// Tracks whether `node` is in the viewport. With `once`, stays true after
/// the first reveal even when the region scrolls back out.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let latch = Rc::new(RefCell::new(ViewLatch::new(options.once)));
                let mut wiring = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_entries = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            latch.borrow_mut().observe(entry.is_intersecting());
                        }
                        revealed.set(latch.borrow().is_revealed());
                    })
                        as Box<dyn FnMut(js_sys::Array)>);

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(&format!("{}px", options.margin_px));
                    match IntersectionObserver::new_with_options(
                        on_entries.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            wiring = Some((observer, on_entries));
                        }
                        Err(_) => gloo_console::error!("intersection observer unavailable"),
                    }
                }

                move || {
                    if let Some((observer, _callback)) = wiring {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }
    *revealed
}

/// True once the window has scrolled past `threshold` px. Drives the navbar
/// background swap and the sticky call-to-action.
#[hook]
pub fn use_scrolled_beyond(threshold: f64) -> bool {
    let passed = use_state_eq(|| false);
    {
        let passed = passed.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let scrolled = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    passed.set(scrolled > threshold);
                };
                update();
                let listener = EventHandle::on_window("scroll", move |_| update());
                move || drop(listener)
            },
            (),
        );
    }
    *passed
}
