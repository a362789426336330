//! Couples window scrolling to per-frame style application for one region.
//!
//! Components hand over the section element, a [`TrackSpan`], and an apply
//! closure that samples its keyframe maps and writes styles straight onto
//! the DOM nodes it owns. The driver keeps the closure fed with progress
//! for as long as the region is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::events::EventHandle;
use super::frame::FrameLoop;
use super::progress::{element_progress, TrackSpan};
use super::spring::{Spring, SpringConfig};

/// Motion wiring for one mounted region. Dropping it detaches the scroll
/// listener and cancels the frame loop.
pub struct SectionMotion {
    _scroll: Option<EventHandle>,
    _frames: Option<FrameLoop>,
}

impl SectionMotion {
    /// Spring-smoothed progress: scroll events retarget the spring, the
    /// frame loop ticks it and hands the smoothed value to `apply`.
    pub fn smooth<F>(section: Element, span: TrackSpan, config: SpringConfig, apply: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let initial = element_progress(&section, span);
        let spring = Rc::new(RefCell::new(Spring::new(initial, config)));
        let apply = Rc::new(RefCell::new(apply));

        (apply.borrow_mut())(initial);

        let scroll = {
            let spring = spring.clone();
            EventHandle::on_window("scroll", move |_| {
                spring
                    .borrow_mut()
                    .set_target(element_progress(&section, span));
            })
        };

        let frames = FrameLoop::start(move |dt| {
            let value = {
                let mut spring = spring.borrow_mut();
                if spring.is_settled() {
                    None
                } else {
                    Some(spring.tick(dt))
                }
            };
            if let Some(value) = value {
                (apply.borrow_mut())(value);
            }
            true
        });

        Self {
            _scroll: scroll,
            _frames: Some(frames),
        }
    }

    /// Unsmoothed progress, applied straight from the scroll event.
    pub fn direct<F>(section: Element, span: TrackSpan, mut apply: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        apply(element_progress(&section, span));
        let scroll = EventHandle::on_window("scroll", move |_| {
            apply(element_progress(&section, span));
        });
        Self {
            _scroll: scroll,
            _frames: None,
        }
    }
}
