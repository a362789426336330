//! Normalized scroll progress for tracked regions.
//!
//! Progress is a derived scalar in [0, 1] describing how far a region has
//! travelled through the viewport. It is recomputed from layout geometry on
//! every scroll event and never stored beyond the frame that uses it.

use web_sys::Element;

/// How a region's travel through the viewport is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackSpan {
    /// 0 when the region's top edge reaches the viewport bottom, 1 when its
    /// bottom edge leaves through the viewport top. Used by sections that
    /// animate while passing through the screen.
    EnterToExit,
    /// 0 while the region's top edge sits at the viewport top, 1 once the
    /// page has scrolled a full region height past it. Used by the pinned
    /// hero.
    TopToExit,
    /// Travel through the whole scrollable document.
    Page,
}

/// Value reported when the scroll range is degenerate (zero-height region,
/// unscrollable document). Matches the hidden/initial end of every mapping.
pub const NEUTRAL: f64 = 0.0;

/// Pure progress computation over region geometry.
///
/// `top` and `height` come from the region's bounding rect, `viewport` is
/// the window inner height. The result is clamped to [0, 1]; a non-positive
/// scroll range yields [`NEUTRAL`] instead of dividing by zero.
pub fn span_progress(span: TrackSpan, top: f64, height: f64, viewport: f64) -> f64 {
    let (travelled, range) = match span {
        TrackSpan::EnterToExit => (viewport - top, viewport + height),
        TrackSpan::TopToExit => (-top, height),
        TrackSpan::Page => (-top, height - viewport),
    };
    if range <= 0.0 {
        return NEUTRAL;
    }
    (travelled / range).clamp(0.0, 1.0)
}

/// Progress of a mounted element, read from its bounding rect.
pub fn element_progress(element: &Element, span: TrackSpan) -> f64 {
    let viewport = match web_sys::window().and_then(|w| w.inner_height().ok()) {
        Some(height) => height.as_f64().unwrap_or(0.0),
        None => return NEUTRAL,
    };
    let rect = element.get_bounding_client_rect();
    span_progress(span, rect.top(), rect.height(), viewport)
}

/// The document element, which doubles as the tracked region for
/// [`TrackSpan::Page`] consumers.
pub fn document_region() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_to_exit_spans_both_edges() {
        // Region 200 tall, viewport 800: appears at top=800, gone at top=-200.
        assert_eq!(span_progress(TrackSpan::EnterToExit, 800.0, 200.0, 800.0), 0.0);
        assert_eq!(span_progress(TrackSpan::EnterToExit, -200.0, 200.0, 800.0), 1.0);
        assert_eq!(span_progress(TrackSpan::EnterToExit, 300.0, 200.0, 800.0), 0.5);
    }

    #[test]
    fn top_to_exit_tracks_scroll_past() {
        assert_eq!(span_progress(TrackSpan::TopToExit, 0.0, 1000.0, 800.0), 0.0);
        assert_eq!(span_progress(TrackSpan::TopToExit, -500.0, 1000.0, 800.0), 0.5);
        assert_eq!(span_progress(TrackSpan::TopToExit, -1000.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn page_progress_uses_scrollable_range() {
        // 3000 document, 800 viewport: full travel is 2200.
        assert_eq!(span_progress(TrackSpan::Page, 0.0, 3000.0, 800.0), 0.0);
        assert_eq!(span_progress(TrackSpan::Page, -1100.0, 3000.0, 800.0), 0.5);
        assert_eq!(span_progress(TrackSpan::Page, -2200.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn clamps_outside_the_span() {
        assert_eq!(span_progress(TrackSpan::TopToExit, 400.0, 1000.0, 800.0), 0.0);
        assert_eq!(span_progress(TrackSpan::TopToExit, -5000.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn degenerate_ranges_fall_back_to_neutral() {
        assert_eq!(span_progress(TrackSpan::EnterToExit, 0.0, 0.0, 0.0), NEUTRAL);
        assert_eq!(span_progress(TrackSpan::TopToExit, -10.0, 0.0, 800.0), NEUTRAL);
        // Document shorter than the viewport cannot scroll.
        assert_eq!(span_progress(TrackSpan::Page, 0.0, 600.0, 800.0), NEUTRAL);
    }
}
