//! Platform binding for the list's structural handles.
//!
//! Virtualized list widgets do not always forward an externally supplied
//! handle down to the scrollable primitive they render internally. The
//! session works around this by asking the list surface for its native
//! scroll target after mount and back-filling the scroll handle.

use std::rc::Rc;

use draglist_core::LiveHandle;

/// Types the rendering layer hands to the session, and how to get from
/// the list surface to the scroll surface beneath it.
pub trait SurfaceHost: 'static {
    /// Outermost animated container.
    type Container: ?Sized + 'static;
    /// Virtualized list surface.
    type List: ?Sized + 'static;
    /// Native scrollable primitive under the list surface.
    type Scroll: ?Sized + 'static;

    /// The list's native scroll target, or `None` if it is not available yet.
    ///
    /// The returned `Rc` must share ownership with the rendering layer;
    /// the session only keeps a weak reference to it.
    fn native_scroll_surface(list: &Self::List) -> Option<Rc<Self::Scroll>>;
}

/// Whether the scroll handle has been back-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollResolution {
    Unresolved,
    Resolved,
}

/// Populate `scroll` from `list` unless it already has a target.
///
/// Idempotent: once the scroll handle is populated this is a no-op that
/// reports [`ScrollResolution::Resolved`]. A miss leaves the handle empty.
pub fn reconcile_scroll_surface<H: SurfaceHost>(
    list: &LiveHandle<H::List>,
    scroll: &LiveHandle<H::Scroll>,
) -> ScrollResolution {
    if scroll.is_populated() {
        return ScrollResolution::Resolved;
    }
    let native = list
        .current()
        .and_then(|surface| H::native_scroll_surface(&surface));
    match native {
        Some(target) => {
            scroll.attach(&target);
            log::debug!("draglist: scroll surface resolved from list surface");
            ScrollResolution::Resolved
        }
        None => {
            log::debug!(
                "draglist: native scroll surface unavailable (list mounted: {}), leaving unresolved",
                list.is_populated()
            );
            ScrollResolution::Unresolved
        }
    }
}
