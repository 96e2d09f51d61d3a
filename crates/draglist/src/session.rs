//! The list session: one identity-stable bundle of live state per list.
//!
//! [`SessionSlot`] is owned by the list component instance. Its first
//! [`render`](SessionSlot::render) allocates a [`ListSession`]; every later
//! render writes the new options through into that same bundle. Gesture
//! code, row renderers and autoscroll can cache the session (or any table
//! or handle inside it) once and keep reading current values.

use std::fmt;
use std::rc::Rc;

use draglist_core::{LiveHandle, LiveRef, MountEffect};

use crate::cells::{CellTable, KeyIndexTable};
use crate::config::{ListConfig, ScrollResolutionPolicy};
use crate::spring::SpringConfig;
use crate::surface::{reconcile_scroll_surface, ScrollResolution, SurfaceHost};

struct SessionRefs<T: 'static, H: SurfaceHost> {
    config: LiveRef<ListConfig<T>>,
    spring: LiveRef<SpringConfig>,
    cells: CellTable,
    key_to_index: KeyIndexTable,
    container: LiveHandle<H::Container>,
    list: LiveHandle<H::List>,
    scroll: LiveHandle<H::Scroll>,
}

/// Shared handles and tables for one reorderable list.
pub struct ListSession<T: 'static, H: SurfaceHost> {
    refs: Rc<SessionRefs<T, H>>,
}

impl<T: 'static, H: SurfaceHost> Clone for ListSession<T, H> {
    fn clone(&self) -> Self {
        Self {
            refs: Rc::clone(&self.refs),
        }
    }
}

impl<T: 'static, H: SurfaceHost> ListSession<T, H> {
    fn allocate(config: ListConfig<T>, forwarded_list: Option<&LiveHandle<H::List>>) -> Self {
        let spring = config.resolved_spring();
        let list = forwarded_list.cloned().unwrap_or_default();
        log::debug!(
            "draglist: allocating list session ({} rows, forwarded list handle: {})",
            config.data.len(),
            forwarded_list.is_some()
        );
        Self {
            refs: Rc::new(SessionRefs {
                config: LiveRef::new(config),
                spring: LiveRef::new(spring),
                cells: CellTable::new(),
                key_to_index: KeyIndexTable::new(),
                container: LiveHandle::new(),
                list,
                scroll: LiveHandle::new(),
            }),
        }
    }

    fn capture(&self, config: ListConfig<T>) {
        let spring = config.resolved_spring();
        log::trace!("draglist: capturing render options {:?}", config);
        self.refs.config.set(config);
        self.refs.spring.set(spring);
    }

    /// Options from the most recent render.
    pub fn config(&self) -> &LiveRef<ListConfig<T>> {
        &self.refs.config
    }

    /// Spring parameters resolved on the most recent render.
    pub fn spring(&self) -> &LiveRef<SpringConfig> {
        &self.refs.spring
    }

    pub fn cells(&self) -> &CellTable {
        &self.refs.cells
    }

    pub fn key_to_index(&self) -> &KeyIndexTable {
        &self.refs.key_to_index
    }

    pub fn container(&self) -> &LiveHandle<H::Container> {
        &self.refs.container
    }

    pub fn list(&self) -> &LiveHandle<H::List> {
        &self.refs.list
    }

    pub fn scroll(&self) -> &LiveHandle<H::Scroll> {
        &self.refs.scroll
    }

    /// Rebuild the key-to-index table from the current rows.
    pub fn reindex(&self) {
        let keys: Vec<String> = self.refs.config.with(|config| {
            config
                .data
                .iter()
                .enumerate()
                .map(|(index, item)| (config.key_extractor)(item, index))
                .collect()
        });
        self.refs.key_to_index.rebuild(keys);
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.refs.key_to_index.get(key)
    }

    /// Key the key-to-index table currently places at `index`.
    pub fn key_at(&self, index: usize) -> Option<String> {
        self.refs.key_to_index.key_at(index)
    }

    /// Try to back-fill the scroll handle from the list surface.
    ///
    /// Safe to call repeatedly; once resolved it does nothing.
    pub fn attempt_scroll_resolution(&self) -> ScrollResolution {
        reconcile_scroll_surface::<H>(&self.refs.list, &self.refs.scroll)
    }

    pub fn scroll_resolution(&self) -> ScrollResolution {
        if self.refs.scroll.is_populated() {
            ScrollResolution::Resolved
        } else {
            ScrollResolution::Unresolved
        }
    }

    /// True when both sessions are the same bundle.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.refs, &other.refs)
    }
}

impl<T: 'static, H: SurfaceHost> fmt::Debug for ListSession<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSession")
            .field("cells", &self.refs.cells.len())
            .field("indexed_keys", &self.refs.key_to_index.len())
            .field("container", &self.refs.container)
            .field("list", &self.refs.list)
            .field("scroll", &self.refs.scroll)
            .finish()
    }
}

/// Lifecycle of a [`SessionSlot`]. There is no teardown state; the session
/// goes away with the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Live,
}

/// Per-instance owner of a [`ListSession`].
pub struct SessionSlot<T: 'static, H: SurfaceHost> {
    session: Option<ListSession<T, H>>,
    mount_effect: MountEffect,
}

impl<T: 'static, H: SurfaceHost> Default for SessionSlot<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static, H: SurfaceHost> SessionSlot<T, H> {
    pub fn new() -> Self {
        Self {
            session: None,
            mount_effect: MountEffect::new(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.session.is_some() {
            Lifecycle::Live
        } else {
            Lifecycle::Uninitialized
        }
    }

    pub fn session(&self) -> Option<&ListSession<T, H>> {
        self.session.as_ref()
    }

    /// Capture this render's options and return the session.
    ///
    /// The first call allocates the session, using `forwarded_list` as the
    /// list surface handle when given so the caller shares its target.
    /// Later calls write `config` through and ignore `forwarded_list`.
    pub fn render(
        &mut self,
        config: ListConfig<T>,
        forwarded_list: Option<&LiveHandle<H::List>>,
    ) -> ListSession<T, H> {
        match &self.session {
            Some(session) => {
                session.capture(config);
                session.clone()
            }
            None => {
                let session = ListSession::allocate(config, forwarded_list);
                self.session = Some(session.clone());
                session
            }
        }
    }

    /// Mount effect: one scroll resolution attempt per mount.
    ///
    /// Returns `None` when the effect already ran for this mount or no
    /// session has been rendered yet.
    pub fn after_mount(&mut self) -> Option<ScrollResolution> {
        let session = self.session.as_ref()?;
        self.mount_effect
            .run(|| session.attempt_scroll_resolution())
    }

    /// Start a new mount; the next [`after_mount`](Self::after_mount) checks again.
    pub fn remount(&mut self) {
        self.mount_effect.remount();
    }

    /// Frame hook. Retries scroll resolution under
    /// [`ScrollResolutionPolicy::UntilResolved`]; otherwise only reports.
    pub fn on_frame(&self) -> ScrollResolution {
        let Some(session) = self.session.as_ref() else {
            return ScrollResolution::Unresolved;
        };
        let policy = session.config().with(|config| config.scroll_resolution);
        match policy {
            ScrollResolutionPolicy::UntilResolved if self.mount_effect.has_run() => {
                session.attempt_scroll_resolution()
            }
            _ => session.scroll_resolution(),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
