//! Caller-facing list options.
//!
//! A [`ListConfig`] is handed to the session on every render and stored
//! as-is. The session never reads it by identity; collaborators always see
//! the most recent render's options through the live snapshot.

use std::fmt;
use std::rc::Rc;

use crate::spring::{SpringConfig, SpringOverride};

pub const DEFAULT_AUTOSCROLL_THRESHOLD: f32 = 30.0;
pub const DEFAULT_AUTOSCROLL_SPEED: f32 = 100.0;

/// Arguments passed to the row-render callback.
pub struct RenderItemParams<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub key: &'a str,
    /// True while this row is the one being dragged.
    pub is_active: bool,
}

/// Arguments passed when a drag finishes.
pub struct DragEndParams<'a, T> {
    /// Rows in their new order.
    pub data: &'a [T],
    pub from: usize,
    pub to: usize,
}

pub type KeyExtractor<T> = Rc<dyn Fn(&T, usize) -> String>;
pub type RenderItem<T> = Rc<dyn Fn(RenderItemParams<'_, T>)>;
pub type DragEndCallback<T> = Rc<dyn Fn(DragEndParams<'_, T>)>;
pub type PlaceItemCallback<T> = Rc<dyn Fn(&T, usize, usize)>;

/// When the session tries to back-fill the scroll surface handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollResolutionPolicy {
    /// One attempt per mount. A miss stays unresolved until the next mount.
    #[default]
    OnMount,
    /// Attempt on mount, then again on every frame until it succeeds.
    UntilResolved,
}

/// Options for one render of a reorderable list.
pub struct ListConfig<T> {
    pub data: Vec<T>,
    pub key_extractor: KeyExtractor<T>,
    pub render_item: Option<RenderItem<T>>,
    pub on_drag_begin: Option<Rc<dyn Fn(usize)>>,
    pub on_drag_end: Option<DragEndCallback<T>>,
    pub on_place_item: Option<PlaceItemCallback<T>>,
    pub horizontal: bool,
    /// Pointer travel before a press turns into a drag.
    pub activation_distance: f32,
    pub drag_hit_slop: f32,
    /// Distance from an edge at which autoscroll kicks in.
    pub autoscroll_threshold: f32,
    pub autoscroll_speed: f32,
    /// Let the dragged row leave the list bounds.
    pub drag_item_overflow: bool,
    pub scroll_enabled: bool,
    pub outer_scroll_enabled: bool,
    pub animation: Option<SpringOverride>,
    pub scroll_resolution: ScrollResolutionPolicy,
}

impl<T> ListConfig<T> {
    pub fn new(data: Vec<T>, key_extractor: impl Fn(&T, usize) -> String + 'static) -> Self {
        Self {
            data,
            key_extractor: Rc::new(key_extractor),
            render_item: None,
            on_drag_begin: None,
            on_drag_end: None,
            on_place_item: None,
            horizontal: false,
            activation_distance: 0.0,
            drag_hit_slop: 0.0,
            autoscroll_threshold: DEFAULT_AUTOSCROLL_THRESHOLD,
            autoscroll_speed: DEFAULT_AUTOSCROLL_SPEED,
            drag_item_overflow: false,
            scroll_enabled: true,
            outer_scroll_enabled: true,
            animation: None,
            scroll_resolution: ScrollResolutionPolicy::OnMount,
        }
    }

    pub fn render_item(mut self, render: impl Fn(RenderItemParams<'_, T>) + 'static) -> Self {
        self.render_item = Some(Rc::new(render));
        self
    }

    pub fn on_drag_begin(mut self, callback: impl Fn(usize) + 'static) -> Self {
        self.on_drag_begin = Some(Rc::new(callback));
        self
    }

    pub fn on_drag_end(mut self, callback: impl Fn(DragEndParams<'_, T>) + 'static) -> Self {
        self.on_drag_end = Some(Rc::new(callback));
        self
    }

    pub fn on_place_item(mut self, callback: impl Fn(&T, usize, usize) + 'static) -> Self {
        self.on_place_item = Some(Rc::new(callback));
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn activation_distance(mut self, distance: f32) -> Self {
        self.activation_distance = distance;
        self
    }

    pub fn drag_hit_slop(mut self, slop: f32) -> Self {
        self.drag_hit_slop = slop;
        self
    }

    pub fn autoscroll(mut self, threshold: f32, speed: f32) -> Self {
        self.autoscroll_threshold = threshold;
        self.autoscroll_speed = speed;
        self
    }

    pub fn drag_item_overflow(mut self, overflow: bool) -> Self {
        self.drag_item_overflow = overflow;
        self
    }

    pub fn scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    pub fn outer_scroll_enabled(mut self, enabled: bool) -> Self {
        self.outer_scroll_enabled = enabled;
        self
    }

    pub fn animation(mut self, overrides: SpringOverride) -> Self {
        self.animation = Some(overrides);
        self
    }

    pub fn scroll_resolution(mut self, policy: ScrollResolutionPolicy) -> Self {
        self.scroll_resolution = policy;
        self
    }

    pub fn resolved_spring(&self) -> SpringConfig {
        SpringConfig::resolve(self.animation.as_ref())
    }
}

impl<T> fmt::Debug for ListConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListConfig")
            .field("rows", &self.data.len())
            .field("horizontal", &self.horizontal)
            .field("activation_distance", &self.activation_distance)
            .field("drag_hit_slop", &self.drag_hit_slop)
            .field("autoscroll_threshold", &self.autoscroll_threshold)
            .field("autoscroll_speed", &self.autoscroll_speed)
            .field("drag_item_overflow", &self.drag_item_overflow)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("outer_scroll_enabled", &self.outer_scroll_enabled)
            .field("animation", &self.animation)
            .field("scroll_resolution", &self.scroll_resolution)
            .finish_non_exhaustive()
    }
}
