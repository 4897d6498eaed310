//! The drawer sheet controller
//!
//! [`DrawerSheet`] owns the drawer's configuration, its open/closed
//! state, the extent derived from the host's container bounds, and the
//! listener registries. It is driven either by explicit API calls or by
//! [`DrawerGesture`](crate::DrawerGesture) feeding it pointer input; the
//! host reads back [`DrawerSheet::current_size`] and applies it to its
//! own layout.

use glam::Vec2;
use log::debug;

use crate::content::{ContentArea, ContentId};
use crate::edge::{Edge, EdgeInsets};
use crate::listener::{InteractionListener, ListenerId, Registry, ResizeListener};

/// Whether the drawer is at its closed or open steady state.
///
/// The state only changes at drag release, fling completion, or an
/// explicit open/close call — never continuously during a drag, even
/// though the extent wanders between the two steady states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerState {
    Closed,
    Open,
}

/// Scalar configuration for a drawer sheet.
///
/// None of these values are validated; a nonsensical combination (say, a
/// minimum opening size larger than the container) produces a drawer
/// that is merely awkward to operate, never a panic. Changing a value
/// does not resize anything by itself — only future interactions read
/// the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    /// Extent that stays visible when the drawer is closed, in logical
    /// pixels.
    pub offset: f32,
    /// When true the offset region is hidden via content padding instead
    /// of being drawn; the drawer can still be grabbed there.
    pub invisible_offset: bool,
    /// How far past fully-closed a release must reach before the drawer
    /// snaps fully open.
    pub min_opening_size: f32,
    /// How small a release must leave the drawer before it snaps fully
    /// closed.
    pub min_closing_size: f32,
    /// Snap to the nearest endpoint around the container midpoint,
    /// overriding the min-open/min-close thresholds.
    pub sticky_drag: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            invisible_offset: false,
            min_opening_size: 0.0,
            min_closing_size: 0.0,
            sticky_drag: true,
        }
    }
}

impl DrawerConfig {
    /// Set the closed-state visible extent.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set whether the offset region is hidden.
    pub fn with_invisible_offset(mut self, invisible: bool) -> Self {
        self.invisible_offset = invisible;
        self
    }

    /// Set the minimum opening size.
    pub fn with_min_opening_size(mut self, size: f32) -> Self {
        self.min_opening_size = size;
        self
    }

    /// Set the minimum closing size.
    pub fn with_min_closing_size(mut self, size: f32) -> Self {
        self.min_closing_size = size;
        self
    }

    /// Enable or disable sticky drag.
    pub fn with_sticky_drag(mut self, sticky: bool) -> Self {
        self.sticky_drag = sticky;
        self
    }
}

/// An edge-anchored sliding panel.
pub struct DrawerSheet {
    edge: Edge,
    config: DrawerConfig,
    state: DrawerState,
    bounds: Vec2,
    full_extent: f32,
    current_size: f32,
    content: ContentArea,
    interaction_listeners: Registry<dyn InteractionListener>,
    resize_listeners: Registry<dyn ResizeListener>,
}

impl Default for DrawerSheet {
    fn default() -> Self {
        Self::new(Edge::default())
    }
}

impl DrawerSheet {
    /// Create a closed drawer anchored to `edge` with default
    /// configuration.
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            config: DrawerConfig::default(),
            state: DrawerState::Closed,
            bounds: Vec2::ZERO,
            full_extent: 0.0,
            current_size: 0.0,
            content: ContentArea::default(),
            interaction_listeners: Registry::new(),
            resize_listeners: Registry::new(),
        }
    }

    /// Replace the whole configuration at construction time.
    pub fn with_config(mut self, config: DrawerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder form of [`DrawerSheet::set_offset`].
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.config.offset = offset;
        self
    }

    /// Builder form of [`DrawerSheet::set_invisible_offset`].
    pub fn with_invisible_offset(mut self, invisible: bool) -> Self {
        self.config.invisible_offset = invisible;
        self
    }

    /// Builder form of [`DrawerSheet::set_min_opening_size`].
    pub fn with_min_opening_size(mut self, size: f32) -> Self {
        self.config.min_opening_size = size;
        self
    }

    /// Builder form of [`DrawerSheet::set_min_closing_size`].
    pub fn with_min_closing_size(mut self, size: f32) -> Self {
        self.config.min_closing_size = size;
        self
    }

    /// Builder form of [`DrawerSheet::set_sticky_drag`].
    pub fn with_sticky_drag(mut self, sticky: bool) -> Self {
        self.config.sticky_drag = sticky;
        self
    }

    // --- configuration access ---

    /// The edge this drawer is anchored to.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Re-anchor the drawer. Takes effect immediately for all subsequent
    /// geometry; the extent derived from the current bounds is
    /// recomputed.
    pub fn set_edge(&mut self, edge: Edge) -> &mut Self {
        self.edge = edge;
        self.full_extent = edge.extent_of(self.bounds);
        self
    }

    /// The configured closed-state extent.
    pub fn offset(&self) -> f32 {
        self.config.offset
    }

    /// Set the closed-state extent. Only future interactions use it.
    pub fn set_offset(&mut self, offset: f32) -> &mut Self {
        self.config.offset = offset;
        self
    }

    /// Whether the offset region is hidden behind content padding.
    pub fn invisible_offset(&self) -> bool {
        self.config.invisible_offset
    }

    /// Set whether the offset region is hidden.
    pub fn set_invisible_offset(&mut self, invisible: bool) -> &mut Self {
        self.config.invisible_offset = invisible;
        self
    }

    /// The minimum opening size.
    pub fn min_opening_size(&self) -> f32 {
        self.config.min_opening_size
    }

    /// Set the minimum opening size.
    pub fn set_min_opening_size(&mut self, size: f32) -> &mut Self {
        self.config.min_opening_size = size;
        self
    }

    /// The minimum closing size.
    pub fn min_closing_size(&self) -> f32 {
        self.config.min_closing_size
    }

    /// Set the minimum closing size.
    pub fn set_min_closing_size(&mut self, size: f32) -> &mut Self {
        self.config.min_closing_size = size;
        self
    }

    /// Whether sticky drag is enabled.
    pub fn sticky_drag(&self) -> bool {
        self.config.sticky_drag
    }

    /// Enable or disable sticky drag.
    pub fn set_sticky_drag(&mut self, sticky: bool) -> &mut Self {
        self.config.sticky_drag = sticky;
        self
    }

    /// The full configuration record.
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    // --- geometry ---

    /// The container bounds last reported by the host.
    pub fn container_bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Report the measured size of the drawer's container. Call on every
    /// size change of the outer container; the full extent is derived
    /// from it, never persisted.
    pub fn set_container_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.full_extent = self.edge.extent_of(bounds);
    }

    /// The maximum extent along the sizing axis.
    pub fn full_extent(&self) -> f32 {
        self.full_extent
    }

    /// The drawer's present extent along the sizing axis. During a drag
    /// this wanders between the two steady states.
    pub fn current_size(&self) -> f32 {
        self.current_size
    }

    /// Padding the host should apply inside the sheet so an invisible
    /// offset stays grabbable without being seen. Zero when the offset
    /// is visible.
    pub fn content_padding(&self) -> EdgeInsets {
        if self.config.invisible_offset {
            self.edge.content_padding(self.config.offset)
        } else {
            EdgeInsets::ZERO
        }
    }

    /// Margin the host should reserve for the sheet's drop shadow. Zero
    /// when the offset is invisible, since there is nothing to cast one.
    pub fn shadow_margin(&self) -> EdgeInsets {
        if self.config.invisible_offset {
            EdgeInsets::ZERO
        } else {
            self.edge.shadow_margin()
        }
    }

    // --- state transitions ---

    /// Whether the drawer is currently open.
    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// The drawer's steady-state classification.
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Open the drawer and notify listeners.
    ///
    /// Idempotent: when already open the full extent is re-applied but
    /// no listener fires.
    pub fn open(&mut self) {
        let changing = self.state != DrawerState::Open;
        if changing {
            self.notify_interaction(true, true);
        }
        self.current_size = self.full_extent;
        if changing {
            self.state = DrawerState::Open;
            debug!("drawer opened to {}", self.full_extent);
            self.notify_resized(self.full_extent);
            self.notify_interaction(true, false);
        }
    }

    /// Close the drawer and notify listeners.
    ///
    /// Idempotent in the same way as [`DrawerSheet::open`].
    pub fn close(&mut self) {
        self.close_with_notify(true);
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.state == DrawerState::Closed {
            self.open();
        } else {
            self.close();
        }
    }

    /// Settle the drawer into its steady state after the first layout
    /// pass. A closed drawer takes its offset extent without any
    /// listener firing; an open drawer is left for an explicit call.
    pub fn settle(&mut self) {
        if self.state == DrawerState::Closed {
            self.close_with_notify(false);
        }
    }

    fn close_with_notify(&mut self, notify: bool) {
        let changing = notify && self.state != DrawerState::Closed;
        if changing {
            self.notify_interaction(false, true);
        }
        self.current_size = self.config.offset;
        if changing {
            self.state = DrawerState::Closed;
            debug!("drawer closed to {}", self.config.offset);
            self.notify_resized(self.config.offset);
            self.notify_interaction(false, false);
        } else {
            self.state = DrawerState::Closed;
        }
    }

    /// Restore persisted scalar state. Used by the saved-state codec.
    pub(crate) fn apply_restored(&mut self, state: DrawerState, edge: Edge, config: DrawerConfig) {
        self.state = state;
        self.set_edge(edge);
        self.config = config;
    }

    /// Continuous drag resize: applies the clamped extent and broadcasts
    /// it shifted by the offset, with no state transition.
    pub(crate) fn apply_drag_size(&mut self, size: f32) {
        self.current_size = size;
        self.notify_resized(size + self.config.offset);
    }

    /// Terminal gesture application: release or fling decided on
    /// `target` at `size`. Listener ordering is before → apply → resize
    /// → after, with the lifecycle pairs skipped when the state did not
    /// actually change.
    pub(crate) fn finish_gesture(&mut self, target: DrawerState, size: f32) {
        let changing = target != self.state;
        if changing {
            self.notify_interaction(target == DrawerState::Open, true);
        }
        self.state = target;
        self.current_size = size;
        self.notify_resized(size + self.config.offset);
        if changing {
            self.notify_interaction(target == DrawerState::Open, false);
        }
    }

    // --- listeners ---

    /// Register an open/close lifecycle listener. Listeners are notified
    /// in registration order; registering twice notifies twice.
    pub fn add_interaction_listener(
        &mut self,
        listener: Box<dyn InteractionListener>,
    ) -> ListenerId {
        self.interaction_listeners.add(listener)
    }

    /// Remove a previously registered lifecycle listener.
    pub fn remove_interaction_listener(&mut self, id: ListenerId) -> bool {
        self.interaction_listeners.remove(id)
    }

    /// Register a resize listener. `FnMut(f32)` closures implement
    /// [`ResizeListener`] directly.
    pub fn add_resize_listener(&mut self, listener: Box<dyn ResizeListener>) -> ListenerId {
        self.resize_listeners.add(listener)
    }

    /// Remove a previously registered resize listener.
    pub fn remove_resize_listener(&mut self, id: ListenerId) -> bool {
        self.resize_listeners.remove(id)
    }

    fn notify_interaction(&mut self, open: bool, before: bool) {
        for listener in self.interaction_listeners.iter_mut() {
            match (open, before) {
                (true, true) => listener.before_opened(),
                (true, false) => listener.after_opened(),
                (false, true) => listener.before_closed(),
                (false, false) => listener.after_closed(),
            }
        }
    }

    fn notify_resized(&mut self, size: f32) {
        for listener in self.resize_listeners.iter_mut() {
            listener.resized(size);
        }
    }

    // --- content ---

    /// Place host content inside the drawer. Insertion is always
    /// redirected into the inner content area, never the drawer's root.
    pub fn add_content(&mut self, child: ContentId) {
        self.content.push(child);
    }

    /// Layout-in-progress insertion is not supported; the call is
    /// refused and the content is dropped.
    pub fn add_content_in_layout(&mut self, _child: ContentId) -> bool {
        false
    }

    /// Remove a piece of content. Returns false if it was not present.
    pub fn remove_content(&mut self, child: &ContentId) -> bool {
        self.content.remove(child)
    }

    /// The inner content area's children in insertion order.
    pub fn content(&self) -> &[ContentId] {
        self.content.children()
    }
}
