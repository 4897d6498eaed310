//! Pointer-driven drag and fling handling
//!
//! An explicit state machine over four pointer events plus one
//! host-derived fling record. The drag session is an explicit
//! `Option` that exists only between pointer-down and pointer-up or
//! cancel; a fresh pointer-down always replaces whatever stale session a
//! lost gesture may have left behind.
//!
//! The machine never decides geometry itself: it asks the drawer's
//! [`Edge`](crate::Edge) to project raw positions into a size along the
//! sizing axis, applies the clamping and snap policy, and drives the
//! [`DrawerSheet`] with the result.

use glam::Vec2;
use log::{debug, trace};

use crate::drawer::{DrawerSheet, DrawerState};

/// A single pointer event in container coordinates.
///
/// Hosts translate whatever their input layer produces (touch, mouse
/// drag) into this vocabulary and feed it to [`DrawerGesture`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary pointer went down on the sheet.
    Down { position: Vec2 },
    /// Pointer moved while down.
    Move { position: Vec2 },
    /// Pointer lifted, ending the gesture.
    Up { position: Vec2 },
    /// The gesture was taken away (window lost focus, another widget
    /// captured the pointer). Drops the session without a snap decision.
    Cancel,
}

/// A fling derived by the host's gesture recognizer from the same
/// pointer stream: where the gesture started and ended, and the pointer
/// velocity at release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    pub start: Vec2,
    pub end: Vec2,
    pub velocity: Vec2,
}

/// State captured at pointer-down and held constant for one gesture:
/// the signed difference between the drawer's size at drag start and the
/// projected touch position, so the sheet tracks the finger instead of
/// jumping to it.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    touch_offset: f32,
}

/// Translates raw pointer events into drawer resizes and snap
/// decisions for one [`DrawerSheet`].
#[derive(Debug, Default)]
pub struct DrawerGesture {
    session: Option<DragSession>,
}

impl DrawerGesture {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Whether a drag session is currently active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pointer event into the state machine.
    pub fn handle_event(&mut self, drawer: &mut DrawerSheet, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => {
                let projected = drawer
                    .edge()
                    .project_touch(position, drawer.container_bounds());
                // current_size, not the steady state: a prior gesture may
                // have left the sheet mid-flight.
                self.session = Some(DragSession {
                    touch_offset: drawer.current_size() - projected,
                });
            }
            PointerEvent::Move { position } => {
                if let Some(session) = self.session {
                    let raw = drawer
                        .edge()
                        .project_touch(position, drawer.container_bounds())
                        + session.touch_offset;
                    let size = raw.max(drawer.offset()).min(drawer.full_extent());
                    trace!("drag resize to {size}");
                    drawer.apply_drag_size(size);
                }
            }
            PointerEvent::Up { position } => {
                if let Some(session) = self.session.take() {
                    let raw = drawer
                        .edge()
                        .project_touch(position, drawer.container_bounds())
                        + session.touch_offset;
                    Self::release(drawer, raw);
                }
            }
            PointerEvent::Cancel => {
                self.session = None;
            }
        }
    }

    /// Apply the release-time snap policy.
    ///
    /// The released size is deliberately not clamped first, and both
    /// branches run unconditionally, with the second reading whatever the
    /// first left in `size`, so a configuration that satisfies both has
    /// the open branch win. Inherited behavior, pinned by tests.
    fn release(drawer: &mut DrawerSheet, mut size: f32) {
        let mut target = drawer.state();
        if size <= drawer.min_closing_size()
            || (drawer.sticky_drag() && size < drawer.full_extent() / 2.0)
        {
            size = drawer.offset();
            target = DrawerState::Closed;
        }
        if size >= drawer.full_extent() - drawer.min_opening_size()
            || (drawer.sticky_drag() && size >= drawer.full_extent() / 2.0)
        {
            size = drawer.full_extent();
            target = DrawerState::Open;
        }
        if target != drawer.state() {
            debug!("release snapped {:?} at {size}", target);
        }
        drawer.finish_gesture(target, size);
    }

    /// Feed a recognized fling.
    ///
    /// Returns true when the fling matched this drawer's edge and was
    /// applied; the host must then skip delivering the trailing
    /// pointer-up to [`DrawerGesture::handle_event`]. Returns false for
    /// a fling in neither direction, leaving normal release processing
    /// to run.
    pub fn handle_fling(&mut self, drawer: &mut DrawerSheet, fling: Fling) -> bool {
        let edge = drawer.edge();
        let (target, size) = if edge.is_fling_to_close(fling.start, fling.end, fling.velocity) {
            (DrawerState::Closed, drawer.offset())
        } else if edge.is_fling_to_open(fling.start, fling.end, fling.velocity) {
            (DrawerState::Open, drawer.full_extent())
        } else {
            return false;
        };

        self.session = None;
        debug!("fling snapped {:?} at {size}", target);
        drawer.finish_gesture(target, size);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bottom_drawer(sticky: bool) -> DrawerSheet {
        // offset 20, full extent 300, thresholds 10.
        let mut drawer = DrawerSheet::new(Edge::Bottom)
            .with_offset(20.0)
            .with_min_opening_size(10.0)
            .with_min_closing_size(10.0)
            .with_sticky_drag(sticky);
        drawer.set_container_bounds(Vec2::new(400.0, 300.0));
        drawer.settle();
        drawer
    }

    /// Runs a down/move/up sequence whose final projected size is `raw`,
    /// with the pointer starting on the anchor so touch_offset equals
    /// the current size.
    fn drag_to(drawer: &mut DrawerSheet, gesture: &mut DrawerGesture, raw: f32) {
        let bounds = drawer.container_bounds();
        let start = drawer.current_size();
        // Bottom edge: size s projects from y = bounds.y - s.
        let at = |size: f32| Vec2::new(0.0, bounds.y - size);
        gesture.handle_event(drawer, PointerEvent::Down { position: at(start) });
        gesture.handle_event(drawer, PointerEvent::Move { position: at(raw) });
        gesture.handle_event(drawer, PointerEvent::Up { position: at(raw) });
    }

    #[test]
    fn drag_is_clamped_to_offset_and_full_extent() {
        for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
            let mut drawer = DrawerSheet::new(edge).with_offset(20.0);
            drawer.set_container_bounds(Vec2::new(400.0, 300.0));
            drawer.settle();
            let mut gesture = DrawerGesture::new();

            let sizes = Rc::new(RefCell::new(Vec::new()));
            {
                let sizes = Rc::clone(&sizes);
                drawer.add_resize_listener(Box::new(move |size: f32| {
                    sizes.borrow_mut().push(size)
                }));
            }

            gesture.handle_event(&mut drawer, PointerEvent::Down { position: Vec2::ZERO });
            // Sweep the pointer well past both ends of the container.
            for step in -20..40 {
                let coord = step as f32 * 25.0;
                gesture.handle_event(
                    &mut drawer,
                    PointerEvent::Move {
                        position: Vec2::new(coord, coord),
                    },
                );
                let size = drawer.current_size();
                assert!(
                    (20.0..=drawer.full_extent()).contains(&size),
                    "{edge:?}: size {size} escaped the clamp"
                );
            }
            // Broadcast payloads are the clamped size shifted by the offset.
            for payload in sizes.borrow().iter() {
                assert!((40.0..=drawer.full_extent() + 20.0).contains(payload));
            }
            gesture.handle_event(&mut drawer, PointerEvent::Cancel);
        }
    }

    #[test]
    fn top_and_bottom_drags_are_symmetric() {
        let bounds = Vec2::new(400.0, 300.0);
        let mut top = DrawerSheet::new(Edge::Top).with_offset(20.0).with_sticky_drag(false);
        let mut bottom = DrawerSheet::new(Edge::Bottom).with_offset(20.0).with_sticky_drag(false);
        for drawer in [&mut top, &mut bottom] {
            drawer.set_container_bounds(bounds);
            drawer.settle();
        }

        let mut gesture = DrawerGesture::new();
        // Grab each sheet at its lip and pull 80 px toward open.
        gesture.handle_event(&mut top, PointerEvent::Down { position: Vec2::new(0.0, 20.0) });
        gesture.handle_event(&mut top, PointerEvent::Move { position: Vec2::new(0.0, 100.0) });

        let mut gesture_bottom = DrawerGesture::new();
        gesture_bottom.handle_event(
            &mut bottom,
            PointerEvent::Down { position: Vec2::new(0.0, bounds.y - 20.0) },
        );
        gesture_bottom.handle_event(
            &mut bottom,
            PointerEvent::Move { position: Vec2::new(0.0, bounds.y - 100.0) },
        );

        assert_eq!(top.current_size(), bottom.current_size());
        assert_eq!(top.current_size(), 100.0);
    }

    #[test]
    fn sticky_release_snaps_around_midpoint() {
        let mut gesture = DrawerGesture::new();

        let mut drawer = bottom_drawer(true);
        drag_to(&mut drawer, &mut gesture, 149.0);
        assert!(!drawer.is_open());
        assert_eq!(drawer.current_size(), 20.0);

        let mut drawer = bottom_drawer(true);
        drag_to(&mut drawer, &mut gesture, 150.0);
        assert!(drawer.is_open());
        assert_eq!(drawer.current_size(), 300.0);
    }

    #[test]
    fn release_past_min_opening_size_opens() {
        // 290 >= full(300) - min_open(10), so the release snaps open.
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let mut drawer = bottom_drawer(false);
        {
            let sizes = Rc::clone(&sizes);
            drawer.add_resize_listener(Box::new(move |size: f32| sizes.borrow_mut().push(size)));
        }
        let mut gesture = DrawerGesture::new();
        drag_to(&mut drawer, &mut gesture, 290.0);

        assert!(drawer.is_open());
        assert_eq!(drawer.current_size(), 300.0);
        // Final broadcast is full extent + offset.
        assert_eq!(sizes.borrow().last().copied(), Some(320.0));
    }

    #[test]
    fn non_sticky_midrange_release_leaves_drawer_in_place() {
        let mut drawer = bottom_drawer(false);
        let mut gesture = DrawerGesture::new();
        drag_to(&mut drawer, &mut gesture, 150.0);

        assert!(!drawer.is_open(), "no threshold crossed, state untouched");
        assert_eq!(drawer.current_size(), 150.0);
    }

    #[test]
    fn release_size_is_not_reclamped() {
        // Moves clamp to [offset, full]; the release value does not.
        // With min_close=10 < raw=15 < offset=20 the sheet settles below
        // its own offset. Inherited behavior, kept as documented.
        let mut drawer = bottom_drawer(false);
        let mut gesture = DrawerGesture::new();
        let bounds = drawer.container_bounds();

        gesture.handle_event(
            &mut drawer,
            PointerEvent::Down { position: Vec2::new(0.0, bounds.y - 20.0) },
        );
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Up { position: Vec2::new(0.0, bounds.y - 15.0) },
        );

        assert!(!drawer.is_open());
        assert_eq!(drawer.current_size(), 15.0);
    }

    #[test]
    fn open_wins_when_both_thresholds_match() {
        // Pathological config: every release closes, but the reassigned
        // offset still satisfies the open test, so open wins.
        let mut drawer = DrawerSheet::new(Edge::Bottom)
            .with_offset(95.0)
            .with_min_closing_size(100.0)
            .with_min_opening_size(80.0)
            .with_sticky_drag(false);
        drawer.set_container_bounds(Vec2::new(400.0, 100.0));
        drawer.settle();

        let mut gesture = DrawerGesture::new();
        // Release at 50: close branch fires (50 <= 100), size becomes 95;
        // open branch then sees 95 >= 100 - 80 and overrides.
        let grab = Vec2::new(0.0, 100.0 - drawer.current_size());
        gesture.handle_event(&mut drawer, PointerEvent::Down { position: grab });
        gesture.handle_event(&mut drawer, PointerEvent::Up { position: Vec2::new(0.0, 50.0) });

        assert!(drawer.is_open());
        assert_eq!(drawer.current_size(), 100.0);
    }

    #[test]
    fn fling_to_open_short_circuits_position() {
        let mut drawer = bottom_drawer(true);
        let mut gesture = DrawerGesture::new();
        let bounds = drawer.container_bounds();

        // Barely dragged, nowhere near the midpoint.
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Down { position: Vec2::new(0.0, bounds.y - 20.0) },
        );
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Move { position: Vec2::new(0.0, bounds.y - 50.0) },
        );

        let consumed = gesture.handle_fling(
            &mut drawer,
            Fling {
                start: Vec2::new(0.0, bounds.y - 20.0),
                end: Vec2::new(0.0, bounds.y - 50.0),
                velocity: Vec2::new(0.0, -800.0),
            },
        );

        assert!(consumed);
        assert!(drawer.is_open());
        assert_eq!(drawer.current_size(), 300.0);
        assert!(!gesture.is_dragging(), "fling ends the session");
    }

    #[test]
    fn unrecognized_fling_is_ignored() {
        let mut drawer = bottom_drawer(true);
        let mut gesture = DrawerGesture::new();

        // Sideways fling on a vertical drawer matches neither predicate.
        let consumed = gesture.handle_fling(
            &mut drawer,
            Fling {
                start: Vec2::new(0.0, 200.0),
                end: Vec2::new(300.0, 200.0),
                velocity: Vec2::new(900.0, 0.0),
            },
        );

        assert!(!consumed);
        assert!(!drawer.is_open());
        assert_eq!(drawer.current_size(), 20.0);
    }

    #[test]
    fn fling_listener_ordering_matches_release() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut drawer = bottom_drawer(true);
        {
            let log = Rc::clone(&log);
            struct Tagger(Rc<RefCell<Vec<String>>>);
            impl crate::InteractionListener for Tagger {
                fn before_opened(&mut self) {
                    self.0.borrow_mut().push("before".into());
                }
                fn after_opened(&mut self) {
                    self.0.borrow_mut().push("after".into());
                }
            }
            drawer.add_interaction_listener(Box::new(Tagger(log)));
        }
        {
            let log = Rc::clone(&log);
            drawer.add_resize_listener(Box::new(move |size: f32| {
                log.borrow_mut().push(format!("resized:{size}"));
            }));
        }

        let mut gesture = DrawerGesture::new();
        gesture.handle_fling(
            &mut drawer,
            Fling {
                start: Vec2::new(0.0, 280.0),
                end: Vec2::new(0.0, 100.0),
                velocity: Vec2::new(0.0, -600.0),
            },
        );

        assert_eq!(*log.borrow(), vec!["before", "resized:320", "after"]);
    }

    #[test]
    fn cancel_drops_the_session() {
        let mut drawer = bottom_drawer(true);
        let mut gesture = DrawerGesture::new();

        gesture.handle_event(&mut drawer, PointerEvent::Down { position: Vec2::new(0.0, 280.0) });
        assert!(gesture.is_dragging());

        gesture.handle_event(&mut drawer, PointerEvent::Cancel);
        assert!(!gesture.is_dragging());

        // Moves and ups after a cancel are inert.
        gesture.handle_event(&mut drawer, PointerEvent::Move { position: Vec2::new(0.0, 100.0) });
        gesture.handle_event(&mut drawer, PointerEvent::Up { position: Vec2::new(0.0, 100.0) });
        assert_eq!(drawer.current_size(), 20.0);
        assert!(!drawer.is_open());
    }

    #[test]
    fn new_down_replaces_stale_session() {
        let mut drawer = bottom_drawer(true);
        let mut gesture = DrawerGesture::new();
        let bounds = drawer.container_bounds();

        // A session whose up was never delivered.
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Down { position: Vec2::new(0.0, bounds.y - 20.0) },
        );
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Move { position: Vec2::new(0.0, bounds.y - 120.0) },
        );

        // The next gesture grabs the sheet where it currently sits.
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Down { position: Vec2::new(0.0, bounds.y - 120.0) },
        );
        gesture.handle_event(
            &mut drawer,
            PointerEvent::Move { position: Vec2::new(0.0, bounds.y - 200.0) },
        );
        assert_eq!(drawer.current_size(), 200.0);
    }
}
