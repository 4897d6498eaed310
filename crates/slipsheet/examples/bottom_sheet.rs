//! Bottom sheet simulation
//!
//! Drives a bottom-anchored drawer entirely from code: programmatic
//! open/close, a slow drag past the sticky midpoint, and a fling. Run
//! with `RUST_LOG=debug` to watch the engine's transitions.

use glam::Vec2;
use slipsheet::{
    ContentId, DrawerGesture, DrawerSheet, Edge, Fling, InteractionListener, PointerEvent,
};

struct Announcer;

impl InteractionListener for Announcer {
    fn before_opened(&mut self) {
        log::info!("about to open");
    }
    fn after_opened(&mut self) {
        log::info!("open");
    }
    fn before_closed(&mut self) {
        log::info!("about to close");
    }
    fn after_closed(&mut self) {
        log::info!("closed");
    }
}

fn main() {
    env_logger::init();

    let mut drawer = DrawerSheet::new(Edge::Bottom)
        .with_offset(48.0)
        .with_sticky_drag(true);
    drawer.add_content(ContentId::new("playlist"));
    drawer.add_content(ContentId::new("volume-slider"));
    drawer.add_interaction_listener(Box::new(Announcer));
    drawer.add_resize_listener(Box::new(|size: f32| {
        log::info!("host relayout to {size:.0} px");
    }));

    // First layout pass of a 400x800 window.
    let bounds = Vec2::new(400.0, 800.0);
    drawer.set_container_bounds(bounds);
    drawer.settle();
    log::info!(
        "settled at {} px of {} px, content: {:?}",
        drawer.current_size(),
        drawer.full_extent(),
        drawer.content()
    );

    // A slow drag from the lip past the midpoint, then release.
    let mut gesture = DrawerGesture::new();
    let at = |size: f32| Vec2::new(200.0, bounds.y - size);
    gesture.handle_event(&mut drawer, PointerEvent::Down { position: at(48.0) });
    for size in [120.0, 240.0, 420.0] {
        gesture.handle_event(&mut drawer, PointerEvent::Move { position: at(size) });
    }
    gesture.handle_event(&mut drawer, PointerEvent::Up { position: at(420.0) });
    log::info!("after drag: open = {}", drawer.is_open());

    // Flick it shut.
    gesture.handle_fling(
        &mut drawer,
        Fling {
            start: at(420.0),
            end: at(360.0),
            velocity: Vec2::new(0.0, 950.0),
        },
    );
    log::info!("after fling: open = {}", drawer.is_open());

    drawer.toggle();
    log::info!("after toggle: open = {}", drawer.is_open());
}
