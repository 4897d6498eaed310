//! # slipsheet
//!
//! Backend-agnostic drawer sheet engine.
//!
//! A drawer sheet is an interactive panel anchored to one screen edge
//! that slides open over other content. This crate owns the geometry,
//! gesture, and state logic with zero dependencies on any windowing or
//! graphics API: the host feeds it pointer events and container bounds,
//! and applies the resulting extent back into its own layout.
//!
//! ## Core Types
//!
//! - [`DrawerSheet`] - the drawer controller: state, configuration,
//!   listeners
//! - [`Edge`] - the anchor edge and all edge-specific geometry
//! - [`DrawerGesture`] - drag/fling state machine driving a drawer
//!
//! ## Input
//!
//! - [`PointerEvent`] - backend-agnostic pointer vocabulary
//! - [`Fling`] - a fling recognized by the host from the same stream
//!
//! ## Notifications
//!
//! - [`InteractionListener`] - before/after open and close callbacks
//! - [`ResizeListener`] - every extent change, implemented by any
//!   `FnMut(f32)`
//!
//! ## Host Integration
//!
//! - [`ContentId`] - opaque handles for content placed in the sheet
//! - [`EdgeInsets`] - padding/shadow placement the host applies
//! - [`DrawerSheet::save_state`] / [`DrawerSheet::restore_state`] -
//!   flat scalar persistence across host lifecycle boundaries

mod content;
mod drawer;
mod edge;
mod gesture;
mod listener;
mod saved_state;

pub use content::*;
pub use drawer::*;
pub use edge::*;
pub use gesture::*;
pub use listener::*;
