//! Horizontal pan controller for a scene image inside a fixed viewport.
//!
//! The controller owns the content offset. Pointer input drives a drag
//! session; releasing either hands over to inertial momentum or eases the
//! offset back inside the bounds. Animations are advanced by the host, one
//! [`PanController::tick`] per display frame, so everything here is pure and
//! testable without a timer.

pub mod bounds;
pub mod config;
pub mod controller;
pub mod drag;
pub mod momentum;
pub mod pointer;
pub mod snap;

pub use bounds::*;
pub use config::*;
pub use controller::*;
pub use drag::*;
pub use momentum::*;
pub use pointer::*;
pub use snap::*;
