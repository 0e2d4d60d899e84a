//! Viewer model for a virtual tour: the active scene, its hotspot markers,
//! floor navigation and the open/closed state of the overlays.
//!
//! Nothing here touches the DOM. The host feeds input and measurements in
//! and renders what comes back.

pub mod config;
pub mod floors;
pub mod hotspot;
pub mod panels;
pub mod swipe;
pub mod text;
pub mod viewer;

pub use config::*;
pub use floors::*;
pub use hotspot::*;
pub use panels::*;
pub use swipe::*;
pub use text::*;
pub use viewer::*;
