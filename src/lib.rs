//! Drag-to-resize panes for terminal user interfaces.
//!
//! A [`ResizeComponent`] wraps arbitrary child content and lets the user
//! drag one or more edges of its rectangle to change its width and/or
//! height, with per-axis minimum sizes, live and end-of-gesture callbacks,
//! and click-vs-drag disambiguation. Shared pointer chrome (cursor hint,
//! selection suppression) is bracketed around each gesture and restored
//! verbatim afterwards.

pub mod chrome;
pub mod component;
pub mod constants;
pub mod edge;
pub mod handles;
pub mod resize;
pub mod session;
pub mod size;
pub mod tracing_sub;
pub mod ui;

pub use chrome::{ChromeOverride, ChromeState, ResizeCursor};
pub use component::Component;
pub use edge::{Axis, EdgeSpec, ParseEdgeError, ResizeEdge};
pub use resize::ResizeComponent;
pub use size::{MinSize, Size};
pub use ui::UiFrame;
