//! Shared crate-wide constants.

use std::time::Duration;

/// Minimum wall-clock duration a gesture must exceed before its final size
/// is committed and the end callback fires.
///
/// A pointer press-and-release on a handle strip that finishes at or under
/// this threshold is treated as an accidental click: the pane keeps
/// whatever live size the gesture produced, but nothing is committed and
/// no end notification is delivered.
pub const CLICK_DRAG_THRESHOLD: Duration = Duration::from_millis(150);

/// Thickness, in terminal cells, of the drag-sensitive strip rendered
/// along each resolved edge.
pub const HANDLE_THICKNESS: u16 = 1;
