use std::time::Instant;

use crossterm::event::{Event, MouseEvent, MouseEventKind};

use crate::chrome::ChromeOverride;
use crate::constants::CLICK_DRAG_THRESHOLD;
use crate::edge::{Axis, ResizeEdge};

/// Ephemeral state for one drag gesture, created on pointer-down and
/// destroyed on gesture end. At most one session is live per component.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub(crate) edge: ResizeEdge,
    /// Pointer coordinate along the session axis at gesture start.
    pub(crate) start_coord: u16,
    /// Rendered size along the session axis at gesture start, read from
    /// the live rectangle rather than from committed state.
    pub(crate) baseline: u16,
    pub(crate) started: Instant,
    /// Pointer chrome in effect before the gesture, restored verbatim on
    /// gesture end.
    pub(crate) saved_chrome: Option<ChromeOverride>,
}

impl DragSession {
    pub(crate) fn new(
        edge: ResizeEdge,
        start_coord: u16,
        baseline: u16,
        saved_chrome: Option<ChromeOverride>,
    ) -> Self {
        Self {
            edge,
            start_coord,
            baseline,
            started: Instant::now(),
            saved_chrome,
        }
    }

    pub(crate) fn axis(&self) -> Axis {
        self.edge.axis()
    }

    /// Pointer coordinate of `mouse` along the session axis.
    pub(crate) fn coord_of(&self, mouse: &MouseEvent) -> u16 {
        match self.axis() {
            Axis::Width => mouse.column,
            Axis::Height => mouse.row,
        }
    }

    /// Candidate size for the current pointer position. Signed: shrinking
    /// past zero and growing past the viewport are clamped by the caller.
    pub(crate) fn candidate_size(&self, coord: u16) -> i32 {
        let delta = coord as i32 - self.start_coord as i32;
        if self.edge.grows_with_pointer() {
            self.baseline as i32 + delta
        } else {
            self.baseline as i32 - delta
        }
    }

    /// Whether the gesture ran long enough to count as a deliberate
    /// resize rather than an accidental click.
    pub(crate) fn is_deliberate(&self) -> bool {
        self.started.elapsed() > CLICK_DRAG_THRESHOLD
    }
}

/// Internal drag signal, multiplexed from the external event channels so
/// the controller handles each class of trigger exactly once.
///
/// Move-class: `MouseEventKind::Drag` and `MouseEventKind::Moved`.
/// End-class: `MouseEventKind::Up` (carries the final coordinate) and
/// `Event::FocusLost` (no coordinate; closes a gesture whose release the
/// terminal never delivered).
#[derive(Debug, Clone, Copy)]
pub enum DragSignal<'a> {
    Move(&'a MouseEvent),
    End(Option<&'a MouseEvent>),
}

pub fn classify(event: &Event) -> Option<DragSignal<'_>> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(DragSignal::Move(mouse)),
            MouseEventKind::Up(_) => Some(DragSignal::End(Some(mouse))),
            _ => None,
        },
        Event::FocusLost => Some(DragSignal::End(None)),
        _ => None,
    }
}
