//! Shared pointer chrome: the cursor hint and selection suppression that a
//! resize drag imposes on the whole application for the session's lifetime.
//!
//! The host owns one `ChromeState`. A drag session snapshots whatever
//! override is in effect when it starts, installs its own, and restores the
//! snapshot verbatim when it ends. Restoring a `None` snapshot removes the
//! override entirely rather than leaving an empty one behind, so repeated
//! gestures cannot accumulate stale chrome.

use crate::edge::Axis;

/// Cursor hint shown while a resize drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCursor {
    /// Horizontal double arrow, width-axis drags.
    EwResize,
    /// Vertical double arrow, height-axis drags.
    NsResize,
}

impl ResizeCursor {
    pub const fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Width => ResizeCursor::EwResize,
            Axis::Height => ResizeCursor::NsResize,
        }
    }

    /// Glyph a status line can display while the cursor is in effect.
    pub const fn glyph(self) -> &'static str {
        match self {
            ResizeCursor::EwResize => "↔",
            ResizeCursor::NsResize => "↕",
        }
    }
}

/// One transient override of the application-wide pointer chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeOverride {
    pub cursor: ResizeCursor,
    pub selection_disabled: bool,
}

/// Application-wide pointer chrome. The active drag session is the sole
/// writer while it runs.
#[derive(Debug, Default)]
pub struct ChromeState {
    active: Option<ChromeOverride>,
}

impl ChromeState {
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// The current override, captured verbatim for later restoration.
    pub fn snapshot(&self) -> Option<ChromeOverride> {
        self.active
    }

    pub fn set(&mut self, chrome: ChromeOverride) {
        self.active = Some(chrome);
    }

    /// Reinstate a snapshot taken by `snapshot`. `None` clears the
    /// override entirely.
    pub fn restore(&mut self, saved: Option<ChromeOverride>) {
        self.active = saved;
    }

    pub fn cursor(&self) -> Option<ResizeCursor> {
        self.active.map(|chrome| chrome.cursor)
    }

    /// Whether text selection is currently allowed. Selection-capable
    /// components consult this before tracking their own drags.
    pub fn selection_enabled(&self) -> bool {
        !self
            .active
            .map(|chrome| chrome.selection_disabled)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_none_clears_override() {
        let mut chrome = ChromeState::new();
        let saved = chrome.snapshot();
        chrome.set(ChromeOverride {
            cursor: ResizeCursor::EwResize,
            selection_disabled: true,
        });
        assert!(!chrome.selection_enabled());
        chrome.restore(saved);
        assert!(chrome.snapshot().is_none());
        assert!(chrome.selection_enabled());
        assert_eq!(chrome.cursor(), None);
    }

    #[test]
    fn restore_reapplies_prior_override_verbatim() {
        let mut chrome = ChromeState::new();
        let prior = ChromeOverride {
            cursor: ResizeCursor::NsResize,
            selection_disabled: false,
        };
        chrome.set(prior);
        let saved = chrome.snapshot();
        chrome.set(ChromeOverride {
            cursor: ResizeCursor::EwResize,
            selection_disabled: true,
        });
        chrome.restore(saved);
        assert_eq!(chrome.snapshot(), Some(prior));
        assert_eq!(chrome.cursor(), Some(ResizeCursor::NsResize));
    }

    #[test]
    fn cursor_matches_axis() {
        assert_eq!(ResizeCursor::for_axis(Axis::Width), ResizeCursor::EwResize);
        assert_eq!(ResizeCursor::for_axis(Axis::Height), ResizeCursor::NsResize);
    }
}
