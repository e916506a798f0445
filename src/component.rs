//! The render-adapter seam between a host event loop and this crate's
//! components.
//!
//! The host drives each component with `resize` when layout changes,
//! `render` every frame, and `handle_event` for every input event. Shared
//! pointer chrome travels alongside so components coordinate on one
//! cursor/selection state instead of ad-hoc flags.

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::chrome::ChromeState;
use crate::ui::UiFrame;

pub trait Component {
    fn resize(&mut self, _area: Rect) {}

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, chrome: &ChromeState);

    /// Returns true when the event was consumed.
    fn handle_event(&mut self, _event: &Event, _chrome: &mut ChromeState) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct DummyComp;
    impl Component for DummyComp {
        fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _chrome: &ChromeState) {}
    }

    #[test]
    fn default_handle_event_returns_false() {
        let mut d = DummyComp;
        let mut chrome = ChromeState::new();
        assert!(!d.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            &mut chrome
        ));
    }
}
