#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::thread;
    use std::time::Duration;

    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;
    use term_resize::{
        ChromeState, Component, EdgeSpec, MinSize, ResizeComponent, ResizeEdge, Size,
    };

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 400,
        height: 120,
    };

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn down(column: u16, row: u16) -> Event {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn drag(column: u16, row: u16) -> Event {
        mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    fn up(column: u16, row: u16) -> Event {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    fn pane_with_edges(edges: EdgeSpec) -> ResizeComponent {
        let mut pane = ResizeComponent::new().with_edges(edges);
        pane.set_style_size(Some(100), Some(40));
        pane.resize(AREA);
        pane
    }

    #[test]
    fn full_deliberate_drag_commits_and_notifies() {
        let ends: Rc<RefCell<Vec<Rect>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ends);
        let mut pane = ResizeComponent::new()
            .with_edges(EdgeSpec::All)
            .on_resize_end(move |rect| sink.borrow_mut().push(rect));
        pane.set_style_size(Some(100), Some(40));
        pane.resize(AREA);
        let mut chrome = ChromeState::new();

        // Right strip at column 99: grow by 25, slowly enough to count.
        assert!(pane.handle_event(&down(99, 10), &mut chrome));
        assert!(pane.handle_event(&drag(110, 10), &mut chrome));
        thread::sleep(Duration::from_millis(170));
        assert!(pane.handle_event(&up(124, 10), &mut chrome));

        assert_eq!(pane.rect().width, 125);
        assert_eq!(pane.committed_size(), Some(Size::new(125, 40)));
        let calls = ends.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!((calls[0].width, calls[0].height), (125, 40));
    }

    #[test]
    fn quick_click_on_a_handle_is_not_a_resize() {
        let ends: Rc<RefCell<Vec<Rect>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ends);
        let mut pane = ResizeComponent::new()
            .with_edges(EdgeSpec::All)
            .on_resize_end(move |rect| sink.borrow_mut().push(rect));
        pane.set_style_size(Some(100), Some(40));
        pane.resize(AREA);
        let mut chrome = ChromeState::new();

        pane.handle_event(&down(99, 10), &mut chrome);
        pane.handle_event(&up(99, 10), &mut chrome);

        assert_eq!(pane.committed_size(), None);
        assert!(ends.borrow().is_empty());
        assert!(chrome.snapshot().is_none());
    }

    #[test]
    fn all_behaves_like_the_explicit_edge_list_in_any_order() {
        let scripted = EdgeSpec::Many(vec![
            ResizeEdge::Right,
            ResizeEdge::Left,
            ResizeEdge::Bottom,
            ResizeEdge::Top,
        ]);
        for spec in [EdgeSpec::All, scripted] {
            let mut pane = pane_with_edges(spec);
            let mut chrome = ChromeState::new();

            // Bottom strip at row 39: grow height by 7.
            assert!(pane.handle_event(&down(50, 39), &mut chrome));
            assert!(pane.handle_event(&drag(50, 46), &mut chrome));
            pane.handle_event(&up(50, 46), &mut chrome);
            assert_eq!(pane.rect().height, 47);

            // Left strip at column 0: drag rightward shrinks by 4.
            assert!(pane.handle_event(&down(0, 10), &mut chrome));
            assert!(pane.handle_event(&drag(4, 10), &mut chrome));
            pane.handle_event(&up(4, 10), &mut chrome);
            assert_eq!(pane.rect().width, 96);
        }
    }

    #[test]
    fn min_size_keeps_the_pane_strictly_above_the_floor() {
        let mut pane = ResizeComponent::new()
            .with_edges(ResizeEdge::Right)
            .with_min_size(MinSize::new(50, 0));
        pane.set_style_size(Some(200), None);
        pane.resize(AREA);
        let mut chrome = ChromeState::new();

        pane.handle_event(&down(199, 10), &mut chrome);
        for column in (0..200).rev() {
            pane.handle_event(&drag(column, 10), &mut chrome);
        }
        pane.handle_event(&up(0, 10), &mut chrome);

        assert!(pane.rect().width > 50);
        assert_eq!(pane.rect().width, 51);
    }

    #[test]
    fn scalar_min_size_applies_to_both_axes() {
        let mut pane = ResizeComponent::new()
            .with_edges(EdgeSpec::All)
            .with_min_size(10u16);
        pane.set_style_size(Some(100), Some(40));
        pane.resize(AREA);
        let mut chrome = ChromeState::new();

        pane.handle_event(&down(50, 39), &mut chrome);
        pane.handle_event(&drag(50, 0), &mut chrome);
        pane.handle_event(&up(50, 0), &mut chrome);
        assert!(pane.rect().height > 10);
    }

    #[test]
    fn disabled_pane_keeps_chrome_and_size_untouched() {
        let mut pane = ResizeComponent::new()
            .with_edges(EdgeSpec::All)
            .with_disabled(true);
        pane.set_style_size(Some(100), Some(40));
        pane.resize(AREA);
        let mut chrome = ChromeState::new();

        assert!(!pane.handle_event(&down(99, 10), &mut chrome));
        pane.handle_event(&drag(150, 10), &mut chrome);
        pane.handle_event(&up(150, 10), &mut chrome);

        assert_eq!(pane.rect(), Rect::new(0, 0, 100, 40));
        assert!(!pane.is_resizing());
        assert!(chrome.snapshot().is_none());
    }

    #[test]
    fn external_size_wins_over_commit_on_the_next_layout() {
        let mut pane = pane_with_edges(EdgeSpec::All);
        let mut chrome = ChromeState::new();

        pane.handle_event(&down(99, 10), &mut chrome);
        thread::sleep(Duration::from_millis(170));
        pane.handle_event(&up(149, 10), &mut chrome);
        assert_eq!(pane.committed_size(), Some(Size::new(150, 40)));

        pane.set_style_size(Some(80), Some(40));
        pane.resize(AREA);
        assert_eq!(pane.rect().width, 80);
        assert_eq!(pane.committed_size(), None);
    }

    #[test]
    fn live_rect_handle_tracks_the_drag_before_any_commit() {
        let mut pane = pane_with_edges(EdgeSpec::All);
        let mut chrome = ChromeState::new();

        pane.handle_event(&down(99, 10), &mut chrome);
        pane.handle_event(&drag(129, 10), &mut chrome);

        // Queryable mid-gesture, independent of the commit threshold.
        assert!(pane.is_resizing());
        assert_eq!(pane.rect().width, 130);
        assert_eq!(pane.committed_size(), None);
        pane.handle_event(&up(129, 10), &mut chrome);
    }
}
