//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to
//! the visible area.
//!
//! A pane mid-drag can be larger than the viewport, and handle strips sit
//! on its outermost cells; routing all draw calls through `UiFrame` keeps
//! out-of-bounds writes from ever reaching the underlying `Buffer`.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Powers
    /// offscreen rendering in tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Write a styled symbol at a cell if it falls inside the visible
    /// area.
    pub fn set_symbol(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if rect_cell_visible(self.area, x, y)
            && let Some(cell) = self.buffer.cell_mut((x, y))
        {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }
}

fn rect_cell_visible(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_symbol_clips_to_visible_area() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        frame.set_symbol(1, 1, "║", Style::default());
        frame.set_symbol(9, 9, "║", Style::default());
        assert_eq!(buffer.cell((1, 1)).unwrap().symbol(), "║");
    }

    #[test]
    fn render_widget_skips_fully_clipped_areas() {
        use ratatui::widgets::Clear;
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        // Entirely outside the viewport; must not panic.
        frame.render_widget(Clear, Rect::new(10, 10, 5, 5));
    }
}
