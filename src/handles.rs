use ratatui::layout::Rect;

use crate::constants::HANDLE_THICKNESS;
use crate::edge::ResizeEdge;

/// The drag-sensitive strip rendered along one resolved edge.
#[derive(Debug, Clone, Copy)]
pub struct HandleStrip {
    pub edge: ResizeEdge,
    pub rect: Rect,
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// One full-length strip per resolved edge, in resolution order. Where
/// strips overlap at corners, the first strip in the list wins hit tests.
pub fn handle_strips(rect: Rect, edges: &[ResizeEdge]) -> Vec<HandleStrip> {
    let mut strips = Vec::with_capacity(edges.len());
    if rect.width == 0 || rect.height == 0 {
        return strips;
    }
    let right = rect.x.saturating_add(rect.width.saturating_sub(HANDLE_THICKNESS));
    let bottom = rect.y.saturating_add(rect.height.saturating_sub(HANDLE_THICKNESS));
    for &edge in edges {
        let strip = match edge {
            ResizeEdge::Top => Rect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: HANDLE_THICKNESS,
            },
            ResizeEdge::Bottom => Rect {
                x: rect.x,
                y: bottom,
                width: rect.width,
                height: HANDLE_THICKNESS,
            },
            ResizeEdge::Left => Rect {
                x: rect.x,
                y: rect.y,
                width: HANDLE_THICKNESS,
                height: rect.height,
            },
            ResizeEdge::Right => Rect {
                x: right,
                y: rect.y,
                width: HANDLE_THICKNESS,
                height: rect.height,
            },
        };
        strips.push(HandleStrip { edge, rect: strip });
    }
    strips
}
