//! The drag-resize pane: a rectangle whose edges can be dragged to change
//! its width and/or height.
//!
//! One component owns one rectangle and at most one live drag session.
//! The session lifecycle is a three-step state machine (Idle → Active →
//! Idle): a pointer-down on a handle strip opens the session, move-class
//! signals update the rectangle live, and an end-class signal restores the
//! shared pointer chrome and — only for gestures that outlast
//! [`CLICK_DRAG_THRESHOLD`](crate::constants::CLICK_DRAG_THRESHOLD) —
//! commits the final size and fires the end callback.

use crossterm::event::{Event, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use tracing::{debug, trace};

use crate::chrome::{ChromeOverride, ChromeState, ResizeCursor};
use crate::component::Component;
use crate::edge::{Axis, EdgeSpec, ResizeEdge};
use crate::handles::{handle_strips, rect_contains};
use crate::session::{DragSession, DragSignal, classify};
use crate::size::{MinSize, Size};
use crate::ui::UiFrame;

type ResizeCallback = Box<dyn FnMut(&MouseEvent)>;
type ResizeEndCallback = Box<dyn FnMut(Rect)>;

pub struct ResizeComponent {
    /// Resolved once per configuration; order decides corner hit tests.
    edges: Vec<ResizeEdge>,
    min_size: MinSize,
    disabled: bool,
    /// Bounds the host granted at the last layout pass.
    area: Rect,
    /// The live rectangle. Mutated only by the drag session while one is
    /// active, otherwise derived from committed/external size.
    rect: Rect,
    /// Size persisted by the last qualifying drag. Cleared whenever the
    /// caller supplies an explicit size, so external styling wins.
    committed: Option<Size>,
    style_width: Option<u16>,
    style_height: Option<u16>,
    session: Option<DragSession>,
    child: Option<Box<dyn Component>>,
    on_resize: Option<ResizeCallback>,
    on_resize_end: Option<ResizeEndCallback>,
}

impl Default for ResizeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeComponent {
    pub fn new() -> Self {
        Self {
            edges: EdgeSpec::default().resolve(),
            min_size: MinSize::default(),
            disabled: false,
            area: Rect::default(),
            rect: Rect::default(),
            committed: None,
            style_width: None,
            style_height: None,
            session: None,
            child: None,
            on_resize: None,
            on_resize_end: None,
        }
    }

    pub fn with_edges(mut self, edges: impl Into<EdgeSpec>) -> Self {
        self.edges = edges.into().resolve();
        self
    }

    pub fn with_min_size(mut self, min_size: impl Into<MinSize>) -> Self {
        self.min_size = min_size.into();
        self
    }

    pub fn with_child(mut self, child: Box<dyn Component>) -> Self {
        self.child = Some(child);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Callback invoked with the raw mouse event on every move-class
    /// signal of an active session, whether or not the clamp let the
    /// rectangle change.
    pub fn on_resize(mut self, callback: impl FnMut(&MouseEvent) + 'static) -> Self {
        self.on_resize = Some(Box::new(callback));
        self
    }

    /// Callback invoked with the final bounding rectangle, only for
    /// gestures that outlast the click threshold.
    pub fn on_resize_end(mut self, callback: impl FnMut(Rect) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(callback));
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Externally supplied size. Whenever the pair changes and at least
    /// one axis is explicitly set, the committed size is dropped so the
    /// external value takes precedence at the next layout pass.
    pub fn set_style_size(&mut self, width: Option<u16>, height: Option<u16>) {
        if (width, height) != (self.style_width, self.style_height) {
            if width.is_some() || height.is_some() {
                self.committed = None;
            }
            self.style_width = width;
            self.style_height = height;
        }
    }

    /// Live handle to the rectangle, independent of the commit threshold.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn committed_size(&self) -> Option<Size> {
        self.committed
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    fn axis_resizable(&self, axis: Axis) -> bool {
        self.edges.iter().any(|edge| edge.axis() == axis)
    }

    /// Desired length along `axis`, if anything pins it. A resizable axis
    /// prefers the committed size over the external one; an axis with no
    /// resolvable edge follows the external size only.
    fn pinned_len(&self, axis: Axis) -> Option<u16> {
        let style = match axis {
            Axis::Width => self.style_width,
            Axis::Height => self.style_height,
        };
        if self.axis_resizable(axis) {
            self.committed.map(|size| size.along(axis)).or(style)
        } else {
            style
        }
    }

    fn layout(&mut self, area: Rect) {
        self.area = area;
        if self.session.is_some() {
            // The live drag owns the size; only re-anchor the origin.
            self.rect.x = area.x;
            self.rect.y = area.y;
            return;
        }
        let width = self.pinned_len(Axis::Width).unwrap_or(area.width);
        let height = self.pinned_len(Axis::Height).unwrap_or(area.height);
        self.rect = Rect {
            x: area.x,
            y: area.y,
            width: width.min(area.width),
            height: height.min(area.height),
        };
    }

    /// Floor-exclusive clamp: the candidate is applied only when strictly
    /// greater than the axis floor, so the rectangle stops one cell of
    /// movement above it rather than landing on it. Bounded above by the
    /// host area.
    fn apply_candidate(&mut self, session: &DragSession, coord: u16) {
        let axis = session.axis();
        let floor = self.min_size.along(axis) as i32;
        let cap = match axis {
            Axis::Width => self.area.width,
            Axis::Height => self.area.height,
        } as i32;
        let candidate = session.candidate_size(coord).min(cap);
        if candidate > floor {
            match axis {
                Axis::Width => self.rect.width = candidate as u16,
                Axis::Height => self.rect.height = candidate as u16,
            }
        }
    }

    fn begin_session(&mut self, edge: ResizeEdge, mouse: &MouseEvent, chrome: &mut ChromeState) {
        let axis = edge.axis();
        let start_coord = match axis {
            Axis::Width => mouse.column,
            Axis::Height => mouse.row,
        };
        // Baseline comes from the live rectangle, not committed state.
        let baseline = match axis {
            Axis::Width => self.rect.width,
            Axis::Height => self.rect.height,
        };
        let saved = chrome.snapshot();
        chrome.set(ChromeOverride {
            cursor: ResizeCursor::for_axis(axis),
            selection_disabled: true,
        });
        trace!(?edge, start_coord, baseline, "resize drag started");
        self.session = Some(DragSession::new(edge, start_coord, baseline, saved));
    }

    fn end_session(
        &mut self,
        session: DragSession,
        mouse: Option<&MouseEvent>,
        chrome: &mut ChromeState,
    ) {
        self.session = None;
        if let Some(mouse) = mouse {
            self.apply_candidate(&session, session.coord_of(mouse));
        }
        chrome.restore(session.saved_chrome);
        if session.is_deliberate() {
            let bounds = self.rect;
            self.committed = Some(Size::new(bounds.width, bounds.height));
            debug!(
                width = bounds.width,
                height = bounds.height,
                "resize drag committed"
            );
            if let Some(callback) = self.on_resize_end.as_mut() {
                callback(bounds);
            }
        } else {
            trace!("resize drag ended below click threshold, not committed");
        }
    }

    fn strip_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for ResizeComponent {
    fn resize(&mut self, area: Rect) {
        self.layout(area);
        if let Some(child) = self.child.as_mut() {
            child.resize(self.rect);
        }
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, chrome: &ChromeState) {
        self.layout(area);
        let rect = self.rect;
        if let Some(child) = self.child.as_mut() {
            child.render(frame, rect, chrome);
        }
        let active_edge = self.session.map(|session| session.edge);
        for strip in handle_strips(rect, &self.edges) {
            let active = active_edge == Some(strip.edge);
            let symbol = match strip.edge.axis() {
                Axis::Height => {
                    if active {
                        "═"
                    } else {
                        "─"
                    }
                }
                Axis::Width => {
                    if active {
                        "║"
                    } else {
                        "│"
                    }
                }
            };
            let style = self.strip_style(active);
            let x_end = strip.rect.x.saturating_add(strip.rect.width);
            let y_end = strip.rect.y.saturating_add(strip.rect.height);
            for y in strip.rect.y..y_end {
                for x in strip.rect.x..x_end {
                    frame.set_symbol(x, y, symbol, style);
                }
            }
        }
    }

    fn handle_event(&mut self, event: &Event, chrome: &mut ChromeState) -> bool {
        if let Some(session) = self.session {
            // Active: capture every move/end signal wherever the pointer
            // is, since it may have left the strip mid-gesture. A second
            // pointer-down is ignored; the session keeps its baseline.
            return match classify(event) {
                Some(DragSignal::Move(mouse)) => {
                    self.apply_candidate(&session, session.coord_of(mouse));
                    if let Some(callback) = self.on_resize.as_mut() {
                        callback(mouse);
                    }
                    true
                }
                Some(DragSignal::End(mouse)) => {
                    self.end_session(session, mouse, chrome);
                    true
                }
                None => false,
            };
        }
        if self.disabled {
            return false;
        }
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }
        let hit = handle_strips(self.rect, &self.edges)
            .into_iter()
            .find(|strip| rect_contains(strip.rect, mouse.column, mouse.row));
        if let Some(strip) = hit {
            self.begin_session(strip.edge, mouse, chrome);
            return true;
        }
        false
    }
}
