use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use term_resize::{
    ChromeState, Component, EdgeSpec, MinSize, ResizeComponent, Size, UiFrame, tracing_sub,
};

#[derive(Parser, Debug)]
#[command(name = "term-resize", about = "Drag-to-resize pane demo")]
struct Args {
    /// Edges that accept resize drags: "all", one edge name, or a
    /// comma-separated list.
    #[arg(long, default_value = "all")]
    edges: EdgeSpec,

    /// Width floor in cells; the pane stops one cell above it.
    #[arg(long, default_value_t = 0)]
    min_width: u16,

    /// Height floor in cells.
    #[arg(long, default_value_t = 0)]
    min_height: u16,

    /// Explicit pane width; takes precedence over any committed size.
    #[arg(long)]
    width: Option<u16>,

    /// Explicit pane height.
    #[arg(long)]
    height: Option<u16>,

    /// Render handles but ignore pointer-down on them.
    #[arg(long)]
    disabled: bool,

    /// Log session lifecycle to stderr (redirect 2> to a file).
    #[arg(long)]
    debug: bool,
}

/// Demo pane content. Fills its rectangle so the live size is visible and
/// reports when the active drag suspends text selection.
struct TextContent;

impl Component for TextContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, chrome: &ChromeState) {
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Indexed(236))),
            area,
        );
        let body = if chrome.selection_enabled() {
            indoc! {"

                Drag any highlighted edge to resize this pane.

                A press-and-release under 150 ms counts as a click and
                commits nothing.
            "}
        } else {
            indoc! {"

                Resizing... text selection is suspended until the
                gesture ends.
            "}
        };
        frame.render_widget(Paragraph::new(body), area);
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.debug {
        tracing_sub::init_default();
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &args);

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, args: &Args) -> io::Result<()> {
    let committed: Rc<RefCell<Option<Size>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&committed);

    let mut pane = ResizeComponent::new()
        .with_edges(args.edges.clone())
        .with_min_size(MinSize::new(args.min_width, args.min_height))
        .with_disabled(args.disabled)
        .with_child(Box::new(TextContent))
        .on_resize_end(move |rect| {
            *sink.borrow_mut() = Some(Size::new(rect.width, rect.height));
        });
    pane.set_style_size(args.width, args.height);
    let mut chrome = ChromeState::new();

    loop {
        terminal.draw(|frame| {
            let full = frame.area();
            let mut ui = UiFrame::new(frame);
            let pane_area = Rect {
                height: full.height.saturating_sub(1),
                ..full
            };
            pane.render(&mut ui, pane_area, &chrome);

            if full.height > 0 {
                let status_area = Rect {
                    x: full.x,
                    y: full.y.saturating_add(pane_area.height),
                    width: full.width,
                    height: 1,
                };
                let glyph = chrome.cursor().map(|cursor| cursor.glyph()).unwrap_or("·");
                let committed_text = committed
                    .borrow()
                    .map(|size| format!("{}x{}", size.width, size.height))
                    .unwrap_or_else(|| "none".to_owned());
                let live = pane.rect();
                let status = format!(
                    " {glyph}  live {}x{}  committed {committed_text}  q quits",
                    live.width, live.height
                );
                ui.render_widget(
                    Paragraph::new(status).style(Style::default().fg(Color::Gray)),
                    status_area,
                );
            }
        })?;

        if event::poll(Duration::from_millis(16))? {
            let evt = event::read()?;
            if let Event::Key(key) = &evt
                && key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('q')
            {
                return Ok(());
            }
            pane.handle_event(&evt, &mut chrome);
        }
    }
}
