//! folio: a single-page portfolio viewer with a scroll-tracking section navigator.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, formats, input, logging, page, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio viewer", long_about = None)]
struct Args {
    /// Markdown file holding the portfolio page
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Heading level whose headings become page sections
    #[arg(long, value_name = "LEVEL")]
    section_level: Option<usize>,

    /// Print the computed layout as JSON instead of starting the viewer
    #[arg(long)]
    dump_layout: bool,

    /// Terminal width assumed by --dump-layout
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Terminal height assumed by --dump-layout
    #[arg(long, default_value_t = 40)]
    height: u16,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let loaded = config::Config::load();
    let mut cfg = loaded.as_ref().cloned().unwrap_or_default();

    // Override config with command line args
    if let Some(level) = args.section_level {
        cfg.section_level = level;
    }

    if let Some(ref log_file) = args.log_file {
        logging::init(log_file, &cfg.log_level)?;
    }
    // Reported once the subscriber exists
    if let Err(e) = loaded {
        warn!(path = config::CONFIG_FILE, "Invalid config, using defaults: {e}");
    }

    let format = formats::markdown::MarkdownFormat;
    let page = input::load_page(&args.path, &format, cfg.section_level)?;

    let Some(mut app) = app_state::AppState::new(page) else {
        eprintln!(
            "No level-{} headings found in {}",
            cfg.section_level,
            args.path.display()
        );
        return Ok(());
    };

    if args.dump_layout {
        return dump_layout(&mut app, &cfg, Rect::new(0, 0, args.width, args.height));
    }

    run_tui(app, &cfg)
}

fn dump_layout(app: &mut app_state::AppState, cfg: &config::Config, area: Rect) -> io::Result<()> {
    let layout = page::PageLayout::compute(&app.page, area, cfg);
    app.mount(&layout);
    app.settle(&layout);
    app.controller.unmount();

    let report = layout.report(&app.controller, app.scroll);
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);
    app.controller.unmount();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("{e}");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn terminal_area<B: ratatui::backend::Backend>(terminal: &Terminal<B>) -> io::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let mut area = terminal_area(terminal)?;
    let mut layout = page::PageLayout::compute(&app.page, area, cfg);

    app.mount(&layout);
    terminal.draw(|f| ui::draw(f, app, &layout))?;
    app.settle(&layout);
    info!(width = area.width, height = area.height, "Viewer started");

    let frame = Duration::from_millis(cfg.frame_ms);

    loop {
        let mut resized = false;

        if event::poll(frame)? {
            resized |= handle_event(event::read()?, app, &layout, cfg);
            // Everything already queued belongs to this frame
            while event::poll(Duration::ZERO)? {
                resized |= handle_event(event::read()?, app, &layout, cfg);
            }
        }

        if app.should_quit {
            return Ok(());
        }

        if resized {
            area = terminal_area(terminal)?;
            layout = page::PageLayout::compute(&app.page, area, cfg);
            app.resized(&layout);
        }

        app.frame(&layout);
        terminal.draw(|f| ui::draw(f, app, &layout))?;
    }
}

/// Applies one terminal event. Returns `true` when the terminal was resized.
fn handle_event(
    event: Event,
    app: &mut app_state::AppState,
    layout: &page::PageLayout,
    cfg: &config::Config,
) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(key, app, layout);
            false
        }
        Event::Mouse(mouse) => {
            handle_mouse(mouse, app, layout, cfg);
            false
        }
        Event::Resize(_, _) => true,
        _ => false,
    }
}

fn handle_key(key: KeyEvent, app: &mut app_state::AppState, layout: &page::PageLayout) {
    let page_rows = i32::from(layout.viewport_height().max(1));

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_by(-1, layout);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_by(1, layout);
        }
        KeyCode::PageUp => {
            app.scroll_by(-page_rows, layout);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.scroll_by(page_rows, layout);
        }
        KeyCode::Home => {
            app.scroll_to(0, layout);
        }
        KeyCode::End => {
            app.scroll_to(layout.max_scroll(), layout);
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.jump_next(layout);
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.jump_prev(layout);
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                app.jump_to_index(digit - 1, layout);
            }
        }
        _ => {}
    }
}

fn handle_mouse(
    mouse: MouseEvent,
    app: &mut app_state::AppState,
    layout: &page::PageLayout,
    cfg: &config::Config,
) {
    let step = i32::from(cfg.scroll_step);
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.scroll_by(step, layout);
        }
        MouseEventKind::ScrollUp => {
            app.scroll_by(-step, layout);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let shift = layout.nav_shift(app.controller.active());
            if let Some(id) = layout.button_at(mouse.column, mouse.row, shift) {
                let id = id.to_string();
                app.jump_to_section(&id, layout);
            }
        }
        _ => {}
    }
}
