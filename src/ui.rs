//! The UI renders the laid-out page and the controller state into the terminal.
//!
//! Drawing never measures anything: positions come from the [`PageLayout`] of the frame and
//! the indicator from whatever geometry the controller last applied.

use crate::app_state::AppState;
use crate::page::{LineKind, PageLayout};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP: &str =
    "↑/↓: Scroll | PgUp/PgDn: Page | Tab/←/→: Section | 1-9: Jump | Click: Jump | q: Quit";

/// Renders one frame of the page.
pub fn draw(f: &mut Frame, app: &AppState, layout: &PageLayout) {
    draw_nav(f, app, layout);
    draw_body(f, app, layout);

    let help = Paragraph::new(HELP).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_nav(f: &mut Frame, app: &AppState, layout: &PageLayout) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title(" Portfolio "),
        layout.nav_area,
    );

    let active = app.controller.active();
    let shift = layout.nav_shift(active);
    for button in &layout.buttons {
        let Some(area) = layout.button_area(button, shift) else {
            continue;
        };
        let style = if button.id == active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        // Columns of a partly scrolled-out button hidden on its left
        let hidden = (area.x - layout.nav_inner.x + shift).saturating_sub(button.x);
        let text = format!("{:^width$}", button.label, width = usize::from(button.width));
        let label = Paragraph::new(text).style(style).scroll((0, hidden));
        f.render_widget(label, area);
    }

    let indicator = app
        .controller
        .indicator()
        .and_then(|geometry| layout.indicator_area(geometry, shift));
    if let Some(area) = indicator {
        let bar = "▔".repeat(usize::from(area.width));
        f.render_widget(
            Paragraph::new(bar).style(Style::default().fg(Color::Cyan)),
            area,
        );
    }
}

fn draw_body(f: &mut Frame, app: &AppState, layout: &PageLayout) {
    let lines: Vec<Line> = layout
        .lines
        .iter()
        .map(|line| {
            let style = match line.kind {
                LineKind::Title => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                LineKind::Heading => Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                LineKind::Subheading => Style::default().add_modifier(Modifier::BOLD),
                LineKind::Preamble => Style::default().fg(Color::Gray),
                LineKind::Body | LineKind::Blank => Style::default(),
            };
            Line::from(Span::styled(line.text.as_str(), style))
        })
        .collect();

    let title = format!(" {} ", app.active_title());
    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));
    f.render_widget(body, layout.body_area);
}
