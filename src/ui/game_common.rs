//! Screen frame shared by the runner views: bordered window, play field,
//! one-line hint row and a stats sidebar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const SIDEBAR_WIDTH: u16 = 22;
const MIN_FIELD_WIDTH: u16 = 20;

/// Areas inside the window border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerLayout {
    pub field: Rect,
    pub hints: Rect,
    pub sidebar: Rect,
}

/// Carve `inner` into field, hint row and sidebar.
///
/// ```text
/// ┌─ Ridge Runner ──────────────────┬─ Stats ─────┐
/// │ [field]                         │ [sidebar]   │
/// │                                 │             │
/// │ Run!  [Space/Up] Jump  [Q] Quit │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_screen(inner: Rect) -> RunnerLayout {
    let [left, sidebar] = *Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(MIN_FIELD_WIDTH), Constraint::Length(SIDEBAR_WIDTH)])
        .split(inner)
    else {
        return RunnerLayout {
            field: inner,
            hints: Rect::default(),
            sidebar: Rect::default(),
        };
    };

    let hint_height = left.height.min(1);
    let field = Rect {
        height: left.height - hint_height,
        ..left
    };
    let hints = Rect {
        y: left.y + field.height,
        height: hint_height,
        ..left
    };
    RunnerLayout {
        field,
        hints,
        sidebar,
    }
}

/// Draw the window border and return the split of what is inside it.
pub fn render_window(frame: &mut Frame, area: Rect, title: &str, accent: Color) -> RunnerLayout {
    frame.render_widget(Clear, area);

    let window = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    split_screen(inner)
}

/// One-line hint row: the phase word, then `(key, action)` pairs.
pub fn render_hint_row(
    frame: &mut Frame,
    area: Rect,
    phase_word: &str,
    accent: Color,
    keys: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let mut spans = vec![Span::styled(
        phase_word,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )];
    for (key, action) in keys {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Red strip across the bottom of the field once a run has ended.
///
/// Only the strip is cleared; the crash frame stays visible above it.
pub fn render_game_over_banner(frame: &mut Frame, field: Rect, title: &str, message: &str) {
    const STRIP_HEIGHT: u16 = 4;
    if field.height < STRIP_HEIGHT {
        return;
    }
    let strip = Rect {
        y: field.y + field.height - STRIP_HEIGHT,
        height: STRIP_HEIGHT,
        ..field
    };

    frame.render_widget(Clear, strip);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(strip);
    frame.render_widget(block, strip);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Space] Run again   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Bordered " Stats " box for the sidebar. Returns the inner area.
pub fn render_sidebar_frame(frame: &mut Frame, sidebar: Rect) -> Rect {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(sidebar);
    frame.render_widget(block, sidebar);
    inner
}
