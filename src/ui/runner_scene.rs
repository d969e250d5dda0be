//! Terminal rendering of a runner session.
//!
//! Uses a cell buffer for per-character color control. World boxes are
//! scaled from play-area units down to terminal cells, then stamped
//! row-by-row as Paragraph widgets.

use super::game_common::{
    render_game_over_banner, render_hint_row, render_sidebar_frame, render_window,
};
use crate::runner::{GameSnapshot, PlayerStatus, RunnerPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';
const RUNNER_COLOR: Color = Color::LightYellow;
const OBSTACLE_COLOR: Color = Color::Rgb(60, 140, 60);

/// Render the whole runner screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, snap: &GameSnapshot) {
    let layout = render_window(frame, area, " Ridge Runner ", RUNNER_COLOR);

    render_play_field(frame, layout.field, snap);

    if snap.phase == RunnerPhase::Idle {
        render_start_prompt(frame, layout.field);
    }

    render_hints(frame, layout.hints, snap.phase);
    render_stats(frame, layout.sidebar, snap);

    if snap.message_visible {
        if let Some(message) = &snap.message {
            render_game_over_banner(frame, layout.field, "RUN OVER", message);
        }
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Cells covered by the world interval `[lo, hi)` at `scale` cells/unit,
/// clipped to `0..limit`. Anything with a visible extent covers at least
/// one cell.
fn cell_span(lo: f64, hi: f64, scale: f64, limit: usize) -> Option<(usize, usize)> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= 0.0 || limit == 0 {
        return None;
    }
    let start = (lo * scale).floor().max(0.0);
    let end = (hi * scale).ceil().max(start + 1.0).min(limit as f64);
    if start >= end {
        return None;
    }
    Some((start as usize, end as usize))
}

fn render_play_field(frame: &mut Frame, area: Rect, snap: &GameSnapshot) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    if snap.play_area_width <= 0.0 || snap.play_area_height <= 0.0 {
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let x_scale = width as f64 / snap.play_area_width;
    let y_scale = height as f64 / snap.play_area_height;

    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); width]; height];

    // ── Ground ────────────────────────────────────────────────────────
    let ground_row = ((snap.play_area_height - snap.ground_level) * y_scale)
        .floor()
        .clamp(0.0, (height - 1) as f64) as usize;
    for row in buffer.iter_mut().skip(ground_row) {
        for cell in row.iter_mut() {
            *cell = Cell {
                ch: GROUND_CHAR,
                fg: Color::Rgb(90, 70, 50),
                bg: Color::Rgb(50, 40, 30),
            };
        }
    }
    if ground_row > 0 {
        // Scrolling pebbles just above the ground line.
        let drift = (snap.score as usize) % 7;
        for (i, cell) in buffer[ground_row - 1].iter_mut().enumerate() {
            if (i + drift) % 7 == 0 {
                *cell = Cell {
                    ch: GROUND_SUB,
                    fg: Color::Rgb(70, 55, 40),
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    let obstacle_bottom = snap.play_area_height - snap.ground_level;
    for obstacle in &snap.obstacles {
        let right = snap.play_area_width - obstacle.offset;
        let left = right - obstacle.width;
        let top = obstacle_bottom - obstacle.height;

        let (Some((c0, c1)), Some((r0, r1))) = (
            cell_span(left, right, x_scale, width),
            cell_span(top, obstacle_bottom, y_scale, ground_row),
        ) else {
            continue;
        };
        for row in buffer.iter_mut().take(r1).skip(r0) {
            for cell in row.iter_mut().take(c1).skip(c0) {
                *cell = Cell {
                    ch: '|',
                    fg: OBSTACLE_COLOR,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Runner ────────────────────────────────────────────────────────
    let runner_bottom = snap.play_area_height - snap.player.bottom;
    let runner_top = runner_bottom - snap.player_height;
    let dead = snap.player.status == PlayerStatus::Dead;
    if let (Some((c0, c1)), Some((r0, r1))) = (
        cell_span(
            snap.player_left,
            snap.player_left + snap.player_width,
            x_scale,
            width,
        ),
        cell_span(runner_top, runner_bottom, y_scale, ground_row),
    ) {
        let fg = if dead { Color::Red } else { RUNNER_COLOR };
        for (row_idx, row) in buffer.iter_mut().enumerate().take(r1).skip(r0) {
            let feet = row_idx + 1 == r1;
            for (dx, cell) in row.iter_mut().enumerate().take(c1).skip(c0) {
                let ch = if dead {
                    'x'
                } else if feet && !snap.player.airborne {
                    // Alternating run animation on the bottom row
                    match (snap.player.run_anim_frame, dx == c0) {
                        (0, true) => '/',
                        (0, false) => ' ',
                        (_, true) => ' ',
                        (_, false) => '\\',
                    }
                } else {
                    '\u{2588}' // █
                };
                if ch != ' ' {
                    *cell = Cell {
                        ch,
                        fg,
                        bg: Color::Reset,
                    };
                }
            }
        }
    }

    // ── Score (top-right) ─────────────────────────────────────────────
    let score_text = format!("Score: {}", snap.score);
    let score_start = width.saturating_sub(score_text.len() + 1);
    for (i, ch) in score_text.chars().enumerate() {
        if let Some(cell) = buffer[0].get_mut(score_start + i) {
            *cell = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }

    // ── Stamp buffer ──────────────────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_hints(frame: &mut Frame, area: Rect, phase: RunnerPhase) {
    let (word, accent, action) = match phase {
        RunnerPhase::Idle => ("Ready", RUNNER_COLOR, "Start"),
        RunnerPhase::Running => ("Run!", RUNNER_COLOR, "Jump"),
        RunnerPhase::GameOver => ("Down!", Color::Red, "Restart"),
    };
    render_hint_row(frame, area, word, accent, &[("[Space/Up]", action), ("[Q]", "Quit")]);
}

fn render_stats(frame: &mut Frame, area: Rect, snap: &GameSnapshot) {
    let inner = render_sidebar_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snap.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", label),
            Span::styled(snap.best_score.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{:.1}", snap.speed), value),
        ]),
        Line::from(vec![
            Span::styled("Spawn: ", label),
            Span::styled(format!("{:.0}ms", snap.spawn_interval_ms), value),
        ]),
        Line::from(vec![
            Span::styled("Live:  ", label),
            Span::styled(snap.obstacles.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(RUNNER_COLOR)),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(" | ", Style::default().fg(OBSTACLE_COLOR)),
            Span::styled("Obstacle", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_start_prompt(frame: &mut Frame, area: Rect) {
    if area.height < 5 || area.width < 30 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let prompt = "[ Press Space/Up to Start ]";
    let x = area.x + area.width.saturating_sub(prompt.len() as u16) / 2;

    let line = Paragraph::new(Line::from(vec![Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));
    frame.render_widget(line, Rect::new(x, center_y, prompt.len() as u16, 1));
}
