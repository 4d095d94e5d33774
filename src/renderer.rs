use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, Theme};
use crate::game::Universe;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Border cells added around the grid on each axis.
const BORDER_SIZE: u16 = 2;

/// Renders the full game frame from the post-tick universe.
///
/// Only the flat coordinate accessors are read, the same surface any other
/// host would draw from.
pub fn render(frame: &mut Frame<'_>, universe: &Universe, theme: &Theme) {
    let area = frame.area();
    let hud_area = render_hud(frame, area, universe, theme);
    let Some(play_area) = fit_play_area(hud_area, universe.rows(), universe.cols()) else {
        render_too_small(frame, hud_area, area, universe, theme);
        return;
    };

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, &universe.food_to_coordinates(), theme);
    render_snake(frame, inner, &universe.snake_to_coordinates(), theme);

    let outcome = universe.outcome();
    if outcome.is_terminal() {
        render_game_over_menu(
            frame,
            play_area,
            outcome,
            universe.loss_cause(),
            universe.snake_length(),
            theme,
        );
    } else if universe.is_paused() {
        render_pause_menu(frame, play_area, theme);
    }
}

/// Replaces the board with a resize notice when the grid would be clipped.
fn render_too_small(
    frame: &mut Frame<'_>,
    area: Rect,
    terminal: Rect,
    universe: &Universe,
    theme: &Theme,
) {
    let (width, height) = required_terminal_size(universe.rows(), universe.cols());
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!(
            "need {width}x{height}, have {}x{}",
            terminal.width, terminal.height
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::new().fg(theme.loss))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Terminal columns and rows needed to show the whole grid plus the HUD.
#[must_use]
pub fn required_terminal_size(rows: u16, cols: u16) -> (u16, u16) {
    (
        cols.saturating_add(BORDER_SIZE),
        rows.saturating_add(BORDER_SIZE).saturating_add(HUD_HEIGHT),
    )
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: &[u16], theme: &Theme) {
    let [row, col] = food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, *row, *col) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, coordinates: &[u16], theme: &Theme) {
    let buffer = frame.buffer_mut();
    for (index, pair) in coordinates.chunks_exact(2).enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, pair[0], pair[1]) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Shrinks `area` to the bordered box the grid needs, anchored top-left.
///
/// Returns `None` when the box does not fit.
fn fit_play_area(area: Rect, rows: u16, cols: u16) -> Option<Rect> {
    let width = cols.saturating_add(BORDER_SIZE);
    let height = rows.saturating_add(BORDER_SIZE);
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    })
}

fn cell_to_terminal(inner: Rect, row: u16, col: u16) -> Option<(u16, u16)> {
    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
