use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{LENGTH_TIER_LARGE, LENGTH_TIER_MEDIUM, LENGTH_TIER_SMALL, Theme};
use crate::game::{LossCause, Outcome, Universe};

const HUD_MARGIN_X: u16 = 1;

/// Terminal rows the HUD takes below the play area.
pub const HUD_HEIGHT: u16 = 2;

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, universe: &Universe, theme: &Theme) -> Rect {
    let [play_area, status_area, length_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let status_area = inset_horizontal(status_area, HUD_MARGIN_X);
    let length_area = inset_horizontal(length_area, HUD_MARGIN_X);

    let (message, message_style) = match universe.outcome() {
        Outcome::Continue => (
            status_message(universe.outcome(), universe.loss_cause()),
            Style::default().fg(theme.hud_text),
        ),
        Outcome::Win => (
            status_message(Outcome::Win, None),
            Style::default().fg(theme.win).add_modifier(Modifier::BOLD),
        ),
        Outcome::Loss => (
            status_message(Outcome::Loss, universe.loss_cause()),
            Style::default().fg(theme.loss).add_modifier(Modifier::BOLD),
        ),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, message_style)))
            .alignment(Alignment::Left),
        status_area,
    );

    frame.render_widget(
        Paragraph::new(length_line(
            universe.snake_length(),
            universe.rows(),
            universe.cols(),
            usize::from(length_area.width),
        ))
        .alignment(Alignment::Left)
        .style(Style::default().fg(theme.hud_muted)),
        length_area,
    );

    play_area
}

/// Top HUD message for the current outcome.
#[must_use]
pub fn status_message(outcome: Outcome, loss_cause: Option<LossCause>) -> &'static str {
    match (outcome, loss_cause) {
        (Outcome::Continue, _) => "You got this!",
        (Outcome::Win, _) => "Congratulations -- You won! That's no small feat :^)",
        (Outcome::Loss, Some(LossCause::WallCollision)) => {
            "You hit the wall! Press [Esc] to play again!"
        }
        (Outcome::Loss, Some(LossCause::SelfCollision)) => {
            "You bit yourself! Press [Esc] to play again!"
        }
        (Outcome::Loss, None) => "You lost! Press [Esc] to play again!",
    }
}

/// Flavor text for a snake of `length` cells.
#[must_use]
pub fn length_flavor(length: usize) -> &'static str {
    if length < LENGTH_TIER_SMALL {
        "Very smol :^)"
    } else if length < LENGTH_TIER_MEDIUM {
        "smol :o"
    } else if length < LENGTH_TIER_LARGE {
        "big boi =^-^="
    } else {
        "woahhhhhh!"
    }
}

/// Builds the length row, dropping to a compact form when it does not fit.
#[must_use]
pub fn length_line(length: usize, rows: u16, cols: u16, available_width: usize) -> Line<'static> {
    let full = format!(
        "Snake length: {length}. {} | {rows}x{cols}",
        length_flavor(length)
    );
    if full.width() <= available_width {
        return Line::from(full);
    }

    let compact = format!("Snake length: {length}. {}", length_flavor(length));
    if compact.width() <= available_width {
        return Line::from(compact);
    }

    Line::from(format!("L: {length}"))
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
