use ratatui::style::Color;

/// Colors applied to every element the terminal host draws.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_muted: Color,
    pub win: Color,
    pub loss: Color,
}

/// Pale teal palette.
pub const THEME_LAGOON: Theme = Theme {
    snake_head: Color::Rgb(0x18, 0x9A, 0xB4),
    snake_body: Color::Rgb(0x75, 0xE6, 0xDA),
    food: Color::Rgb(0xD4, 0x5D, 0x5D),
    play_bg: Color::Reset,
    border_fg: Color::Rgb(0x18, 0x9A, 0xB4),
    hud_text: Color::White,
    hud_muted: Color::DarkGray,
    win: Color::Green,
    loss: Color::Red,
};

/// Snake head glyph.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Snake body glyph.
pub const GLYPH_SNAKE_BODY: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Default grid height in cells.
pub const DEFAULT_ROWS: u16 = 40;

/// Default grid width in cells.
pub const DEFAULT_COLS: u16 = 40;

/// Default tick rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 15;

/// Upper bound on how long the host blocks waiting for a key.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

/// Lengths at which the HUD flavor text changes.
pub const LENGTH_TIER_SMALL: usize = 5;
pub const LENGTH_TIER_MEDIUM: usize = 10;
pub const LENGTH_TIER_LARGE: usize = 20;
