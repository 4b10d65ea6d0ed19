//! Colors for the two themes.

use ratatui::style::Color;
use tictactoe_core::{Mark, Theme};

/// Colors used to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Headings, marks on the board, status text.
    pub text_primary: Color,
    /// Subtitles and hints.
    pub text_secondary: Color,
    /// Borders and grid lines.
    pub border: Color,
    /// Highlighted controls.
    pub accent: Color,
    /// Cursor cell background.
    pub cursor: Color,
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    text_primary: Color::Rgb(0x28, 0x2c, 0x34),
    text_secondary: Color::Rgb(0x61, 0x61, 0x61),
    border: Color::Rgb(0xe9, 0xec, 0xef),
    accent: Color::Rgb(0x00, 0x7b, 0xff),
    cursor: Color::Rgb(0xf8, 0xf9, 0xfa),
    mark_x: Color::Rgb(0x1e, 0x5a, 0xc8),
    mark_o: Color::Rgb(0xc8, 0x32, 0x32),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x1a, 0x1a, 0x1a),
    text_primary: Color::Rgb(0xff, 0xff, 0xff),
    text_secondary: Color::Rgb(0xe0, 0xe0, 0xe0),
    border: Color::Rgb(0x40, 0x40, 0x40),
    accent: Color::Rgb(0x00, 0x56, 0xb3),
    cursor: Color::Rgb(0x28, 0x2c, 0x34),
    mark_x: Color::Rgb(0x6e, 0xa8, 0xfe),
    mark_o: Color::Rgb(0xff, 0x8a, 0x80),
};

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Color used to draw `mark`.
    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.mark_x,
            Mark::O => self.mark_o,
        }
    }
}
