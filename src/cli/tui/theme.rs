use ratatui::style::{Color, Modifier, Style};

use crate::response::Beverage;

/// Consistent theme for the TUI
pub struct Theme {
    pub focused: Style,
    pub error: Style,
    pub success: Style,
    pub muted: Style,
    pub highlight: Style,
    pub title: Style,
    pub help_bar: Style,
    pub water: Color,
    pub fish: Color,
    pub caught: Style,
    pub beer: Color,
    pub foam: Color,
    pub soda: Color,
    pub progress: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default()
                .bg(Color::DarkGray),
            water: Color::Rgb(16, 60, 110),
            fish: Color::Rgb(255, 165, 0),
            caught: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            beer: Color::Rgb(242, 169, 0),
            foam: Color::Rgb(255, 250, 230),
            soda: Color::Rgb(60, 20, 10),
            progress: Style::default()
                .fg(Color::Rgb(255, 107, 107))
                .bg(Color::Rgb(40, 40, 40)),
        }
    }
}

impl Theme {
    /// Balloon colors, cycling through the confetti palette
    pub fn balloon_color(&self, index: usize) -> Color {
        const BALLOONS: [Color; 5] = [
            Color::Rgb(255, 107, 107),
            Color::Rgb(78, 205, 196),
            Color::Rgb(255, 215, 0),
            Color::Rgb(221, 160, 221),
            Color::Rgb(69, 183, 209),
        ];
        BALLOONS[index % BALLOONS.len()]
    }

    /// Liquid color for a drink choice
    pub fn liquid(&self, beverage: Beverage) -> Color {
        match beverage {
            Beverage::Shared => self.beer,
            Beverage::OwnDrink => self.soda,
        }
    }
}
