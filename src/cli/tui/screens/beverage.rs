//! Draft beer tap: split a chopp or bring your own soda

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{option_style, View};
use crate::cli::tui::effects::EffectBoard;
use crate::response::{Beverage, Selection};
use crate::wizard::Celebration;

const GLASS_HEIGHT: usize = 5;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (index, beverage) in Beverage::ALL.iter().enumerate() {
        render_option(frame, columns[index], *beverage, index, view);
    }
}

fn render_option(frame: &mut Frame, area: Rect, beverage: Beverage, index: usize, view: &View) {
    let focused = view.ui.focus == index;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(option_style(view, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let level = fill_level(view.effects, beverage, view.wizard.pending().map(|p| p.selection), view.now);
    let liquid = view.theme.liquid(beverage);
    let glasses = match beverage {
        Beverage::Shared => 2,
        Beverage::OwnDrink => 1,
    };

    let mut lines = vec![Line::from("")];
    for row in glass_rows(level, beverage, liquid, view.theme.foam) {
        let mut spans = Vec::new();
        for _ in 0..glasses {
            spans.extend(row.iter().cloned());
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(beverage.label(), option_style(view, focused))));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// How full the glasses are: animating while the fill effect plays, full once
/// chosen, empty otherwise
pub fn fill_level(
    effects: &EffectBoard,
    beverage: Beverage,
    pending: Option<Selection>,
    now: Instant,
) -> f64 {
    if let Some(progress) = effects.progress(&Celebration::GlassFill(beverage), now) {
        return progress;
    }
    if pending == Some(Selection::Beverage(beverage)) {
        1.0
    } else {
        0.0
    }
}

/// One glass, top to bottom
fn glass_rows(level: f64, beverage: Beverage, liquid: Color, foam: Color) -> Vec<Vec<Span<'static>>> {
    let filled = (level * GLASS_HEIGHT as f64).round() as usize;
    let mut rows = Vec::with_capacity(GLASS_HEIGHT + 1);

    for row in 0..GLASS_HEIGHT {
        let from_bottom = GLASS_HEIGHT - row;
        let content = if from_bottom > filled {
            Span::raw("    ")
        } else if from_bottom == filled && beverage == Beverage::Shared {
            Span::styled("░░░░", Style::default().fg(foam).bg(liquid))
        } else if beverage == Beverage::OwnDrink && row == GLASS_HEIGHT - filled && filled > 1 {
            Span::styled("🧊  ", Style::default().bg(liquid))
        } else {
            Span::styled("    ", Style::default().bg(liquid))
        };
        rows.push(vec![Span::raw("│"), content, Span::raw("│")]);
    }
    rows.push(vec![Span::raw("╰────╯")]);
    rows
}
