//! Balloon wall: pop the one with your name

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::View;
use crate::response::{Guest, Selection};
use crate::wizard::Celebration;

/// Balloons per row
pub const COLUMNS: usize = 5;
const BALLOON_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Prompt
            Constraint::Length(6),      // First row of balloons
            Constraint::Length(6),      // Second row
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new("Escolha o seu balão e veja a mágica acontecer!")
        .alignment(Alignment::Center)
        .style(view.theme.muted);
    frame.render_widget(prompt, chunks[0]);

    for (index, guest) in Guest::ALL.iter().enumerate() {
        let row = chunks[1 + index / COLUMNS];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row);
        render_balloon(frame, columns[index % COLUMNS], *guest, index, view);
    }
}

fn render_balloon(frame: &mut Frame, cell: Rect, guest: Guest, index: usize, view: &View) {
    let popped = matches!(
        view.wizard.pending(),
        Some(pending) if pending.selection == Selection::Name(guest)
    );
    let focused = view.ui.focus == index && !view.wizard.is_locked();

    // hovered balloons float one row higher
    let lift = if focused { 0 } else { 1 };
    let area = Rect {
        x: cell.x + 1,
        y: cell.y + lift,
        width: cell.width.saturating_sub(2),
        height: (BALLOON_HEIGHT + 1).min(cell.height.saturating_sub(lift)),
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    if popped {
        let still_popping = view
            .effects
            .is_active(&Celebration::BalloonPop(guest));
        let text = if still_popping { "💥 POP!" } else { "✨" };
        let burst = Paragraph::new(vec![Line::from(""), Line::from(text)])
            .alignment(Alignment::Center)
            .style(view.theme.focused);
        frame.render_widget(burst, area);
        return;
    }

    let color = view.theme.balloon_color(index);
    let name_style = if view.wizard.is_locked() {
        view.theme.muted
    } else if focused {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    let balloon_area = Rect {
        height: area.height.min(BALLOON_HEIGHT),
        ..area
    };
    let balloon = Paragraph::new(Line::from(guest.as_str()).style(name_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(balloon, balloon_area);

    if area.height > BALLOON_HEIGHT {
        let string = Rect {
            y: area.y + BALLOON_HEIGHT,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new("╎").alignment(Alignment::Center).style(view.theme.muted),
            string,
        );
    }
}
