//! Barbecue restrictions, the last question before sending

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{option_style, View};
use crate::response::Dietary;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Question
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let question = Paragraph::new(
        "Vai ser um churrasco de domingo comum, tem alguma restrição, ou pode levar linguiça?",
    )
    .alignment(Alignment::Center)
    .style(view.theme.muted);
    frame.render_widget(question, chunks[0]);

    let chosen = view.wizard.record().dietary;
    for (index, dietary) in Dietary::ALL.iter().enumerate() {
        let focused = view.ui.focus == index;
        // the last choice stays marked while it is being sent or after a failure
        let marker = if chosen == Some(*dietary) { "▶ " } else { "" };
        let button = Paragraph::new(format!("{}{}", marker, dietary.label()))
            .alignment(Alignment::Center)
            .style(option_style(view, focused))
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));

        let slot = chunks[1 + index];
        let width = slot.width.min(44);
        let area = Rect {
            x: slot.x + (slot.width - width) / 2,
            width,
            ..slot
        };
        frame.render_widget(button, area);
    }
}
