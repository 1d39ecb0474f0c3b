//! Success screen with the party details

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::View;

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Dancing emojis
            Constraint::Length(3),      // Thank-you message
            Constraint::Length(6),      // Party details
            Constraint::Length(7),      // Actions
            Constraint::Min(0),         // Notice
        ])
        .split(area);

    render_party_emojis(frame, chunks[0], view);

    let message = vec![
        Line::from("Seus dados foram enviados com sucesso!"),
        Line::from("Agora é só aguardar o churrasquinho! 🔥"),
    ];
    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        chunks[1],
    );

    render_details(frame, chunks[2], view);
    render_actions(frame, chunks[3], view);

    if let Some(notice) = &view.ui.notice {
        let paragraph = Paragraph::new(notice.as_str())
            .alignment(Alignment::Center)
            .style(view.theme.highlight)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[4]);
    }
}

fn render_party_emojis(frame: &mut Frame, area: Rect, view: &View) {
    let beat = view
        .now
        .saturating_duration_since(view.ui.entered_at)
        .as_millis()
        / 500;
    let (left, right) = if beat % 2 == 0 { ("  ", "") } else { ("", "  ") };
    let line = Line::from(format!("{}🎊   🍻   🥳{}", left, right));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_details(frame: &mut Frame, area: Rect, view: &View) {
    let party = view.party;
    let rows = vec![
        Row::new(vec![
            Cell::from("📅 Quando"),
            Cell::from(party.display_date).style(Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Row::new(vec![Cell::from(""), Cell::from(party.display_time)]),
        Row::new(vec![
            Cell::from("📍 Onde"),
            Cell::from(party.location).style(Style::default().fg(Color::Cyan)),
        ]),
    ];

    let table = Table::new(rows, vec![Constraint::Length(12), Constraint::Min(30)])
        .block(
            Block::default()
                .title(" Quando e onde vai ser a bagaça ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .column_spacing(2);
    frame.render_widget(table, area);
}

fn render_actions(frame: &mut Frame, area: Rect, view: &View) {
    let entry = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[{}]", key), view.theme.highlight),
            Span::raw(" "),
            Span::raw(text),
        ])
    };

    let lines = vec![
        entry("g", "📅 Adicionar no Google Calendar"),
        entry("a", "🍎 Adicionar no iPhone/Apple (.ics)"),
        entry("m", "🗺️ Ver o local no mapa"),
        entry("w", "📱 Dúvidas? Fale com o Henrique"),
        entry("r", "🔄 Fazer outro cadastro"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
