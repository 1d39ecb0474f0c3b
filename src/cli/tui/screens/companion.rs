//! Fishing pond: catch a fish to bring company, or give up and go alone

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{option_style, View};
use crate::response::{Companion, Selection};
use crate::wizard::Celebration;

/// One full swim loop
const SWIM_PERIOD: Duration = Duration::from_secs(4);
/// Swim keyframes in cells: (x, y)
const SWIM_KEYFRAMES: [(f64, f64); 5] = [(0.0, 0.0), (5.0, -2.0), (-3.0, 3.0), (2.0, -1.0), (0.0, 0.0)];
const DECOY_FISH: usize = 8;
const BUBBLES: usize = 6;

/// Offset of a swimming fish `elapsed` into its loop, linear between keyframes
pub fn swim_offset(elapsed: Duration) -> (i16, i16) {
    let period = SWIM_PERIOD.as_secs_f64();
    let phase = (elapsed.as_secs_f64() % period) / period;
    let segments = (SWIM_KEYFRAMES.len() - 1) as f64;
    let position = phase * segments;
    let index = (position.floor() as usize).min(SWIM_KEYFRAMES.len() - 2);
    let t = position - index as f64;

    let (x0, y0) = SWIM_KEYFRAMES[index];
    let (x1, y1) = SWIM_KEYFRAMES[index + 1];
    (
        (x0 + (x1 - x0) * t).round() as i16,
        (y0 + (y1 - y0) * t).round() as i16,
    )
}

pub fn render(frame: &mut Frame, area: Rect, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Challenge text
            Constraint::Length(3),      // Go alone button
            Constraint::Min(8),         // Pond
            Constraint::Length(1),      // Caught banner
        ])
        .split(area);

    let challenge = Paragraph::new("🐟 Desafio: pescar um dos peixes que nadam livremente!")
        .alignment(Alignment::Center)
        .style(view.theme.muted);
    frame.render_widget(challenge, chunks[0]);

    let alone = Paragraph::new(Companion::Alone.label())
        .alignment(Alignment::Center)
        .style(option_style(view, view.ui.focus == 0))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    let button = centered(chunks[1], 44);
    frame.render_widget(alone, button);

    render_pond(frame, chunks[2], view);

    let caught = [Companion::Homi, Companion::Muie]
        .into_iter()
        .any(|fish| view.effects.is_active(&Celebration::FishCaught(fish)));
    if caught {
        let banner = Paragraph::new("🎉 PESCADO! Você conseguiu pegar o peixe! 🎉")
            .alignment(Alignment::Center)
            .style(view.theme.caught);
        frame.render_widget(banner, chunks[3]);
    }
}

fn render_pond(frame: &mut Frame, area: Rect, view: &View) {
    let pond = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.theme.water))
        .style(Style::default().bg(view.theme.water));
    let inner = pond.inner(area);
    frame.render_widget(pond, area);
    if inner.width < 4 || inner.height < 3 {
        return;
    }

    let elapsed = view.now.saturating_duration_since(view.ui.entered_at);
    let secs = elapsed.as_secs_f64();

    // Decoys and bubbles first so the real fish swim on top
    for i in 0..DECOY_FISH {
        let base_x = (i * 37 % 90) as f64 / 100.0;
        let base_y = ((i * 23 % 80) + 10) as f64 / 100.0;
        let wobble = (secs * (0.6 + i as f64 * 0.1) + i as f64).sin();
        let x = base_x * inner.width as f64 + wobble * 3.0;
        let y = base_y * inner.height as f64 + wobble;
        put(frame, inner, x, y, "><>", view.theme.muted);
    }
    for i in 0..BUBBLES {
        let speed = 1.5 + i as f64 * 0.3;
        let rise = (secs * speed + i as f64 * 2.0) % inner.height as f64;
        let x = ((i * 17 % 90) as f64 / 100.0) * inner.width as f64;
        let y = inner.height as f64 - 1.0 - rise;
        put(frame, inner, x, y, "°", Style::default().fg(view.theme.foam));
    }

    let fish = [(Companion::Homi, 0.25, 1usize), (Companion::Muie, 0.65, 2usize)];
    for (companion, column, focus_index) in fish {
        let caught = matches!(
            view.wizard.pending(),
            Some(pending) if pending.selection == Selection::Companion(companion)
        );
        let (dx, dy) = if caught {
            (0, -2)
        } else {
            // the second fish swims half a loop behind
            let lag = if focus_index == 2 { SWIM_PERIOD / 2 } else { Duration::ZERO };
            swim_offset(elapsed + lag)
        };

        let x = column * inner.width as f64 + dx as f64;
        let y = inner.height as f64 / 2.0 + dy as f64;
        let style = if caught {
            view.theme.caught
        } else {
            option_style(view, view.ui.focus == focus_index).fg(view.theme.fish)
        };
        let label = if caught {
            format!("🎣 {} 🎣", companion.label())
        } else {
            companion.label().to_string()
        };
        put(frame, inner, x, y, &label, style);
    }
}

/// Write `text` at a fractional position, clamped into `area`
fn put(frame: &mut Frame, area: Rect, x: f64, y: f64, text: &str, style: Style) {
    let line = Line::from(Span::styled(text.to_string(), style));
    let width = (line.width() as u16).min(area.width);
    let max_x = area.width.saturating_sub(width);
    let col = (x.max(0.0) as u16).min(max_x);
    let row = (y.max(0.0) as u16).min(area.height.saturating_sub(1));

    let target = Rect {
        x: area.x + col,
        y: area.y + row,
        width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), target);
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
