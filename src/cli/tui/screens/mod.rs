/// Screen modules for the RSVP wizard
pub mod beverage;
pub mod companion;
pub mod dietary;
pub mod name;
pub mod success;

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::effects::EffectBoard;
use super::theme::Theme;
use crate::party::PartyEvent;
use crate::wizard::{Step, SubmitStatus, WizardState};

/// UI-only state that never reaches the wizard
#[derive(Debug)]
pub struct UiState {
    /// Highlighted option on the current screen
    pub focus: usize,
    /// Feedback for calendar/contact actions on the success screen
    pub notice: Option<String>,
    /// When the current screen appeared, drives the idle animations
    pub entered_at: Instant,
}

impl UiState {
    pub fn new(now: Instant) -> Self {
        Self {
            focus: 0,
            notice: None,
            entered_at: now,
        }
    }

    /// Reset per-screen state after a step change
    pub fn enter_screen(&mut self, now: Instant) {
        self.focus = 0;
        self.notice = None;
        self.entered_at = now;
    }
}

/// Everything a screen may look at, all read-only
pub struct View<'a> {
    pub wizard: &'a WizardState,
    pub ui: &'a UiState,
    pub effects: &'a EffectBoard,
    pub theme: &'a Theme,
    pub party: &'a PartyEvent,
    pub now: Instant,
}

/// Draw the whole frame for the current step
pub fn render(frame: &mut Frame, view: &View) {
    let title = if view.effects.is_sad() {
        " 🎂 Aniversário do Henrique 😢 "
    } else {
        " 🎂 Aniversário do Henrique "
    };
    let main_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(view.theme.highlight);

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Progress bar
            Constraint::Length(2),      // Step title
            Constraint::Min(0),         // Step body
            Constraint::Length(2),      // Status
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    render_progress(frame, chunks[0], view);

    let heading = Paragraph::new(Line::from(Span::styled(
        view.wizard.step().title(),
        view.theme.title,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    match view.wizard.step() {
        Step::Name => name::render(frame, chunks[2], view),
        Step::Companion => companion::render(frame, chunks[2], view),
        Step::Beverage => beverage::render(frame, chunks[2], view),
        Step::Dietary => dietary::render(frame, chunks[2], view),
        Step::Success => success::render(frame, chunks[2], view),
    }

    render_status(frame, chunks[3], view);
    render_help_bar(frame, chunks[4], view);

    // Confetti falls over everything
    render_confetti(frame, view);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &View) {
    let gauge = Gauge::default()
        .gauge_style(view.theme.progress)
        .ratio(view.wizard.step().progress())
        .label("");
    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &View) {
    let status = view.wizard.status();
    let Some(message) = status.message() else {
        return;
    };

    let style = match status {
        SubmitStatus::Sent => view.theme.success,
        SubmitStatus::Sending => view.theme.highlight,
        _ if status.is_error() => view.theme.error,
        _ => Style::default(),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(message, style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, view: &View) {
    let key = |k: &'static str| Span::styled(k, view.theme.highlight);

    let mut spans = vec![Span::raw(" ")];
    match view.wizard.step() {
        _ if view.wizard.is_locked() => {
            spans.push(Span::styled("✨ Só um instante...", view.theme.focused));
        }
        Step::Success => {
            spans.extend([
                key("g"),
                Span::raw(" Google Calendar  "),
                key("a"),
                Span::raw(" iPhone/Apple  "),
                key("m"),
                Span::raw(" Mapa  "),
                key("w"),
                Span::raw(" Dúvidas?  "),
                key("r"),
                Span::raw(" Outro cadastro  "),
            ]);
        }
        _ => {
            spans.extend([
                key("←↑↓→"),
                Span::raw(" escolher  "),
                key("Enter"),
                Span::raw(" confirmar  "),
            ]);
        }
    }
    spans.extend([key("q"), Span::raw(" sair")]);

    let help = Paragraph::new(Line::from(spans)).style(view.theme.help_bar);
    frame.render_widget(help, area);
}

fn render_confetti(frame: &mut Frame, view: &View) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    for (x, y, glyph, color) in view.effects.confetti_at(view.now) {
        let cx = area.x + (x * area.width as f64) as u16;
        let cy = area.y + (y * area.height as f64) as u16;
        if let Some(cell) = buffer.cell_mut((cx, cy)) {
            cell.set_char(glyph).set_fg(color);
        }
    }
}

/// Style for an option button: focused, locked or idle
pub(crate) fn option_style(view: &View, focused: bool) -> Style {
    if view.wizard.is_locked() {
        view.theme.muted
    } else if focused {
        view.theme.focused.add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}
