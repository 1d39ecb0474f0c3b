use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};

use super::effects::EffectBoard;
use super::events::AppEvent;
use super::screens::{self, name::COLUMNS, UiState, View};
use super::theme::Theme;
use crate::config::RsvpConfig;
use crate::io::paths::RsvpPaths;
use crate::party::{self, PartyEvent, CONTACT_MESSAGE};
use crate::response::{Beverage, Companion, Dietary, Guest, Selection};
use crate::submit::{self, SubmitBackend};
use crate::wizard::{Action, DelayScheduler, Effect, Step, WizardState};
use crate::Result;

/// How long the input thread waits for a key before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);
/// Second Ctrl+C inside this window exits
const CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Single source of truth for the flow
    wizard: WizardState,
    ui: UiState,
    effects: EffectBoard,
    theme: Theme,
    party: PartyEvent,
    config: RsvpConfig,
    backend: Arc<dyn SubmitBackend>,
    should_quit: bool,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// Timers for delayed step advances, aborted on exit
    scheduler: Option<DelayScheduler<AppEvent>>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(config: RsvpConfig, backend: Arc<dyn SubmitBackend>) -> Self {
        let now = Instant::now();
        Self {
            wizard: WizardState::new(),
            ui: UiState::new(now),
            effects: EffectBoard::new(config.ui.animations, config.ui.sound),
            theme: Theme::default(),
            party: PartyEvent::birthday(),
            config,
            backend,
            should_quit: false,
            event_tx: None,
            scheduler: None,
            last_ctrl_c: None,
        }
    }

    /// Run the application until the guest quits
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());
        self.scheduler = Some(DelayScheduler::new(event_tx.clone()));

        // Crossterm reads block, so input lives on its own thread
        let input_tx = event_tx;
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(INPUT_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        input_tx.send(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(width, height)) => {
                        input_tx.send(AppEvent::Resize(width, height))
                    }
                    Ok(_) => Ok(()),
                    Err(_) => break,
                };
                if forwarded.is_err() {
                    break;
                }
            }
        });

        info!(endpoint = %self.config.submit.endpoint, "wizard started");
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.cancel_all();
        }
        self.event_tx = None;
        drop(event_rx);
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_rate_ms);
        loop {
            let now = Instant::now();
            let view = View {
                wizard: &self.wizard,
                ui: &self.ui,
                effects: &self.effects,
                theme: &self.theme,
                party: &self.party,
                now,
            };
            terminal.draw(|frame| screens::render(frame, &view))?;

            // Handle events with timeout for animations
            match time::timeout(tick, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(width, height) => debug!(width, height, "terminal resized"),
            AppEvent::AdvanceDue { ticket } => self.dispatch(Action::AdvanceDue { ticket }),
            AppEvent::SubmitFinished { run, outcome } => {
                self.dispatch(Action::SubmitFinished { run, outcome })
            }
            AppEvent::Tick => self.effects.prune(Instant::now()),
        }
    }

    /// Feed one action through the reducer and carry out its effects
    fn dispatch(&mut self, action: Action) {
        let before = self.wizard.step();
        let (next, effects) = std::mem::take(&mut self.wizard).reduce(action);
        self.wizard = next;

        let now = Instant::now();
        if self.wizard.step() != before {
            self.ui.enter_screen(now);
        }
        for effect in effects {
            self.run_effect(effect, now);
        }
    }

    fn run_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::ScheduleAdvance { ticket, delay } => {
                if let Some(scheduler) = self.scheduler.as_mut() {
                    scheduler.schedule(delay, AppEvent::AdvanceDue { ticket });
                }
            }
            Effect::Submit { run, submission } => {
                let Some(tx) = self.event_tx.clone() else {
                    return;
                };
                let backend = Arc::clone(&self.backend);
                tokio::spawn(async move {
                    let outcome = submit::submit(backend.as_ref(), &submission).await;
                    let _ = tx.send(AppEvent::SubmitFinished { run, outcome });
                });
            }
            Effect::Celebrate(celebration) => {
                if self.effects.fire(celebration, now) {
                    ring_bell();
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Handle global keys first
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let now = Instant::now();
                if let Some(last) = self.last_ctrl_c {
                    if now.duration_since(last) < CTRL_C_WINDOW {
                        self.should_quit = true;
                        return;
                    }
                }
                self.last_ctrl_c = Some(now);
                return;
            }
            _ => {}
        }

        if self.wizard.step() == Step::Success {
            self.handle_success_key(key.code);
            return;
        }

        // Selection animations play out before the next choice
        if self.wizard.is_locked() {
            return;
        }

        let step = self.wizard.step();
        let count = option_count(step);
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(selection) = selection_for(step, self.ui.focus) {
                    self.dispatch(Action::Select(selection));
                }
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < count {
                    self.ui.focus = index;
                    if let Some(selection) = selection_for(step, index) {
                        self.dispatch(Action::Select(selection));
                    }
                }
            }
            code => {
                if let Some(focus) = move_focus(step, self.ui.focus, code) {
                    self.ui.focus = focus;
                }
            }
        }
    }

    fn handle_success_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('g') | KeyCode::Char('G') => {
                let url = party::google_calendar_url(&self.party);
                self.ui.notice = Some(self.open_or_show(&url, "📅 Abrindo o Google Calendar..."));
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let dir = RsvpPaths::download_dir(&self.config.downloads);
                self.ui.notice = Some(match party::write_ics(&dir, &self.party) {
                    Ok(path) => format!("🍎 Arquivo salvo em {}", path.display()),
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "calendar file not written");
                        format!("❌ Não foi possível salvar o arquivo: {}", e)
                    }
                });
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let url = party::google_maps_url(&self.party);
                self.ui.notice = Some(self.open_or_show(&url, "🗺️ Abrindo o mapa..."));
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                let url = party::contact_link(CONTACT_MESSAGE);
                self.ui.notice = Some(self.open_or_show(&url, "📱 Abrindo o WhatsApp..."));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.effects.clear();
                self.dispatch(Action::Restart);
            }
            _ => {}
        }
    }

    /// Open `url`, or hand it back for copying when no browser starts
    fn open_or_show(&self, url: &str, opening: &str) -> String {
        match party::open_url(url) {
            Ok(()) => opening.to_string(),
            Err(e) => {
                warn!(error = %e, "browser launch failed");
                format!("Não foi possível abrir o navegador. Acesse: {}", url)
            }
        }
    }
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

/// Number of choices on a step's screen
fn option_count(step: Step) -> usize {
    match step {
        Step::Name => Guest::ALL.len(),
        Step::Companion => Companion::ALL.len(),
        Step::Beverage => Beverage::ALL.len(),
        Step::Dietary => Dietary::ALL.len(),
        Step::Success => 0,
    }
}

/// The value behind the option at `focus`
fn selection_for(step: Step, focus: usize) -> Option<Selection> {
    match step {
        Step::Name => Guest::ALL.get(focus).copied().map(Selection::Name),
        Step::Companion => Companion::ALL.get(focus).copied().map(Selection::Companion),
        Step::Beverage => Beverage::ALL.get(focus).copied().map(Selection::Beverage),
        Step::Dietary => Dietary::ALL.get(focus).copied().map(Selection::Dietary),
        Step::Success => None,
    }
}

/// New focus after a navigation key, wrapping around. Balloons sit in a grid.
fn move_focus(step: Step, focus: usize, code: KeyCode) -> Option<usize> {
    let count = option_count(step);
    if count == 0 {
        return None;
    }
    let row = if step == Step::Name { COLUMNS } else { 1 };

    let next = match code {
        KeyCode::Right | KeyCode::Tab => focus + 1,
        KeyCode::Left | KeyCode::BackTab => focus + count - 1,
        KeyCode::Down => focus + row,
        KeyCode::Up => focus + count - row % count,
        _ => return None,
    };
    Some(next % count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balloon_grid_navigation_wraps() {
        assert_eq!(move_focus(Step::Name, 0, KeyCode::Down), Some(5));
        assert_eq!(move_focus(Step::Name, 7, KeyCode::Down), Some(2));
        assert_eq!(move_focus(Step::Name, 2, KeyCode::Up), Some(7));
        assert_eq!(move_focus(Step::Name, 9, KeyCode::Right), Some(0));
        assert_eq!(move_focus(Step::Name, 0, KeyCode::Left), Some(9));
    }

    #[test]
    fn vertical_lists_step_by_one() {
        assert_eq!(move_focus(Step::Dietary, 2, KeyCode::Down), Some(0));
        assert_eq!(move_focus(Step::Beverage, 0, KeyCode::Up), Some(1));
        assert_eq!(move_focus(Step::Success, 0, KeyCode::Down), None);
        assert_eq!(move_focus(Step::Companion, 1, KeyCode::Enter), None);
    }

    #[test]
    fn focus_maps_to_the_rendered_option() {
        assert_eq!(
            selection_for(Step::Companion, 0),
            Some(Selection::Companion(Companion::Alone))
        );
        assert_eq!(
            selection_for(Step::Beverage, 1),
            Some(Selection::Beverage(Beverage::OwnDrink))
        );
        assert_eq!(selection_for(Step::Name, 10), None);
        assert_eq!(selection_for(Step::Success, 0), None);
    }
}
