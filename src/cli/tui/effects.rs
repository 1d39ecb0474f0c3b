//! Decorative effects: confetti, popping balloons, caught fish, filling glasses
//!
//! The board only records what is playing and for how long. Nothing in the
//! wizard reads it back, so an empty board (animations off) changes the look
//! and never the flow.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

use crate::wizard::Celebration;

pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(4);
pub const CONFETTI_PIECES: usize = 300;
/// Screen heights per second squared
pub const CONFETTI_GRAVITY: f64 = 0.15;
pub const CONFETTI_COLORS: [Color; 8] = [
    Color::Rgb(0xFF, 0xD7, 0x00),
    Color::Rgb(0xFF, 0x6B, 0x6B),
    Color::Rgb(0x4E, 0xCD, 0xC4),
    Color::Rgb(0x45, 0xB7, 0xD1),
    Color::Rgb(0x96, 0xCE, 0xB4),
    Color::Rgb(0xFF, 0xEA, 0xA7),
    Color::Rgb(0xDD, 0xA0, 0xDD),
    Color::Rgb(0x98, 0xD8, 0xC8),
];
const CONFETTI_GLYPHS: [char; 6] = ['▪', '▫', '●', '◆', '✦', '•'];

/// One confetti piece. Coordinates are fractions of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub glyph: char,
    pub color: Color,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(-0.3..0.0),
            vx: rng.gen_range(-0.05..0.05),
            vy: rng.gen_range(0.02..0.2),
            glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
        }
    }

    /// Position `t` seconds after the burst
    pub fn position_at(&self, t: f64) -> (f64, f64) {
        (
            self.x + self.vx * t,
            self.y + self.vy * t + 0.5 * CONFETTI_GRAVITY * t * t,
        )
    }
}

/// A celebration currently on screen
#[derive(Debug, Clone, Copy)]
pub struct ActiveEffect {
    pub celebration: Celebration,
    pub started: Instant,
    /// `None` lasts until the board is cleared
    pub expires: Option<Instant>,
}

/// How long each celebration stays on screen
pub fn lifetime(celebration: &Celebration) -> Option<Duration> {
    match celebration {
        Celebration::BalloonPop(_) => Some(Duration::from_millis(600)),
        Celebration::Confetti => Some(CONFETTI_LIFETIME),
        Celebration::Chirp => Some(Duration::ZERO),
        Celebration::FishCaught(_) => Some(Duration::from_millis(2000)),
        Celebration::SadCursor => None,
        Celebration::GlassFill(_) => Some(Duration::from_millis(2000)),
    }
}

pub struct EffectBoard {
    animations: bool,
    sound: bool,
    active: Vec<ActiveEffect>,
    confetti: Vec<Particle>,
}

impl EffectBoard {
    pub fn new(animations: bool, sound: bool) -> Self {
        Self {
            animations,
            sound,
            active: Vec::new(),
            confetti: Vec::new(),
        }
    }

    /// Start a celebration. Returns true when the caller should ring the bell.
    pub fn fire(&mut self, celebration: Celebration, now: Instant) -> bool {
        self.fire_with_rng(celebration, now, &mut rand::thread_rng())
    }

    pub fn fire_with_rng(
        &mut self,
        celebration: Celebration,
        now: Instant,
        rng: &mut impl Rng,
    ) -> bool {
        if celebration == Celebration::Chirp {
            return self.sound;
        }
        if !self.animations {
            return false;
        }

        if celebration == Celebration::Confetti {
            // a new burst replaces whatever is still falling
            self.active.retain(|effect| effect.celebration != Celebration::Confetti);
            self.confetti = (0..CONFETTI_PIECES).map(|_| Particle::random(rng)).collect();
        }

        self.active.push(ActiveEffect {
            celebration,
            started: now,
            expires: lifetime(&celebration).map(|d| now + d),
        });
        false
    }

    /// Drop expired effects
    pub fn prune(&mut self, now: Instant) {
        self.active
            .retain(|effect| effect.expires.map_or(true, |expires| now < expires));
        if !self.is_active(&Celebration::Confetti) {
            self.confetti.clear();
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.confetti.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, celebration: &Celebration) -> bool {
        self.active
            .iter()
            .any(|effect| effect.celebration == *celebration)
    }

    /// Whether the guest chose to come alone this run
    pub fn is_sad(&self) -> bool {
        self.is_active(&Celebration::SadCursor)
    }

    /// Fraction of `celebration`'s lifetime already played, if it is active
    pub fn progress(&self, celebration: &Celebration, now: Instant) -> Option<f64> {
        let effect = self
            .active
            .iter()
            .rev()
            .find(|effect| effect.celebration == *celebration)?;
        let total = effect.expires?.saturating_duration_since(effect.started);
        if total.is_zero() {
            return Some(1.0);
        }
        let played = now.saturating_duration_since(effect.started);
        Some((played.as_secs_f64() / total.as_secs_f64()).min(1.0))
    }

    /// Confetti pieces still on screen, as screen fractions
    pub fn confetti_at(&self, now: Instant) -> Vec<(f64, f64, char, Color)> {
        let Some(burst) = self
            .active
            .iter()
            .find(|effect| effect.celebration == Celebration::Confetti)
        else {
            return Vec::new();
        };

        let t = now.saturating_duration_since(burst.started).as_secs_f64();
        self.confetti
            .iter()
            .map(|particle| {
                let (x, y) = particle.position_at(t);
                (x, y, particle.glyph, particle.color)
            })
            .filter(|(x, y, _, _)| (0.0..1.0).contains(x) && (0.0..1.0).contains(y))
            .collect()
    }
}
