//! Decorative effects and the animation helpers behind the screens

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rsvp::cli::tui::effects::{lifetime, EffectBoard, CONFETTI_LIFETIME, CONFETTI_PIECES};
use rsvp::cli::tui::screens::beverage::fill_level;
use rsvp::cli::tui::screens::companion::swim_offset;
use rsvp::response::{Beverage, Companion, Guest, Selection};
use rsvp::wizard::{Action, Celebration, Effect, WizardState};

fn rng() -> StdRng {
    StdRng::seed_from_u64(24)
}

#[test]
fn disabled_board_stays_empty() {
    let mut board = EffectBoard::new(false, false);
    let now = Instant::now();

    for celebration in [
        Celebration::Confetti,
        Celebration::BalloonPop(Guest::Enzo),
        Celebration::FishCaught(Companion::Homi),
        Celebration::SadCursor,
        Celebration::GlassFill(Beverage::Shared),
    ] {
        assert!(!board.fire_with_rng(celebration, now, &mut rng()));
    }

    assert!(board.is_empty());
    assert!(board.confetti_at(now).is_empty());
}

#[test]
fn reducer_output_does_not_depend_on_the_board() {
    let run = |animations: bool| {
        let mut board = EffectBoard::new(animations, true);
        let (state, effects) =
            WizardState::new().reduce(Action::Select(Selection::Name(Guest::Douglas)));
        for effect in &effects {
            if let Effect::Celebrate(celebration) = effect {
                board.fire_with_rng(*celebration, Instant::now(), &mut rng());
            }
        }
        (state.step(), state.record().clone(), effects)
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn confetti_burst_expires_after_four_seconds() {
    let mut board = EffectBoard::new(true, true);
    let start = Instant::now();
    board.fire_with_rng(Celebration::Confetti, start, &mut rng());

    assert!(board.is_active(&Celebration::Confetti));
    let visible = board.confetti_at(start + Duration::from_millis(500)).len();
    assert!(visible > 0 && visible <= CONFETTI_PIECES);

    board.prune(start + CONFETTI_LIFETIME - Duration::from_millis(1));
    assert!(board.is_active(&Celebration::Confetti));

    board.prune(start + CONFETTI_LIFETIME);
    assert!(!board.is_active(&Celebration::Confetti));
    assert!(board.confetti_at(start + CONFETTI_LIFETIME).is_empty());
}

#[test]
fn confetti_falls() {
    let mut board = EffectBoard::new(true, false);
    let start = Instant::now();
    board.fire_with_rng(Celebration::Confetti, start, &mut rng());

    let mean_y = |at: Instant| {
        let pieces = board.confetti_at(at);
        pieces.iter().map(|(_, y, _, _)| y).sum::<f64>() / pieces.len().max(1) as f64
    };
    assert!(mean_y(start + Duration::from_secs(2)) > mean_y(start + Duration::from_millis(500)));
}

#[test]
fn chirp_rings_only_with_sound_on() {
    let now = Instant::now();
    assert!(EffectBoard::new(true, true).fire(Celebration::Chirp, now));
    assert!(EffectBoard::new(false, true).fire(Celebration::Chirp, now));
    assert!(!EffectBoard::new(true, false).fire(Celebration::Chirp, now));

    let mut board = EffectBoard::new(true, true);
    board.fire(Celebration::Chirp, now);
    assert!(board.is_empty(), "the bell leaves nothing on screen");
}

#[test]
fn sad_cursor_lasts_until_cleared() {
    let mut board = EffectBoard::new(true, true);
    let now = Instant::now();
    board.fire(Celebration::SadCursor, now);
    assert_eq!(lifetime(&Celebration::SadCursor), None);

    board.prune(now + Duration::from_secs(3600));
    assert!(board.is_sad());

    board.clear();
    assert!(!board.is_sad());
}

#[test]
fn fish_swim_through_their_keyframes() {
    assert_eq!(swim_offset(Duration::ZERO), (0, 0));
    assert_eq!(swim_offset(Duration::from_secs(1)), (5, -2));
    assert_eq!(swim_offset(Duration::from_secs(2)), (-3, 3));
    assert_eq!(swim_offset(Duration::from_secs(3)), (2, -1));
    // one loop is four seconds
    assert_eq!(swim_offset(Duration::from_secs(4)), (0, 0));
    assert_eq!(swim_offset(Duration::from_secs(5)), (5, -2));
    // halfway between the first two keyframes
    assert_eq!(swim_offset(Duration::from_millis(500)), (3, -1));
}

#[test]
fn glasses_fill_while_the_effect_plays() {
    let mut board = EffectBoard::new(true, true);
    let start = Instant::now();
    let chosen = Some(Selection::Beverage(Beverage::Shared));

    assert_eq!(fill_level(&board, Beverage::Shared, None, start), 0.0);

    board.fire(Celebration::GlassFill(Beverage::Shared), start);
    let halfway = fill_level(&board, Beverage::Shared, chosen, start + Duration::from_secs(1));
    assert!((halfway - 0.5).abs() < 1e-9);
    assert_eq!(fill_level(&board, Beverage::OwnDrink, chosen, start), 0.0);

    board.prune(start + Duration::from_secs(2));
    assert_eq!(fill_level(&board, Beverage::Shared, chosen, start + Duration::from_secs(2)), 1.0);
}

#[test]
fn without_animations_a_chosen_glass_is_simply_full() {
    let board = EffectBoard::new(false, false);
    let chosen = Some(Selection::Beverage(Beverage::OwnDrink));
    assert_eq!(fill_level(&board, Beverage::OwnDrink, chosen, Instant::now()), 1.0);
}
