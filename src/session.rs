//! A play session: game state, settings and the store they persist to
//!
//! Every user-facing action goes through here so the store is written on every
//! change.

use crate::consts::{BALL_ACCELERATION_SLIDER_MAX, BAR_SPEED_SLIDER_MAX};
use crate::persistence::Store;
use crate::settings::{self, Settings};
use crate::sim::{GameState, RoundPhase, tick};

pub struct Session<S: Store> {
    pub state: GameState,
    settings: Settings,
    store: S,
}

impl<S: Store> Session<S> {
    /// Load settings from `store` and set up the first round
    pub fn open(mut store: S) -> Self {
        let settings = Settings::load(&mut store);
        let state = GameState::new(settings.seed, settings.tuning());
        log::info!(
            "Session opened (seed {}, bar speed {}, gravity {})",
            settings.seed,
            state.tuning.bar_speed,
            state.tuning.gravity
        );
        Self {
            state,
            settings,
            store,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one frame of the round
    pub fn step(&mut self) -> RoundPhase {
        tick(&mut self.state)
    }

    /// Start the round over; the hole layout stays
    pub fn reset(&mut self) {
        self.state.reset_round();
        log::info!("Round reset (seed {})", self.state.seed());
    }

    /// Pick a fresh seed, swap in its layout and persist it
    pub fn change_seed(&mut self) -> u32 {
        self.set_seed(settings::fresh_seed())
    }

    /// Use `seed` for the hole layout and persist it
    pub fn set_seed(&mut self, seed: u32) -> u32 {
        self.state.reseed(seed);
        self.settings.seed = seed;
        self.settings.save_seed(&mut self.store);
        log::info!("Seed changed to {}", seed);
        seed
    }

    /// Apply and persist a bar speed slider value; returns its label.
    ///
    /// Values past the slider maximum are clamped so a reload reads them back.
    pub fn set_bar_speed(&mut self, raw: u32) -> &'static str {
        let raw = settings::clamp_slider(settings::BAR_SPEED_KEY, raw, BAR_SPEED_SLIDER_MAX);
        self.settings.bar_speed = Some(raw);
        self.settings.save_bar_speed(&mut self.store);
        self.state.tuning = self.settings.tuning();
        self.settings.bar_speed_label()
    }

    /// Apply and persist a ball acceleration slider value; returns its label
    pub fn set_ball_acceleration(&mut self, raw: u32) -> &'static str {
        let raw = settings::clamp_slider(
            settings::BALL_ACCELERATION_KEY,
            raw,
            BALL_ACCELERATION_SLIDER_MAX,
        );
        self.settings.ball_acceleration = Some(raw);
        self.settings.save_ball_acceleration(&mut self.store);
        self.state.tuning = self.settings.tuning();
        self.settings.ball_acceleration_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SEED_RANGE;
    use crate::persistence::MemoryStore;
    use crate::settings::{BALL_ACCELERATION_KEY, BAR_SPEED_KEY, SEED_KEY};
    use crate::sim::HoleLayout;

    fn session_with_seed(seed: &str) -> Session<MemoryStore> {
        Session::open(MemoryStore::with_entries([(SEED_KEY, seed)]))
    }

    #[test]
    fn test_open_uses_stored_seed() {
        let session = session_with_seed("42");
        assert_eq!(session.state.seed(), 42);
        assert_eq!(session.state.layout, HoleLayout::new(42));
    }

    #[test]
    fn test_change_seed_persists_and_regenerates() {
        let mut session = session_with_seed("42");
        let seed = session.change_seed();
        assert!(seed < SEED_RANGE);
        assert_eq!(session.state.seed(), seed);
        assert_eq!(session.state.layout, HoleLayout::new(seed));
        assert_eq!(session.store().get(SEED_KEY), Some(seed.to_string()));
        assert_eq!(session.settings().seed, seed);
    }

    #[test]
    fn test_reset_keeps_seed_and_holes() {
        let mut session = session_with_seed("7");
        session.state.input.lower_right = true;
        for _ in 0..10 {
            session.step();
        }
        let holes = session.state.holes().to_vec();
        session.reset();
        assert_eq!(session.state.phase, RoundPhase::Running);
        assert_eq!(session.state.holes(), holes.as_slice());
        assert!(!session.state.input.lower_right);
    }

    #[test]
    fn test_slider_changes_apply_and_persist() {
        let mut session = session_with_seed("7");
        assert_eq!(session.set_bar_speed(10), "yeah right");
        assert!((session.state.tuning.bar_speed - 8.0).abs() < 1e-12);
        assert_eq!(session.store().get(BAR_SPEED_KEY).as_deref(), Some("10"));

        assert_eq!(session.set_ball_acceleration(0), "super lil bitch");
        assert_eq!(session.state.tuning.gravity, 0.0);
        assert_eq!(
            session.store().get(BALL_ACCELERATION_KEY).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_settings_survive_reopen() {
        let mut session = session_with_seed("7");
        session.set_seed(77);
        session.set_bar_speed(5);
        let store = session.store().clone();

        let reopened = Session::open(store);
        assert_eq!(reopened.state.seed(), 77);
        assert_eq!(reopened.settings().bar_speed, Some(5));
        assert!((reopened.state.tuning.bar_speed - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_slider_survives_reopen() {
        let mut session = session_with_seed("7");
        assert_eq!(session.set_bar_speed(20), "yeah right");
        session.set_ball_acceleration(500);
        assert_eq!(session.store().get(BAR_SPEED_KEY).as_deref(), Some("10"));
        assert_eq!(
            session.store().get(BALL_ACCELERATION_KEY).as_deref(),
            Some("50")
        );
        let live = session.state.tuning;

        let reopened = Session::open(session.store().clone());
        assert_eq!(reopened.settings().bar_speed, Some(BAR_SPEED_SLIDER_MAX));
        assert_eq!(
            reopened.settings().ball_acceleration,
            Some(BALL_ACCELERATION_SLIDER_MAX)
        );
        assert_eq!(reopened.state.tuning, live);
    }
}
