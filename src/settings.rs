//! Game settings and preferences
//!
//! Persisted as separate base-10 strings in LocalStorage. Anything missing or
//! unreadable falls back to the built-in default instead of reaching the game.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::Store;
use crate::sim::Tuning;

/// Storage keys
pub const SEED_KEY: &str = "gameSeed";
pub const BAR_SPEED_KEY: &str = "barSpeed";
pub const BALL_ACCELERATION_KEY: &str = "ballAcceleration";

/// Slider difficulty labels, easiest first
pub const DIFFICULTY_LABELS: [&str; 5] = ["super lil bitch", "lil bitch", "ok", "dam", "yeah right"];

/// Map a slider position onto one of the five difficulty labels.
///
/// Buckets are `floor(value / max * 4)`, so only `value == max` reaches the
/// last label.
pub fn difficulty_label(value: u32, max: u32) -> &'static str {
    if max == 0 {
        return DIFFICULTY_LABELS[0];
    }
    let buckets = (DIFFICULTY_LABELS.len() - 1) as f64;
    let index = (f64::from(value) / f64::from(max) * buckets).floor() as usize;
    DIFFICULTY_LABELS[index.min(DIFFICULTY_LABELS.len() - 1)]
}

/// Raw bar speed slider value -> endpoint movement per step
pub fn interpret_bar_speed(raw: u32) -> f64 {
    f64::from(raw) * SLIDER_SCALE
}

/// Raw ball acceleration slider value -> gravity factor
pub fn interpret_ball_acceleration(raw: u32) -> f64 {
    f64::from(raw) * SLIDER_SCALE
}

/// Draw a fresh seed in `0..SEED_RANGE`
pub fn fresh_seed() -> u32 {
    rand::rng().random_range(0..SEED_RANGE)
}

/// Parse a stored seed. Negative values are kept as their 32-bit pattern.
///
/// Stricter than the browser build: trailing junk such as `"12abc"` and
/// values outside the 32-bit range are rejected rather than truncated or
/// wrapped, so those seeds fall back to a fresh one.
pub fn parse_seed(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<i32>().ok().map(|s| s as u32))
}

/// Parse a stored slider value, rejecting anything outside `0..=max`
pub fn parse_slider(raw: &str, max: u32) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v <= max)
}

/// Pull a slider value into `0..=max`, warning when it had to move
pub fn clamp_slider(key: &str, raw: u32, max: u32) -> u32 {
    if raw > max {
        log::warn!("Clamping {} {} to {}", key, raw, max);
    }
    raw.min(max)
}

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Hole layout seed
    pub seed: u32,
    /// Raw bar speed slider value (None = built-in speed)
    pub bar_speed: Option<u32>,
    /// Raw ball acceleration slider value (None = built-in gravity)
    pub ball_acceleration: Option<u32>,
}

impl Settings {
    /// Load settings from the store.
    ///
    /// A missing or unreadable seed is replaced by a fresh one, which is
    /// written back straight away.
    pub fn load(store: &mut impl Store) -> Self {
        let seed = match store.get(SEED_KEY) {
            Some(raw) => match parse_seed(&raw) {
                Some(seed) => {
                    log::info!("Loaded seed {} from storage", seed);
                    Some(seed)
                }
                None => {
                    log::warn!("Ignoring malformed stored seed {:?}", raw);
                    None
                }
            },
            None => None,
        };

        let seed = seed.unwrap_or_else(|| {
            let seed = fresh_seed();
            store.set(SEED_KEY, &seed.to_string());
            log::info!("Generated new seed {}", seed);
            seed
        });

        Self {
            seed,
            bar_speed: load_slider(&*store, BAR_SPEED_KEY, BAR_SPEED_SLIDER_MAX),
            ball_acceleration: load_slider(
                &*store,
                BALL_ACCELERATION_KEY,
                BALL_ACCELERATION_SLIDER_MAX,
            ),
        }
    }

    /// Physics tuning implied by the slider values
    pub fn tuning(&self) -> Tuning {
        let defaults = Tuning::default();
        Tuning {
            bar_speed: self.bar_speed.map_or(defaults.bar_speed, interpret_bar_speed),
            gravity: self
                .ball_acceleration
                .map_or(defaults.gravity, interpret_ball_acceleration),
        }
    }

    pub fn save_seed(&self, store: &mut impl Store) {
        store.set(SEED_KEY, &self.seed.to_string());
    }

    pub fn save_bar_speed(&self, store: &mut impl Store) {
        if let Some(raw) = self.bar_speed {
            store.set(BAR_SPEED_KEY, &raw.to_string());
        }
    }

    pub fn save_ball_acceleration(&self, store: &mut impl Store) {
        if let Some(raw) = self.ball_acceleration {
            store.set(BALL_ACCELERATION_KEY, &raw.to_string());
        }
    }

    /// Label for the bar speed slider (built-in speed shown as its raw value)
    pub fn bar_speed_label(&self) -> &'static str {
        let raw = self
            .bar_speed
            .unwrap_or((BAR_MOVE_SPEED / SLIDER_SCALE).round() as u32);
        difficulty_label(raw, BAR_SPEED_SLIDER_MAX)
    }

    /// Label for the ball acceleration slider
    pub fn ball_acceleration_label(&self) -> &'static str {
        let raw = self
            .ball_acceleration
            .unwrap_or((GRAVITY / SLIDER_SCALE).round() as u32);
        difficulty_label(raw, BALL_ACCELERATION_SLIDER_MAX)
    }
}

fn load_slider(store: &impl Store, key: &str, max: u32) -> Option<u32> {
    let raw = store.get(key)?;
    let value = parse_slider(&raw, max);
    if value.is_none() {
        log::warn!("Ignoring malformed stored {} {:?}", key, raw);
    }
    value
}
