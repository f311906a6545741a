//! Keyboard input handling

use crate::sim::InputState;

/// The four bar controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKey {
    RaiseLeft,
    LowerLeft,
    RaiseRight,
    LowerRight,
}

impl BarKey {
    /// Map a `KeyboardEvent.key` value; unrelated keys give `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(BarKey::RaiseLeft),
            "s" => Some(BarKey::LowerLeft),
            "i" => Some(BarKey::RaiseRight),
            "j" => Some(BarKey::LowerRight),
            _ => None,
        }
    }
}

/// Set (press) or clear (release) the flag for `key`.
///
/// Returns false if the key does not control the bar.
pub fn apply_key(input: &mut InputState, key: &str, pressed: bool) -> bool {
    let Some(bar_key) = BarKey::from_key(key) else {
        return false;
    };

    let flag = match bar_key {
        BarKey::RaiseLeft => &mut input.raise_left,
        BarKey::LowerLeft => &mut input.lower_left,
        BarKey::RaiseRight => &mut input.raise_right,
        BarKey::LowerRight => &mut input.lower_right,
    };
    *flag = pressed;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::default();
        assert!(apply_key(&mut input, "w", true));
        assert!(apply_key(&mut input, "j", true));
        assert!(input.raise_left);
        assert!(input.lower_right);
        assert!(!input.lower_left);

        assert!(apply_key(&mut input, "w", false));
        assert!(!input.raise_left);
        assert!(input.lower_right);
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let mut input = InputState::default();
        assert!(!apply_key(&mut input, "a", true));
        assert!(!apply_key(&mut input, "W", true));
        assert!(!apply_key(&mut input, "ArrowUp", true));
        assert_eq!(input, InputState::default());
    }
}
