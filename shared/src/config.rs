use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::WheelError;

/// Cubic bezier timing curve used for the spin transition.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Easing {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Easing {
    pub fn to_css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

impl Default for Easing {
    fn default() -> Self {
        let [x1, y1, x2, y2] = SPIN_EASING;
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfig {
    pub spin_duration_ms: u32,
    pub reveal_buffer_ms: u32,
    pub min_extra_spins: u32,
    pub max_extra_spins: u32,
    pub pointer_angle: f64,
    pub max_items: usize,
    pub label_max_chars: usize,
    pub label_truncate_chars: usize,
    pub easing: Easing,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            reveal_buffer_ms: REVEAL_BUFFER_MS,
            min_extra_spins: MIN_EXTRA_SPINS,
            max_extra_spins: MAX_EXTRA_SPINS,
            pointer_angle: POINTER_ANGLE,
            max_items: MAX_ITEMS,
            label_max_chars: LABEL_MAX_CHARS,
            label_truncate_chars: LABEL_TRUNCATE_CHARS,
            easing: Easing::default(),
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.min_extra_spins > self.max_extra_spins {
            return Err(WheelError::InvalidConfig(format!(
                "min_extra_spins {} exceeds max_extra_spins {}",
                self.min_extra_spins, self.max_extra_spins
            )));
        }
        if self.max_items < MIN_SPIN_ITEMS {
            return Err(WheelError::InvalidConfig(format!(
                "max_items must be at least {}",
                MIN_SPIN_ITEMS
            )));
        }
        if !(0.0..FULL_TURN).contains(&self.pointer_angle) {
            return Err(WheelError::InvalidConfig(format!(
                "pointer_angle {} outside [0, 360)",
                self.pointer_angle
            )));
        }
        if self.label_truncate_chars > self.label_max_chars {
            return Err(WheelError::InvalidConfig(
                "label_truncate_chars exceeds label_max_chars".to_string(),
            ));
        }
        Ok(())
    }

    /// Time from spin start until the winner is revealed.
    pub fn reveal_delay_ms(&self) -> u32 {
        self.spin_duration_ms + self.reveal_buffer_ms
    }

    pub fn transition_css(&self) -> String {
        format!(
            "transform {}s {}",
            self.spin_duration_ms as f64 / 1000.0,
            self.easing.to_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reveal_delay_ms(), 7000);
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(
            WheelConfig::default().transition_css(),
            "transform 6s cubic-bezier(0.15, 0.6, 0.3, 1)"
        );
    }

    #[test]
    fn test_rejects_inverted_spin_range() {
        let config = WheelConfig {
            min_extra_spins: 8,
            max_extra_spins: 5,
            ..WheelConfig::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_pointer_out_of_range() {
        let config = WheelConfig {
            pointer_angle: 360.0,
            ..WheelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_single_item_wheel() {
        let config = WheelConfig {
            max_items: 1,
            ..WheelConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
