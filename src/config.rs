use serde::{Deserialize, Serialize};

/// Movement allowed, in client coordinate units, before a pressed pointer
/// stops being a tap candidate and becomes a pan.
pub const DEFAULT_TAP_TOLERANCE: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub tap_tolerance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_tolerance: DEFAULT_TAP_TOLERANCE,
        }
    }
}

impl GestureConfig {
    pub fn with_tap_tolerance(mut self, tap_tolerance: f64) -> Self {
        self.tap_tolerance = tap_tolerance;
        self.sanitized()
    }

    /// Replaces a negative or non-finite tolerance with the default.
    pub fn sanitized(self) -> Self {
        if self.tap_tolerance.is_finite() && self.tap_tolerance >= 0.0 {
            self
        } else {
            Self::default()
        }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(raw).map(Self::sanitized)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
