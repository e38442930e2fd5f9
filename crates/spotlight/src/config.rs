#![forbid(unsafe_code)]

//! Spotlight configuration.
//!
//! A [`SpotlightConfig`] is a plain value: building or decoding one has no
//! side effects. Handing it to [`Spotlight::apply`](crate::Spotlight::apply)
//! is the step that pushes content into the message and re-runs layout.
//!
//! # Example
//!
//! ```
//! use spotlight::{DismissPolicy, SpotlightConfig};
//!
//! let config = SpotlightConfig::default()
//!     .title("Search")
//!     .description("Find anything from here.")
//!     .dismiss(DismissPolicy::Anywhere);
//! assert_eq!(config.entrance_ms, 400);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use spotlight_core::geometry::Sides;
use spotlight_layout::{DefaultLayoutManager, Gravity, IndicatorLayoutInfo};

use crate::error::{ConfigError, Result};

/// Which touches end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissPolicy {
    /// Any touch.
    Anywhere,
    /// Any touch outside the message.
    OutsideMessage,
    /// Touches on the highlighted target.
    #[default]
    TargetOnly,
    /// Touches on the message.
    MessageOnly,
}

/// Everything a host can configure about a spotlight session.
///
/// Insets and reserved sides are in pixels; the indicator spacing is in
/// density-independent units and is scaled by `density`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpotlightConfig {
    /// Overlay insets; the message is kept inside the container minus these.
    pub insets: Sides,
    /// System UI (navigation bar, cutouts) excluded from gravity selection.
    pub reserved: Sides,
    pub dismiss: DismissPolicy,
    /// Pinned gravity; selected automatically when `None`.
    pub gravity: Option<Gravity>,
    /// Entrance fade duration in milliseconds.
    pub entrance_ms: u64,
    /// With [`DismissPolicy::TargetOnly`], let touches on the target reach the
    /// underlying UI and swallow everything else without dismissing.
    pub pass_through: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Shrink the message to fit the room on its side.
    pub auto_resize: bool,
    /// Per-overlay indicator spacing; the process-wide default when `None`.
    pub indicator: Option<IndicatorLayoutInfo>,
    /// Pixels per density-independent unit.
    pub density: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            insets: Sides::ZERO,
            reserved: Sides::ZERO,
            dismiss: DismissPolicy::default(),
            gravity: None,
            entrance_ms: Self::DEFAULT_ENTRANCE_MS,
            pass_through: false,
            title: None,
            description: None,
            auto_resize: false,
            indicator: None,
            density: 1.0,
        }
    }
}

impl SpotlightConfig {
    pub const DEFAULT_ENTRANCE_MS: u64 = 400;

    /// Decode and validate a JSON document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        for (field, sides) in [("insets", self.insets), ("reserved", self.reserved)] {
            if !sides.is_non_negative() {
                return Err(ConfigError::NegativeSides { field, sides });
            }
        }
        if let Some(info) = self.indicator
            && !info.is_valid()
        {
            return Err(ConfigError::InvalidIndicator(info));
        }
        Ok(())
    }

    /// Set overlay insets.
    #[must_use]
    pub fn insets(mut self, insets: impl Into<Sides>) -> Self {
        self.insets = insets.into();
        self
    }

    /// Set reserved system-UI sides.
    #[must_use]
    pub fn reserved(mut self, reserved: impl Into<Sides>) -> Self {
        self.reserved = reserved.into();
        self
    }

    #[must_use]
    pub fn dismiss(mut self, policy: DismissPolicy) -> Self {
        self.dismiss = policy;
        self
    }

    /// Pin the gravity, or pass `None` to select it automatically.
    #[must_use]
    pub fn gravity(mut self, gravity: impl Into<Option<Gravity>>) -> Self {
        self.gravity = gravity.into();
        self
    }

    #[must_use]
    pub fn entrance_ms(mut self, ms: u64) -> Self {
        self.entrance_ms = ms;
        self
    }

    #[must_use]
    pub fn pass_through(mut self, enabled: bool) -> Self {
        self.pass_through = enabled;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = enabled;
        self
    }

    #[must_use]
    pub fn indicator(mut self, info: IndicatorLayoutInfo) -> Self {
        self.indicator = Some(info);
        self
    }

    #[must_use]
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Entrance duration as a [`Duration`].
    #[must_use]
    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }

    /// Whether touches on the target are handed back to the host.
    #[must_use]
    pub fn passes_target_touches(&self) -> bool {
        self.pass_through && self.dismiss == DismissPolicy::TargetOnly
    }

    /// The stock layout manager configured from these values.
    #[must_use]
    pub fn layout_manager(&self) -> DefaultLayoutManager {
        let manager = DefaultLayoutManager::new()
            .density(self.density)
            .auto_resize(self.auto_resize);
        match self.indicator {
            Some(info) => manager.indicator(info),
            None => manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SpotlightConfig::default();
        assert_eq!(config.dismiss, DismissPolicy::TargetOnly);
        assert_eq!(config.entrance_duration(), Duration::from_millis(400));
        assert_eq!(config.gravity, None);
        assert!((config.density - 1.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_uses_snake_case_and_defaults() {
        let config = SpotlightConfig::from_json(
            r#"{
                "dismiss": "outside_message",
                "gravity": "left",
                "insets": {"top": 8, "left": 8},
                "reserved": {"bottom": 48},
                "title": "Inbox"
            }"#,
        )
        .unwrap();
        assert_eq!(config.dismiss, DismissPolicy::OutsideMessage);
        assert_eq!(config.gravity, Some(Gravity::Left));
        assert_eq!(config.insets, Sides::new(8, 0, 0, 8));
        assert_eq!(config.reserved, Sides::bottom(48));
        assert_eq!(config.title.as_deref(), Some("Inbox"));
        assert_eq!(config.entrance_ms, 400);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = SpotlightConfig::from_json(r#"{"dismis": "anywhere"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn json_rejects_bad_density() {
        let err = SpotlightConfig::from_json(r#"{"density": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDensity(_)));
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn json_rejects_negative_sides() {
        let err = SpotlightConfig::from_json(r#"{"insets": {"left": -500, "right": -500}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeSides {
                field: "insets",
                ..
            }
        ));

        let err = SpotlightConfig::from_json(r#"{"reserved": {"bottom": -1}}"#).unwrap_err();
        assert!(err.to_string().starts_with("reserved"));
    }

    #[test]
    fn json_rejects_inverted_indicator() {
        let err = SpotlightConfig::from_json(
            r#"{"indicator": {"min_length": 50, "max_length": 10}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIndicator(_)));
    }

    #[test]
    fn pass_through_only_applies_to_target_only() {
        let config = SpotlightConfig::default().pass_through(true);
        assert!(config.passes_target_touches());
        assert!(
            !config
                .dismiss(DismissPolicy::Anywhere)
                .passes_target_touches()
        );
    }

    #[test]
    fn layout_manager_carries_overrides() {
        let manager = SpotlightConfig::default()
            .indicator(IndicatorLayoutInfo::new(2, 2, 20, 4))
            .density(2.0)
            .auto_resize(true)
            .layout_manager();
        assert!(manager.is_auto_resize());
        assert_eq!(
            manager.indicator_info(),
            IndicatorLayoutInfo::new(4, 4, 40, 8)
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = SpotlightConfig::default()
            .gravity(Gravity::Bottom)
            .title("A")
            .insets(12);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SpotlightConfig::from_json(&json).unwrap(), config);
    }
}
