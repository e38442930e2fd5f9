#![forbid(unsafe_code)]

use spotlight_core::Sides;
use spotlight_layout::IndicatorLayoutInfo;
use thiserror::Error;

/// Errors produced while loading a [`SpotlightConfig`](crate::SpotlightConfig).
///
/// Everything past configuration is infallible: layout and session handling
/// degrade instead of failing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse spotlight config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("density must be finite and positive, got {0}")]
    InvalidDensity(f32),
    #[error("{field} must not have negative sides, got {sides:?}")]
    NegativeSides { field: &'static str, sides: Sides },
    #[error("indicator layout must be non-negative with min_length <= max_length, got {0:?}")]
    InvalidIndicator(IndicatorLayoutInfo),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
