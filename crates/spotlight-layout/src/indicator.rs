#![forbid(unsafe_code)]

//! Spacing parameters for the indicator segment between target and message.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Spacing along the placement axis, in density-independent units.
///
/// Reading outward from the target: `margin_start`, then the indicator
/// (between `min_length` and `max_length`), then `margin_end`, then the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorLayoutInfo {
    /// Gap between the target edge and the indicator.
    pub margin_start: i32,
    /// Gap between the indicator and the message.
    pub margin_end: i32,
    /// Longest the indicator may grow.
    pub max_length: i32,
    /// Length reserved for the indicator when sizing an auto-resized message.
    pub min_length: i32,
}

static GLOBAL_DEFAULT: LazyLock<ArcSwap<IndicatorLayoutInfo>> =
    LazyLock::new(|| ArcSwap::from_pointee(IndicatorLayoutInfo::BUILTIN));

impl Default for IndicatorLayoutInfo {
    fn default() -> Self {
        Self::BUILTIN
    }
}

impl IndicatorLayoutInfo {
    /// Values used until [`IndicatorLayoutInfo::set_global_default`] is called.
    pub const BUILTIN: Self = Self::new(10, 0, 40, 0);

    pub const fn new(margin_start: i32, margin_end: i32, max_length: i32, min_length: i32) -> Self {
        Self {
            margin_start,
            margin_end,
            max_length,
            min_length,
        }
    }

    /// The process-wide default used by layout managers without an override.
    #[must_use]
    pub fn global_default() -> Self {
        **GLOBAL_DEFAULT.load()
    }

    /// Replace the process-wide default.
    ///
    /// Managers created with an explicit override are unaffected.
    pub fn set_global_default(info: IndicatorLayoutInfo) {
        GLOBAL_DEFAULT.store(Arc::new(info));
    }

    /// Sum of both margins.
    #[inline]
    #[must_use]
    pub const fn margins(&self) -> i32 {
        self.margin_start.saturating_add(self.margin_end)
    }

    /// Margins plus the longest indicator.
    #[inline]
    #[must_use]
    pub const fn total_length(&self) -> i32 {
        self.margins().saturating_add(self.max_length)
    }

    /// Margins plus the shortest indicator.
    #[inline]
    #[must_use]
    pub const fn min_total_length(&self) -> i32 {
        self.margins().saturating_add(self.min_length)
    }

    /// Convert to pixels, truncating toward zero.
    #[must_use]
    pub fn scaled(&self, density: f32) -> Self {
        let scale = |v: i32| (v as f32 * density) as i32;
        Self::new(
            scale(self.margin_start),
            scale(self.margin_end),
            scale(self.max_length),
            scale(self.min_length),
        )
    }

    /// All values non-negative and `min_length <= max_length`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.margin_start >= 0
            && self.margin_end >= 0
            && self.max_length >= 0
            && self.min_length >= 0
            && self.min_length <= self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_values() {
        let info = IndicatorLayoutInfo::BUILTIN;
        assert_eq!(info.margin_start, 10);
        assert_eq!(info.margin_end, 0);
        assert_eq!(info.max_length, 40);
        assert_eq!(info.min_length, 0);
        assert_eq!(info.total_length(), 50);
        assert_eq!(info.min_total_length(), 10);
    }

    #[test]
    fn scaling_truncates() {
        let info = IndicatorLayoutInfo::new(10, 3, 40, 5).scaled(1.5);
        assert_eq!(info, IndicatorLayoutInfo::new(15, 4, 60, 7));
    }

    #[test]
    fn validity() {
        assert!(IndicatorLayoutInfo::BUILTIN.is_valid());
        assert!(!IndicatorLayoutInfo::new(-1, 0, 40, 0).is_valid());
        assert!(!IndicatorLayoutInfo::new(0, 0, 10, 20).is_valid());
    }

    #[test]
    fn serde_fills_missing_fields_from_builtin() {
        let info: IndicatorLayoutInfo = serde_json::from_str(r#"{"max_length": 64}"#).unwrap();
        assert_eq!(info, IndicatorLayoutInfo::new(10, 0, 64, 0));
    }
}
