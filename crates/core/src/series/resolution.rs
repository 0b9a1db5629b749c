//! User-facing series resolution and its target-point mapping.

use praxis_shared::config::SeriesConfig;
use serde::{Deserialize, Serialize};

/// Resolution of a reporting time series.
///
/// Callers pick a resolution; the engine maps it to a target point budget
/// for the downsampler. The mapping is deployment policy and can be
/// overridden through [`SeriesConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Coarse series for small charts (default 60 points).
    Low,
    /// Standard series (default 120 points).
    Standard,
    /// Fine series for detailed views (default 365 points).
    High,
}

impl Resolution {
    /// The built-in target point budget for this resolution.
    #[must_use]
    pub const fn default_target_points(self) -> usize {
        match self {
            Self::Low => 60,
            Self::Standard => 120,
            Self::High => 365,
        }
    }

    /// The configured target point budget for this resolution.
    #[must_use]
    pub const fn target_points(self, config: &SeriesConfig) -> usize {
        match self {
            Self::Low => config.low_points,
            Self::Standard => config.standard_points,
            Self::High => config.high_points,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Standard
    }
}
