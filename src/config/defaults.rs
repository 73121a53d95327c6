//! Default configurations and presets for product-ranker.

use super::types::{AppConfig, OutputConfig, QueryConfig, RankingConfig};
use crate::reports::ReportFormat;

/// Rows shown by the compact preset.
pub const COMPACT_LIMIT: usize = 3;

/// Upper bound for `query.max_keywords`.
pub const MAX_QUERY_KEYWORDS: usize = 20;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Auto-detected format, full ranking
    Default,
    /// Summary of the top few listings
    Compact,
    /// Table with per-dimension breakdown
    Detailed,
    /// JSON for scripts and pipelines
    Machine,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Detailed => "detailed",
            Self::Machine => "machine",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "compact" | "brief" | "top" => Some(Self::Compact),
            "detailed" | "full" | "breakdown" => Some(Self::Detailed),
            "machine" | "json" | "ci" => Some(Self::Machine),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Auto-detected output showing every ranked listing",
            Self::Compact => "Short summary of the top three listings",
            Self::Detailed => "Table with the per-dimension score breakdown",
            Self::Machine => "JSON output for scripts and pipelines",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Compact, Self::Detailed, Self::Machine]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Compact => Self::compact_preset(),
            ConfigPreset::Detailed => Self::detailed_preset(),
            ConfigPreset::Machine => Self::machine_preset(),
        }
    }

    /// Compact preset: summary, top three, no breakdown.
    #[must_use]
    pub fn compact_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Summary,
                ..OutputConfig::default()
            },
            ranking: RankingConfig {
                show_breakdown: false,
                limit: Some(COMPACT_LIMIT),
                ..RankingConfig::default()
            },
            query: QueryConfig::default(),
        }
    }

    /// Detailed preset: table with breakdown columns.
    #[must_use]
    pub fn detailed_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Table,
                ..OutputConfig::default()
            },
            ranking: RankingConfig {
                show_breakdown: true,
                ..RankingConfig::default()
            },
            query: QueryConfig::default(),
        }
    }

    /// Machine preset: JSON, no colour.
    #[must_use]
    pub fn machine_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            ranking: RankingConfig::default(),
            query: QueryConfig::default(),
        }
    }
}
