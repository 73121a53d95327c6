//! Configuration module for product-ranker.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use product_ranker::config::{AppConfig, ConfigPreset};
//! use product_ranker::reports::ReportFormat;
//!
//! let config = AppConfig::from_preset(ConfigPreset::Detailed);
//! assert!(config.ranking.show_breakdown);
//!
//! let config = AppConfig::builder()
//!     .output_format(ReportFormat::Json)
//!     .limit(Some(5))
//!     .build();
//! assert_eq!(config.ranking.limit, Some(5));
//! ```
//!
//! # Configuration File
//!
//! Place a `.product-ranker.yaml` file in your project root or
//! `~/.config/product-ranker/`:
//!
//! ```yaml
//! output:
//!   format: table
//! ranking:
//!   show_breakdown: true
//!   currency_symbol: "€"
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, COMPACT_LIMIT, MAX_QUERY_KEYWORDS};
pub use types::{AppConfig, AppConfigBuilder, OutputConfig, QueryConfig, RankingConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option that can be set in a `.product-ranker.yaml` file,
/// for editor validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
