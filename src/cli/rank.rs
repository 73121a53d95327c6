//! Rank command handler.
//!
//! Implements the `rank` subcommand: load a batch, score it and render the
//! outcome in the configured format.

use crate::config::{AppConfig, ConfigPreset, Validatable};
use crate::pipeline::{
    auto_detect_format, exit_codes, load_request, load_sentiments, should_use_color, write_output,
    OutputTarget, RankingOutcome,
};
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Rank command configuration
pub struct RankCommand {
    /// Batch file, or `-` for stdin
    pub batch_path: PathBuf,
    /// Separate sentiment map file; replaces any sentiments in the batch
    pub sentiments_path: Option<PathBuf>,
    /// Narrative text; replaces any narrative in the batch
    pub narrative: Option<String>,
    /// Effective configuration (file, preset and flags already merged)
    pub config: AppConfig,
    pub quiet: bool,
}

/// Layer a named preset and CLI overrides over a file config.
///
/// Precedence, lowest first: defaults, config file, preset, flags.
pub fn resolve_rank_config(
    mut config: AppConfig,
    preset: Option<&str>,
    overrides: &AppConfig,
) -> Result<AppConfig> {
    if let Some(name) = preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("Unknown preset: {name}. Valid options: {}", valid.join(", "));
        };
        tracing::debug!("Applying preset {preset}");
        config.merge(&AppConfig::from_preset(preset));
    }
    config.merge(overrides);
    Ok(config)
}

/// Run the rank command, returning the desired exit code.
pub fn run_rank(command: RankCommand) -> Result<i32> {
    command.config.ensure_valid()?;

    let mut request = load_request(&command.batch_path)
        .with_context(|| format!("failed to load batch {}", command.batch_path.display()))?;

    if let Some(path) = &command.sentiments_path {
        if request.sentiments.is_some() {
            tracing::info!(
                "Sentiments from {} replace those in the batch file",
                path.display()
            );
        }
        let sentiments = load_sentiments(path)
            .with_context(|| format!("failed to load sentiments {}", path.display()))?;
        request.sentiments = Some(sentiments);
    }
    if command.narrative.is_some() {
        request.narrative.clone_from(&command.narrative);
    }

    let outcome = request.rank(&command.config.summarizer());

    let target = OutputTarget::from_option(command.config.output.file.clone());
    let source_name = source_name(&command.batch_path);
    let text = render_outcome(&outcome, &command.config, &target, Some(source_name))?;
    write_output(&text, &target, command.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Render an outcome for the given target using the configured format.
pub fn render_outcome(
    outcome: &RankingOutcome,
    config: &AppConfig,
    target: &OutputTarget,
    source_name: Option<String>,
) -> Result<String> {
    let format = auto_detect_format(config.output.format, target);
    let colored = should_use_color(config.output.no_color, target);
    let reporter = create_reporter_with_options(format, colored);
    let report_config: ReportConfig = config.report_config(source_name);
    reporter
        .generate(outcome, &report_config)
        .with_context(|| format!("failed to render {format} report"))
}

fn source_name(path: &std::path::Path) -> String {
    if path.as_os_str() == "-" {
        return "stdin".to_string();
    }
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankerError;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    const BATCH: &str = r#"{
        "products": [
            {"id": "a", "title": "Paper Towels, 6 Rolls", "price": "$12.00", "rating": 4.2},
            {"id": "b", "title": "Paper Towels, 12 Rolls", "price": 18, "rating": "4.6 out of 5",
             "shipping": {"isPrime": true}}
        ],
        "narrative": "   "
    }"#;

    fn command(dir: &TempDir, config: AppConfig) -> RankCommand {
        let batch_path = dir.path().join("batch.json");
        std::fs::write(&batch_path, BATCH).unwrap();
        RankCommand {
            batch_path,
            sentiments_path: None,
            narrative: None,
            config,
            quiet: true,
        }
    }

    fn json_config(dir: &TempDir) -> AppConfig {
        AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(dir.path().join("out.json")))
            .build()
    }

    fn read_json(dir: &TempDir) -> serde_json::Value {
        let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_run_rank_writes_json() {
        let dir = TempDir::new().unwrap();
        let code = run_rank(command(&dir, json_config(&dir))).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let json = read_json(&dir);
        assert_eq!(json["ranked"][0]["id"], "b");
        assert_eq!(json["summarySource"], "fallback");
        assert_eq!(json["metadata"]["source"], "batch.json");
    }

    #[test]
    fn test_run_rank_with_sentiment_file_and_narrative() {
        let dir = TempDir::new().unwrap();
        let sentiments = dir.path().join("sentiments.json");
        std::fs::write(&sentiments, r#"{"a": 90, "b": 40}"#).unwrap();

        let mut cmd = command(&dir, json_config(&dir));
        cmd.sentiments_path = Some(sentiments);
        cmd.narrative = Some("Go with the bigger pack.".to_string());
        run_rank(cmd).unwrap();

        let json = read_json(&dir);
        assert_eq!(json["sentimentApplied"], true);
        assert_eq!(json["summary"], "Go with the bigger pack.");
        assert_eq!(json["summarySource"], "narrative");
    }

    #[test]
    fn test_run_rank_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::builder().limit(Some(0)).build();
        let err = run_rank(command(&dir, config)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RankerError>(),
            Some(RankerError::Config(_))
        ));
        assert!(err.to_string().contains("ranking.limit"));
    }

    #[test]
    fn test_run_rank_missing_batch() {
        let dir = TempDir::new().unwrap();
        let mut cmd = command(&dir, json_config(&dir));
        cmd.batch_path = dir.path().join("missing.json");
        let err = run_rank(cmd).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_resolve_rank_config_precedence() {
        let file = AppConfig::builder().currency_symbol("€").build();
        let overrides = AppConfig::builder().limit(Some(1)).build();
        let config = resolve_rank_config(file, Some("compact"), &overrides).unwrap();

        assert_eq!(config.output.format, ReportFormat::Summary);
        assert_eq!(config.ranking.currency_symbol, "€");
        assert_eq!(config.ranking.limit, Some(1));
    }

    #[test]
    fn test_resolve_rank_config_unknown_preset() {
        let err = resolve_rank_config(AppConfig::default(), Some("fancy"), &AppConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("compact"));
    }

    #[test]
    fn test_render_outcome_auto_to_file_is_summary() {
        let outcome = crate::pipeline::rank(&[], None, None);
        let target = OutputTarget::File(PathBuf::from("/tmp/out.txt"));
        let text = render_outcome(&outcome, &AppConfig::default(), &target, None).unwrap();
        assert!(text.starts_with("Product Ranking"));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(std::path::Path::new("-")), "stdin");
        assert_eq!(source_name(std::path::Path::new("/a/b/batch.json")), "batch.json");
    }
}
