//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.curiosity-lab/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::question::{QuestionError, QuestionSet};
use crate::core::state::ScoringMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CurioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub question_file: Option<String>,
    pub scoring: Option<ScoringMode>,
    pub log_level: Option<String>,
}

/// Values taken from command-line flags. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub questions: Option<PathBuf>,
    pub scoring: Option<ScoringMode>,
    pub title: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Curiosity Lab";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
const CONFIG_DIR: &str = ".curiosity-lab";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    /// `None` runs the built-in questions.
    pub question_file: Option<PathBuf>,
    pub scoring: ScoringMode,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    /// Load the configured question set, validating it.
    pub fn question_set(&self) -> Result<QuestionSet, QuestionError> {
        match &self.question_file {
            Some(path) => QuestionSet::load(path),
            None => {
                info!("Using built-in questions");
                Ok(QuestionSet::builtin())
            }
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.curiosity-lab/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.curiosity-lab/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CurioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CurioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CurioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CurioConfig::default());
    }

    read_config(&path)
}

/// Read and parse an existing config file.
pub fn read_config(path: &Path) -> Result<CurioConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: CurioConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Curiosity Lab Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Curiosity Lab"
# question_file = "questions.toml"   # Relative paths resolve against ~/.curiosity-lab/
# scoring = "cumulative"             # "cumulative" or "per_question"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CurioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &CurioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| env("CURIO_TITLE"))
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Question file: CLI → env → config (relative to config dir) → built-in
    let question_file = cli
        .questions
        .clone()
        .or_else(|| env("CURIO_QUESTIONS").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .question_file
                .as_deref()
                .map(resolve_config_relative)
        });

    // Scoring: CLI → env → config → default
    let scoring = cli
        .scoring
        .or_else(|| env("CURIO_SCORING").and_then(|s| parse_scoring(&s)))
        .or(config.general.scoring)
        .unwrap_or_default();

    let log_level = env("CURIO_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_log_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        title,
        question_file,
        scoring,
        log_level,
    }
}

/// Relative question-file paths in the config file live next to it.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn parse_scoring(value: &str) -> Option<ScoringMode> {
    match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "cumulative" => Some(ScoringMode::Cumulative),
        "per_question" => Some(ScoringMode::PerQuestion),
        other => {
            warn!("Unknown scoring mode '{}', ignoring", other);
            None
        }
    }
}

fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', ignoring", value);
            None
        }
    }
}
