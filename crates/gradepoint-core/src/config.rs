//! gradepoint configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`GradepointConfig::batch_file`].
pub const BATCH_FILE_ENV: &str = "GRADEPOINT_BATCH_FILE";

/// Output format for the transcript command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Top-level gradepoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradepointConfig {
    /// CSV read by `gradepoint report` when no file is given.
    #[serde(default = "default_batch_file")]
    pub batch_file: PathBuf,
    /// Directory for HTML transcripts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Transcript format when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_batch_file() -> PathBuf {
    PathBuf::from("courses.csv")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./gradepoint-results")
}

impl Default for GradepointConfig {
    fn default() -> Self {
        Self {
            batch_file: default_batch_file(),
            output_dir: default_output_dir(),
            default_format: OutputFormat::default(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `gradepoint.toml` in the current directory
/// 2. `~/.config/gradepoint/config.toml`
///
/// Environment variable override: `GRADEPOINT_BATCH_FILE`.
pub fn load_config() -> Result<GradepointConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradepointConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradepoint.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => GradepointConfig::default(),
    };

    if let Ok(batch_file) = std::env::var(BATCH_FILE_ENV) {
        if batch_file.trim().is_empty() {
            tracing::warn!("{BATCH_FILE_ENV} is set but empty, ignoring");
        } else {
            config.batch_file = PathBuf::from(batch_file);
        }
    }

    Ok(config)
}

/// Parse configuration TOML.
pub fn parse_config_str(content: &str) -> Result<GradepointConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradepoint"))
}
