//! Configuration management for opsboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_GENERATED, LOCAL_CONFIG_FILE, MAX_DELAY_MS, NARROW_WIDTH_DEFAULT, NARROW_WIDTH_MAX,
    NARROW_WIDTH_MIN,
};
use crate::navigation::Panel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Comments written above each key of a generated config file, by (section, key)
const FIELD_COMMENTS: &[(&str, &str, &str)] = &[
    ("ui", "default_panel", "Panel shown on startup: home, tickets, data_integration, shows, ..."),
    ("ui", "narrow_width", "Below this many columns the sidebar becomes a drawer (m to open)"),
    ("ui", "toast_seconds", "Seconds a notification stays on screen"),
    ("ui", "max_toasts", "Notifications shown at once"),
    ("sync", "timeout_seconds", "Request timeout for the sync endpoint"),
    ("timing", "bulk_action_delay", "Milliseconds before a bulk cancel/refund settles"),
    ("timing", "export_step_delay", "Milliseconds between export progress steps"),
    ("timing", "export_step", "Export progress increment, in percent"),
    ("timing", "pricing_activation_delay", "Milliseconds before dynamic pricing turns on"),
    ("timing", "sync_fallback_delay", "Milliseconds before sync falls back to built-in data"),
    ("logging", "enabled", "Write a log file"),
    ("logging", "level", "error, warn, info, debug or trace"),
];

/// Commented-out examples for optional keys that are unset by default
const OPTIONAL_KEYS: &[(&str, &str)] = &[
    ("sync", "# endpoint = \"https://venue.example/api/sync\"  # unset: built-in data only"),
    ("logging", "# file = \"/tmp/opsboard.log\"  # unset: data dir"),
];

/// Interleave comments into serialized TOML without touching the values
fn annotate_config(toml_content: &str) -> String {
    let mut out = String::with_capacity(toml_content.len() * 2);
    let mut section = "";
    for line in toml_content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            section = name;
            out.push_str(line);
            out.push('\n');
            for (_, example) in OPTIONAL_KEYS.iter().filter(|(s, _)| *s == name) {
                out.push_str(example);
                out.push('\n');
            }
            continue;
        }
        if let Some((key, _)) = trimmed.split_once('=') {
            let key = key.trim();
            if let Some((_, _, comment)) = FIELD_COMMENTS.iter().find(|(s, k, _)| *s == section && *k == key) {
                out.push_str("# ");
                out.push_str(comment);
                out.push('\n');
            }
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub sync: SyncConfig,
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Panel shown on startup, by key (e.g. "home", "tickets", "data_integration")
    pub default_panel: String,
    /// Terminal width in columns below which the sidebar becomes a drawer
    pub narrow_width: u16,
    /// Seconds a toast stays on screen
    pub toast_seconds: u64,
    /// Maximum number of toasts shown at once
    pub max_toasts: usize,
}

/// External data sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Endpoint returning a JSON array of sync items; unset means fallback data only
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Simulated latencies, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub bulk_action_delay: u64,
    pub export_step_delay: u64,
    /// Progress increment per export step, in percent
    pub export_step: u8,
    pub pricing_activation_delay: u64,
    pub sync_fallback_delay: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Override for the log file location
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_panel: Panel::Home.key().to_string(),
            narrow_width: NARROW_WIDTH_DEFAULT,
            toast_seconds: 4,
            max_toasts: 3,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 10,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            bulk_action_delay: 1500,
            export_step_delay: 200,
            export_step: 10,
            pricing_activation_delay: 2000,
            sync_fallback_delay: 1500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl TimingConfig {
    pub fn bulk_action(&self) -> Duration {
        Duration::from_millis(self.bulk_action_delay)
    }

    pub fn export_step_interval(&self) -> Duration {
        Duration::from_millis(self.export_step_delay)
    }

    pub fn pricing_activation(&self) -> Duration {
        Duration::from_millis(self.pricing_activation_delay)
    }

    pub fn sync_fallback(&self) -> Duration {
        Duration::from_millis(self.sync_fallback_delay)
    }
}

impl UiConfig {
    /// Startup panel; validation guarantees the key resolves
    pub fn initial_panel(&self) -> Panel {
        Panel::from_label(&self.default_panel).unwrap_or_default()
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path()?;
        if xdg_config.exists() {
            return Ok(Some(xdg_config));
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.narrow_width < NARROW_WIDTH_MIN || self.ui.narrow_width > NARROW_WIDTH_MAX {
            anyhow::bail!(
                "narrow_width must be between {} and {} columns, got {}",
                NARROW_WIDTH_MIN,
                NARROW_WIDTH_MAX,
                self.ui.narrow_width
            );
        }

        if Panel::from_label(&self.ui.default_panel).is_none() {
            anyhow::bail!("Unknown default_panel '{}'", self.ui.default_panel);
        }

        if self.ui.max_toasts == 0 {
            anyhow::bail!("max_toasts must be at least 1");
        }

        if self.timing.export_step == 0 || self.timing.export_step > 100 {
            anyhow::bail!("export_step must be between 1 and 100, got {}", self.timing.export_step);
        }

        let delays = [
            ("bulk_action_delay", self.timing.bulk_action_delay),
            ("export_step_delay", self.timing.export_step_delay),
            ("pricing_activation_delay", self.timing.pricing_activation_delay),
            ("sync_fallback_delay", self.timing.sync_fallback_delay),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                anyhow::bail!("{} cannot exceed {} ms, got {}", name, MAX_DELAY_MS, value);
            }
        }

        if let Some(endpoint) = &self.sync.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                anyhow::bail!("sync endpoint must be an http(s) URL, got '{}'", endpoint);
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# opsboard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate_config(&toml_content);

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
