//! Configuration for the greeting picker
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/salut/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The built-in salutation list, used when neither config nor environment
/// supplies one.
pub const DEFAULT_SALUTATIONS: [&str; 4] = ["Hello", "Hola", "Bonjour", "Gutentag"];

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Monokai", "Dracula", "Nord", "Solarized"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// The salutation words, in display order. Fixed for the whole session
    /// once loaded - the greeting list only ever iterates it.
    pub salutations: Vec<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            use_theme_background: true,
            salutations: DEFAULT_SALUTATIONS.iter().map(|s| s.to_string()).collect(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Whether to also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "salut.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    /// Parse a rotation name from the config file. Unknown names fall back
    /// to daily rotation.
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure. Every field is optional so a partial file merges
/// over the defaults.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub salutations: Option<Vec<String>>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Logging section as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub rotation: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file
                .rotation
                .map(|r| LogRotation::from_name(&r))
                .unwrap_or(defaults.file_rotation),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Path to the config file (~/.config/salut/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("salut").join("config.toml"))
    }

    /// Write the default config template on first run so users can discover
    /// the available options. Failures are non-fatal.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Config::default().to_toml());
    }

    /// Load effective configuration: env > file > defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file(Self::load_file().unwrap_or_default());
        config.apply_env();
        config
    }

    fn load_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            theme: file.theme.unwrap_or(defaults.theme),
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            salutations: file.salutations.unwrap_or(defaults.salutations),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Apply SALUT_* environment overrides on top of file values
    fn apply_env(&mut self) {
        if let Ok(theme) = std::env::var("SALUT_THEME") {
            self.theme = theme;
        }
        if let Ok(words) = std::env::var("SALUT_SALUTATIONS") {
            // Comma-separated list, blanks dropped
            self.salutations = words
                .split(',')
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect();
        }
        if let Ok(level) = std::env::var("SALUT_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Render the current configuration as a commented TOML template.
    /// Single source of truth for the generated config file.
    pub fn to_toml(&self) -> String {
        let salutations = self
            .salutations
            .iter()
            .map(|w| format!("{:?}", w))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "# salut configuration\n\
             # Values here are overridden by SALUT_* environment variables.\n\
             \n\
             # Theme: \"Dark\", \"Light\", \"Monokai\", \"Dracula\", \"Nord\", \"Solarized\"\n\
             theme = {theme:?}\n\
             \n\
             # Paint the theme background (false keeps the terminal's own background)\n\
             use_theme_background = {background}\n\
             \n\
             # The salutation words, in display order. Fixed for the session.\n\
             salutations = [{salutations}]\n\
             \n\
             [logging]\n\
             # Default level when RUST_LOG is not set\n\
             level = {level:?}\n\
             # Also write JSON logs to rotating files\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n\
             file_prefix = {file_prefix:?}\n\
             # Rotation: \"hourly\", \"daily\", \"never\"\n\
             rotation = {rotation:?}\n",
            theme = self.theme,
            background = self.use_theme_background,
            salutations = salutations,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back through the file layer.
    /// Catches TOML syntax errors in to_toml().
    #[test]
    fn default_config_roundtrips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        assert_eq!(file.theme.as_deref(), Some("Dark"));
        assert_eq!(
            file.salutations.unwrap(),
            vec!["Hello", "Hola", "Bonjour", "Gutentag"]
        );
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let file: FileConfig =
            toml::from_str("theme = \"Nord\"\n[logging]\nlevel = \"debug\"\n").unwrap();
        let config = Config::from_file(file);

        assert_eq!(config.theme, "Nord");
        assert_eq!(config.logging.level, "debug");
        // Untouched fields keep their defaults
        assert!(config.use_theme_background);
        assert_eq!(config.salutations.len(), DEFAULT_SALUTATIONS.len());
        assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    }

    #[test]
    fn rotation_names_parse() {
        assert_eq!(LogRotation::from_name("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::from_name("Never"), LogRotation::Never);
        // Unknown names fall back to daily
        assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
    }

    #[test]
    fn empty_salutation_list_is_allowed() {
        let file: FileConfig = toml::from_str("salutations = []\n").unwrap();
        let config = Config::from_file(file);
        assert!(config.salutations.is_empty());
    }
}
