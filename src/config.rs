//! Key/value configuration store.
//!
//! String-keyed settings with typed accessors and defaults, persisted as
//! plain `key=value` text. Comment (`#`) and blank lines are skipped on
//! load; malformed lines (no `=`) are ignored. Engines never read this —
//! the orchestration layer resolves values and passes them in.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Plain-text configuration settings.
///
/// # Example
///
/// ```
/// use roadplan::config::Config;
///
/// let mut config = Config::new();
/// config.set("algorithm.max_iterations", "1000");
/// assert_eq!(config.get_i64("algorithm.max_iterations", 10), 1000);
/// assert_eq!(config.get_i64("missing.key", 10), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    settings: BTreeMap<String, String>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration seeded with the default settings.
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.set("algorithm.max_iterations", "1000");
        config.set("algorithm.timeout_ms", "5000");
        config.set("logging.level", "INFO");
        config.set("logging.console", "true");
        config.set("performance.benchmark_iterations", "100");
        config
    }

    /// Parses settings from `key=value` text.
    pub fn from_str_content(content: &str) -> Self {
        let mut config = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    config.set(key, value.trim());
                }
            }
        }
        config
    }

    /// Loads settings from a `key=value` file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_str_content(&content))
    }

    /// Saves settings to a `key=value` file, one entry per line.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = String::new();
        for (key, value) in &self.settings {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        fs::write(path, out)
    }

    /// Sets a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Gets a value, or the default when the key is absent.
    pub fn get<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.settings.get(key).map_or(default, String::as_str)
    }

    /// Gets an integer value, or the default when absent or unparsable.
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.settings
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Gets a float value, or the default when absent or unparsable.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.settings
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Gets a boolean value, or the default when absent.
    ///
    /// `true`, `1`, `yes`, and `on` (case-insensitive) read as true.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.settings.get(key) {
            Some(v) => matches!(
                v.to_ascii_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            ),
            None => default,
        }
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.settings.remove(key)
    }

    /// Removes all settings.
    pub fn clear(&mut self) {
        self.settings.clear();
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether there are no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let mut config = Config::new();
        config.set("iterations", "250");
        config.set("ratio", "0.75");
        config.set("enabled", "Yes");
        config.set("garbage", "not-a-number");

        assert_eq!(config.get("iterations", "0"), "250");
        assert_eq!(config.get_i64("iterations", 0), 250);
        assert!((config.get_f64("ratio", 0.0) - 0.75).abs() < 1e-10);
        assert!(config.get_bool("enabled", false));
        assert_eq!(config.get_i64("garbage", 42), 42);
        assert_eq!(config.get_i64("missing", 7), 7);
        assert!(!config.get_bool("garbage", true));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let config = Config::from_str_content(
            "# road planner settings\n\
             \n\
             algorithm.max_iterations = 500\n\
             broken line without equals\n\
             logging.level=DEBUG\n",
        );
        assert_eq!(config.len(), 2);
        assert_eq!(config.get_i64("algorithm.max_iterations", 0), 500);
        assert_eq!(config.get("logging.level", ""), "DEBUG");
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut config = Config::new();
        config.set("paths.data_dir", "./data");
        config.set("algorithm.threads", "4");

        let path = std::env::temp_dir().join("roadplan_config_test.cfg");
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.get("paths.data_dir", ""), "./data");
        assert_eq!(loaded.get_i64("algorithm.threads", 0), 4);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_defaults_and_removal() {
        let mut config = Config::with_defaults();
        assert!(config.contains_key("algorithm.max_iterations"));
        assert!(config.get_bool("logging.console", false));

        assert_eq!(config.remove("logging.level").as_deref(), Some("INFO"));
        assert!(!config.contains_key("logging.level"));

        config.clear();
        assert!(config.is_empty());
    }
}
