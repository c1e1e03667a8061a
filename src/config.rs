//! Configuration file loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default parameter values, used when CLI flags are absent.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Named grid presets selectable with `--preset`.
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

/// Default parameter values from config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default grid width.
    pub width: usize,
    /// Default grid height.
    pub height: usize,
    /// Default open-cell probability.
    pub threshold: f64,
    /// Default output directory.
    pub dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { width: 4505, height: 1008, threshold: 0.85, dir: "./input".to_string() }
    }
}

/// A named set of grid parameters. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preset {
    /// Grid width.
    pub width: Option<usize>,
    /// Grid height.
    pub height: Option<usize>,
    /// Open-cell probability.
    pub threshold: Option<f64>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Look up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns an error naming the available presets if `name` is unknown.
    pub fn preset(&self, name: &str) -> Result<&Preset, String> {
        self.presets.get(name).ok_or_else(|| {
            let available: Vec<&str> = self.presets.keys().map(String::as_str).collect();
            format!("Unknown preset '{name}'. Available: {available:?}")
        })
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `GRIDGEN_CONFIG` environment variable
/// 3. `~/.config/gridgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("GRIDGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/gridgen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/gridgen/config.toml")
    } else {
        PathBuf::from("gridgen.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.width, 4505);
        assert_eq!(config.defaults.height, 1008);
        assert!((config.defaults.threshold - 0.85).abs() < f64::EPSILON);
        assert_eq!(config.defaults.dir, "./input");
        assert!(config.presets.is_empty());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.defaults.width, 4505);
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("gridgen_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
width = 80
threshold = 0.5
dir = "/tmp/grids"

[presets.small]
width = 64
height = 32
threshold = 0.7

[presets.tall]
height = 500
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.width, 80);
        assert_eq!(config.defaults.height, 1008);
        assert!((config.defaults.threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.defaults.dir, "/tmp/grids");

        let small = config.preset("small").unwrap();
        assert_eq!(small.width, Some(64));
        assert_eq!(small.height, Some(32));
        let tall = config.preset("tall").unwrap();
        assert_eq!(tall.width, None);
        assert_eq!(tall.height, Some(500));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_preset_lists_available() {
        let mut config = Config::default();
        config.presets.insert("small".into(), Preset::default());
        let err = config.preset("huge").unwrap_err();
        assert!(err.contains("Unknown preset 'huge'"));
        assert!(err.contains("small"));
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("gridgen_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
