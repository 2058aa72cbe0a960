use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "scatter3d.json";

pub const ENV_RENDERER: &str = "SCATTER3D_RENDERER";
pub const ENV_DATA: &str = "SCATTER3D_DATA";
pub const ENV_EXPECTED_ROWS: &str = "SCATTER3D_EXPECTED_ROWS";

/// Where the renderer lives, where its output goes, and how strictly the
/// output is checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub renderer: PathBuf,
    pub data_file: PathBuf,
    /// When set, the data file must contain exactly this many rows.
    pub expected_rows: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            renderer: Path::new("..")
                .join("bin")
                .join(format!("sphere_plot{}", env::consts::EXE_SUFFIX)),
            data_file: PathBuf::from("data.txt"),
            expected_rows: None,
        }
    }
}

impl Config {
    /// Defaults, then `scatter3d.json` if present, then environment variables.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file_or_default(Path::new(CONFIG_FILE))?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay values from `lookup` (the process environment in production).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = lookup(ENV_RENDERER) {
            self.renderer = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_DATA) {
            self.data_file = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_EXPECTED_ROWS) {
            let v = v.trim();
            self.expected_rows = if v.is_empty() {
                None
            } else {
                Some(
                    v.parse()
                        .with_context(|| format!("{ENV_EXPECTED_ROWS}={v} is not a row count"))?,
                )
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_point_at_sibling_bin_dir() {
        let config = Config::default();
        assert!(config.renderer.starts_with(".."));
        assert!(config
            .renderer
            .to_string_lossy()
            .contains("sphere_plot"));
        assert_eq!(config.data_file, PathBuf::from("data.txt"));
        assert_eq!(config.expected_rows, None);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "data_file": "out/points.txt", "expected_rows": 200 }"#).unwrap();

        let config = Config::from_file_or_default(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("out/points.txt"));
        assert_eq!(config.expected_rows, Some(200));
        assert_eq!(config.renderer, Config::default().renderer);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::from_file_or_default(&path).is_err());
    }

    #[test]
    fn environment_overrides_win() {
        let env: HashMap<&str, &str> = [
            (ENV_RENDERER, "/opt/render"),
            (ENV_DATA, "/tmp/d.txt"),
            (ENV_EXPECTED_ROWS, "12"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.renderer, PathBuf::from("/opt/render"));
        assert_eq!(config.data_file, PathBuf::from("/tmp/d.txt"));
        assert_eq!(config.expected_rows, Some(12));
    }

    #[test]
    fn bad_row_count_override_is_rejected() {
        let mut config = Config::default();
        let result = config.apply_overrides(|k| (k == ENV_EXPECTED_ROWS).then(|| "lots".to_string()));
        assert!(result.is_err());
    }
}
