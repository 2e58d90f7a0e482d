use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::Mode;

/// Global configuration loaded from `~/.config/fileurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileurlConfig {
    /// Conversion used by `to-local` when neither `--strict` nor `--relaxed` is given.
    pub default_mode: Mode,
    /// Write logs to `~/.local/state/fileurl/fileurl.log`; `false` logs to stderr only.
    pub log_to_file: bool,
}

impl Default for FileurlConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Strict,
            log_to_file: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fileurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FileurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FileurlConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<FileurlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FileurlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &FileurlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = FileurlConfig::default();
        assert_eq!(cfg.default_mode, Mode::Strict);
        assert!(cfg.log_to_file);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FileurlConfig {
            default_mode: Mode::Relaxed,
            log_to_file: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FileurlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let cfg: FileurlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, FileurlConfig::default());

        let cfg: FileurlConfig = toml::from_str(r#"default_mode = "relaxed""#).unwrap();
        assert_eq!(cfg.default_mode, Mode::Relaxed);
        assert!(cfg.log_to_file);
    }

    #[test]
    fn config_toml_rejects_unknown_mode() {
        assert!(toml::from_str::<FileurlConfig>(r#"default_mode = "sloppy""#).is_err());
    }

    #[test]
    fn load_from_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "default_mode = \"relaxed\"").unwrap();
        writeln!(f, "log_to_file = false").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.default_mode, Mode::Relaxed);
        assert!(!cfg.log_to_file);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("read config"));
    }

    #[test]
    fn write_default_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path, &FileurlConfig::default()).unwrap();
        assert_eq!(load_from(&path).unwrap(), FileurlConfig::default());
    }
}
