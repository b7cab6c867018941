use std::{
    ops::Not,
    path::{Path, PathBuf},
};

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    icons::IconConfig,
    router::Route,
};

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Not for Theme {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<Theme> for egui::Visuals {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

// alarms are never written here, they only live as long as the app does
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_mount_target")]
    pub mount_target: String,
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default = "Route::default_table")]
    pub routes: Vec<Route>,
}

fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_mount_target() -> String {
    "#app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            time_format: default_time_format(),
            mount_target: default_mount_target(),
            icons: IconConfig::default(),
            routes: Route::default_table(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&config)?)
    }

    /// like [`Config::load`] but a missing file gives the default config
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config = toml::to_string(self)?;
        let write_err = |source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, config).map_err(write_err)
    }

    pub fn config_path() -> Result<PathBuf> {
        let mut path = directories::ProjectDirs::from("", "", "roosty_alarms")
            .ok_or(Error::NoConfigDir)?
            .config_dir()
            .to_path_buf();
        path.push("config.toml");
        Ok(path)
    }

    pub fn is_config_present() -> Result<bool> {
        Ok(Self::config_path()?.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconSet;

    #[test]
    fn theme_toggles() {
        assert_eq!(!Theme::Dark, Theme::Light);
        assert_eq!(!!Theme::Dark, Theme::Dark);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            theme: Theme::Light,
            mount_target: "#main".to_string(),
            ..Config::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("theme = \"Light\"").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.time_format, "%H:%M:%S");
        assert_eq!(config.icons.default_set, IconSet::Fa);
        assert_eq!(config.routes, Route::default_table());
        assert_eq!(config.mount_target, "#app");
    }

    #[test]
    fn icon_sets_are_lowercase_in_toml() {
        let config: Config = toml::from_str(
            "[icons]\ndefault_set = \"mdi\"\nsets = [\"mdi\"]\n",
        )
        .unwrap();
        assert_eq!(config.icons.default_set, IconSet::Mdi);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::ConfigParse(_))));
    }
}
