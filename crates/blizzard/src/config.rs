use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Regular decorated window.
    #[default]
    #[strum(to_string = "window", serialize = "w")]
    Window,
    /// Centered layer-shell surface above other windows.
    #[strum(to_string = "overlay", serialize = "o")]
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    /// Device pixels per dp.
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_width() -> i32 {
    240
}

fn default_height() -> i32 {
    240
}

fn default_density() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            width: default_width(),
            height: default_height(),
            density: default_density(),
        }
    }
}

impl Config {
    /// Whether switching to `other` needs a new window. Mode and size are
    /// only applied when the window is created.
    pub fn requires_restart(&self, other: &Config) -> bool {
        self.mode != other.mode || self.width != other.width || self.height != other.height
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("work", "nich", "blizzard").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("BLIZZARD").try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_deserialization() {
        let cases = vec![
            ("\"window\"", Mode::Window),
            ("\"Window\"", Mode::Window),
            ("\"w\"", Mode::Window),
            ("\"overlay\"", Mode::Overlay),
            ("\"OVERLAY\"", Mode::Overlay),
            ("\"o\"", Mode::Overlay),
        ];

        for (json, expected) in cases {
            let deserialized: Mode = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_default_config_file_parses() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "mode = \"overlay\"\ndensity = 2.0",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(parsed.mode, Mode::Overlay);
        assert_eq!(parsed.density, 2.0);
        assert_eq!(parsed.width, 240);
    }

    #[test]
    fn test_requires_restart() {
        let current = Config::default();

        let denser = Config {
            density: 2.0,
            ..Config::default()
        };
        assert!(!current.requires_restart(&denser));

        let overlay = Config {
            mode: Mode::Overlay,
            ..Config::default()
        };
        assert!(current.requires_restart(&overlay));

        let wider = Config {
            width: 480,
            ..Config::default()
        };
        assert!(current.requires_restart(&wider));
    }
}
