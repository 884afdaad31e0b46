//! Settings loaded once at startup. Serialized to json with serde.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::scene::SceneId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// simulation ticks per second
    pub fps: u32,
    /// horizontal tolerance in pixels when dragging a slider
    pub slider_pad: i32,
    pub wave: WaveConfig,
    pub doppler: DopplerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fps: 60,
            slider_pad: 10,
            wave: WaveConfig::default(),
            doppler: DopplerConfig::default(),
        }
    }
}

/// Initial values of the wave parameters shared by the basic and interference scenes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    pub amplitude: f64,
    pub wavelength: f64,
    pub period: f64,
    pub phase: f64,
    pub time_step: f64,
    pub source_separation: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            wavelength: 30.0,
            period: 5.0,
            phase: 0.0,
            time_step: 0.1,
            source_separation: 120.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DopplerConfig {
    /// number of wavefronts tracked at once
    pub wavefront_capacity: usize,
    /// number of frequency samples kept for the plot
    pub history_capacity: usize,
    pub emission_interval: i64,
    pub wave_speed: i64,
    pub source_velocity: f64,
    /// width the emitter wraps around at, the window width when unset
    pub track_width: Option<f64>,
    pub source_y: f64,
    pub listener_x: f64,
    pub listener_y: f64,
}

impl Default for DopplerConfig {
    fn default() -> Self {
        Self {
            wavefront_capacity: 16,
            history_capacity: 64,
            emission_interval: 45,
            wave_speed: 3,
            source_velocity: 2.0,
            track_width: None,
            source_y: 300.0,
            listener_x: 400.0,
            listener_y: 180.0,
        }
    }
}

impl Config {
    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.window_width as f32, self.window_height as f32)
    }
    pub fn from_json(src: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(src)?)
    }
    pub fn load(path: &Path) -> Result<Self, Error> {
        let src = std::fs::read_to_string(path)?;
        Self::from_json(&src)
    }
    /// An explicitly given path must load. Otherwise the file in the global
    /// config directory is used if it exists, and defaults if not.
    pub fn resolve(arg: &LaunchArg) -> Result<Self, Error> {
        if let Some(path) = &arg.config {
            log::info!("loading config from {}", path.display());
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("ignoring {}: {}", path.display(), e);
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wavesim").join("config.json"))
}
#[cfg(target_arch = "wasm32")]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

/// Values resolved from the command line (or the defaults on the web).
#[derive(Clone, Debug)]
pub struct LaunchArg {
    pub config: Option<PathBuf>,
    /// 0:off 1:trace 2:debug 3:info 4:warn 5:error
    pub log_level: u8,
    pub initial_scene: SceneId,
}

impl Default for LaunchArg {
    fn default() -> Self {
        Self {
            config: None,
            log_level: 3,
            initial_scene: SceneId::Menu,
        }
    }
}

impl LaunchArg {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Trace,
            2 => log::LevelFilter::Debug,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Warn,
            _ => log::LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = Config::from_json(r#"{"fps": 30, "doppler": {"wave_speed": 5}}"#).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.doppler.wave_speed, 5);
        assert_eq!(config.doppler.wavefront_capacity, 16);
        assert_eq!(config.window_width, 800);
    }

    #[test]
    fn roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn broken_json_is_an_error() {
        assert!(matches!(Config::from_json("{fps:"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let arg = LaunchArg {
            config: Some(PathBuf::from("/nonexistent/wavesim.json")),
            ..Default::default()
        };
        assert!(matches!(Config::resolve(&arg), Err(Error::Io(_))));
    }

    #[test]
    fn log_levels() {
        let mut arg = LaunchArg::default();
        assert_eq!(arg.level_filter(), log::LevelFilter::Info);
        arg.log_level = 1;
        assert_eq!(arg.level_filter(), log::LevelFilter::Trace);
        arg.log_level = 0;
        assert_eq!(arg.level_filter(), log::LevelFilter::Off);
    }
}
