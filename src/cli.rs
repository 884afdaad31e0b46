use std::path::PathBuf;

use crate::config::LaunchArg;
use crate::scene::SceneId;
pub use clap::Parser;

/// wavesim - interactive simulator of mechanical waves
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of a JSON config file (default: ${CONFIG_DIR}/wavesim/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// log infomation level (0:none 1:trace 2:debug 3:info 4:warn 5:error)
    #[arg(short, long, default_value_t = 3)]
    log_level: u8,
    /// Scene shown at startup
    #[arg(short, long, value_enum, default_value_t = StartScene::Menu)]
    scene: StartScene,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartScene {
    Menu,
    Basic,
    Interference,
    Doppler,
}

impl From<StartScene> for SceneId {
    fn from(val: StartScene) -> Self {
        match val {
            StartScene::Menu => SceneId::Menu,
            StartScene::Basic => SceneId::BasicWave,
            StartScene::Interference => SceneId::Interference,
            StartScene::Doppler => SceneId::Doppler,
        }
    }
}

impl From<Args> for LaunchArg {
    fn from(val: Args) -> Self {
        LaunchArg {
            config: val.config,
            log_level: val.log_level,
            initial_scene: val.scene.into(),
        }
    }
}
