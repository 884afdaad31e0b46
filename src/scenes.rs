//! Layout of every scene of the simulator.
use std::rc::Rc;

use crate::callback::Callback;
use crate::config::Config;
use crate::context::Context;
use crate::doppler::DopplerSim;
use crate::error::Error;
use crate::geom::Rect;
use crate::parameter::{Binding, SimulationParameters};
use crate::scene::{Scene, SceneId, SceneRegistry};
use crate::wave::{BasicWave, Interference, MenuArt};

pub fn build(params: &SimulationParameters, config: &Config) -> Result<SceneRegistry, Error> {
    SceneRegistry::build(|id| match id {
        SceneId::Menu => menu(config),
        SceneId::BasicWave => basic_wave(params),
        SceneId::Interference => interference(params, config),
        SceneId::Doppler => doppler(params, config),
    })
}

fn menu(config: &Config) -> Result<Scene, Error> {
    let x = config.window_width as i32 / 2 - 100;
    Scene::builder(SceneId::Menu)
        .routine(MenuArt::new(config.window_width as f64))
        .button(
            "start",
            Rect::from_origin_size(x, 200, 200, 50)?,
            Callback::SwitchScene(SceneId::BasicWave),
        )
        .button(
            "interference",
            Rect::from_origin_size(x, 280, 200, 50)?,
            Callback::SwitchScene(SceneId::Interference),
        )
        .button(
            "doppler",
            Rect::from_origin_size(x, 360, 200, 50)?,
            Callback::SwitchScene(SceneId::Doppler),
        )
        .build()
}

fn basic_wave(params: &SimulationParameters) -> Result<Scene, Error> {
    let column = |i: i32| Rect::from_origin_size(560, 30 + 60 * i, 200, 30);
    Scene::builder(SceneId::BasicWave)
        .routine(BasicWave::new(300.0))
        .slider(column(0)?, Binding::from(&params.amplitude))?
        .slider(column(1)?, Binding::from(&params.wavelength))?
        .slider(column(2)?, Binding::from(&params.period))?
        .slider(column(3)?, Binding::from(&params.phase))?
        .slider(column(4)?, Binding::from(&params.time_step))?
        .button(
            "menu",
            Rect::new(560, 530, 650, 570)?,
            Callback::SwitchScene(SceneId::Menu),
        )
        .button(
            "next",
            Rect::new(670, 530, 760, 570)?,
            Callback::SwitchScene(SceneId::Interference),
        )
        .build()
}

fn interference(params: &SimulationParameters, config: &Config) -> Result<Scene, Error> {
    let row = |i: i32| Rect::from_origin_size(20 + 150 * i, 510, 120, 30);
    let right = config.window_width as i32 - 10;
    Scene::builder(SceneId::Interference)
        .routine(Interference::new(config.window_width as f64))
        .slider(row(0)?, Binding::from(&params.amplitude))?
        .slider(row(1)?, Binding::from(&params.wavelength))?
        .slider(row(2)?, Binding::from(&params.period))?
        .slider(row(3)?, Binding::from(&params.phase))?
        .slider(row(4)?, Binding::from(&params.source_separation))?
        .button(
            "menu",
            Rect::new(right - 190, 20, right - 100, 60)?,
            Callback::SwitchScene(SceneId::Menu),
        )
        .button(
            "next",
            Rect::new(right - 90, 20, right, 60)?,
            Callback::SwitchScene(SceneId::Doppler),
        )
        .build()
}

fn doppler(params: &SimulationParameters, config: &Config) -> Result<Scene, Error> {
    let column = |i: i32| Rect::from_origin_size(20, 30 + 60 * i, 200, 30);
    Scene::builder(SceneId::Doppler)
        .routine(DopplerSim::new(&config.doppler, config.canvas_size())?)
        .slider(column(0)?, Binding::from(&params.source_velocity))?
        .slider(column(1)?, Binding::from(&params.wave_speed))?
        .slider(column(2)?, Binding::from(&params.emission_interval))?
        .button(
            "menu",
            Rect::new(20, 540, 110, 580)?,
            Callback::SwitchScene(SceneId::Menu),
        )
        .button(
            "reset",
            Rect::new(130, 540, 220, 580)?,
            Callback::Custom(Rc::new(|ctx: &mut Context| {
                ctx.reset_scene(SceneId::Doppler)
            })),
        )
        .build()
}
