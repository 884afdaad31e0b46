//! Process-wide simulation state: parameters, scenes, which scene is active
//! and whether the pointer is held. Each frame the frontend feeds queued
//! pointer events in, then advances and renders the active scene.

use crate::config::{Config, LaunchArg};
use crate::error::Error;
use crate::interaction::{self, PointerEvent, PointerState};
use crate::parameter::SimulationParameters;
use crate::render::Surface;
use crate::scene::{SceneId, SceneRegistry};
use crate::scenes;

pub struct Context {
    pub params: SimulationParameters,
    scenes: SceneRegistry,
    active: SceneId,
    pub(crate) pointer: PointerState,
    slider_pad: i32,
}

impl Context {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let params = SimulationParameters::from_config(config);
        let scenes = scenes::build(&params, config)?;
        Ok(Self {
            params,
            scenes,
            active: SceneId::Menu,
            pointer: PointerState::default(),
            slider_pad: config.slider_pad,
        })
    }
    pub fn with_launch_arg(config: &Config, arg: &LaunchArg) -> Result<Self, Error> {
        let mut res = Self::new(config)?;
        res.active = arg.initial_scene;
        Ok(res)
    }

    pub fn active_scene(&self) -> SceneId {
        self.active
    }
    pub fn set_active_scene(&mut self, id: SceneId) {
        self.active = id;
    }
    pub fn scenes(&self) -> &SceneRegistry {
        &self.scenes
    }
    pub fn scenes_mut(&mut self) -> &mut SceneRegistry {
        &mut self.scenes
    }
    pub fn is_pointer_held(&self) -> bool {
        self.pointer.held
    }
    pub fn slider_pad(&self) -> i32 {
        self.slider_pad
    }
    pub fn reset_scene(&mut self, id: SceneId) {
        log::info!("reset {}", id.name());
        self.scenes.get_mut(id).reset();
    }

    pub fn handle_pointer_event(&mut self, ev: PointerEvent) {
        interaction::handle_pointer_event(self, ev)
    }
    /// Advances the active scene's routine by one tick.
    pub fn step(&mut self) {
        self.scenes.get_mut(self.active).advance(&self.params);
    }
    pub fn render(&self, surface: &mut dyn Surface) {
        self.scenes.get(self.active).render(&self.params, surface);
    }
    pub fn advance_and_render_active_scene(&mut self, surface: &mut dyn Surface) {
        self.step();
        self.render(surface);
    }
}
