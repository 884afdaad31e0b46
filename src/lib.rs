//! wavesim is an interactive simulator of mechanical waves. A small
//! scene/widget engine drives four scenes: a menu, a single travelling
//! wave, two-source interference and a Doppler effect simulation.
//!

extern crate eframe;
extern crate egui;
extern crate serde_json;

pub mod app;
pub mod callback;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod config;
pub mod context;
pub mod doppler;
pub mod error;
pub mod geom;
pub mod gui;
pub mod interaction;
pub mod parameter;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod utils;
pub mod wave;
pub mod widget;

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

#[cfg(target_arch = "wasm32")]
extern crate wee_alloc;

// Use `wee_alloc` as the global allocator.
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct WebHandle {
    runner: eframe::WebRunner,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WebHandle {
    #[allow(clippy::new_without_default)]
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            runner: eframe::WebRunner::new(),
        }
    }

    /// Call this once from the HTML.
    #[wasm_bindgen]
    pub async fn start(&self, canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
        console_error_panic_hook::set_once();
        let arg = config::LaunchArg::default();
        utils::logger::init(arg.level_filter());
        let config = config::Config::default();
        let sim = context::Context::with_launch_arg(&config, &arg)
            .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
        self.runner
            .start(
                canvas_id,
                eframe::WebOptions::default(),
                Box::new(move |cc| Box::new(app::Model::new(cc, &config, sim))),
            )
            .await
    }

    #[wasm_bindgen]
    pub fn destroy(&self) {
        self.runner.destroy();
    }
}
