//! WebGPU client for the platformer
//!
//! Engine-free rendering using wgpu for the WebGPU API. Input mapping,
//! camera math, canvas layout and scene building are plain Rust and build on
//! every target; the DOM driver and the renderer only exist on wasm32.

pub mod camera;
pub mod input;
pub mod layout;
pub mod mesh;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use crate::app::{self, App};
    use crate::input::{handle_touch, TouchControl};
    use crate::renderer::Renderer;
    use crate::scene::max_instances;
    use game_core::{Config, Simulation};
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Build the simulation and renderer for `canvas` and start the game loop.
    ///
    /// `level_json` replaces the built-in level when given.
    #[wasm_bindgen]
    pub fn init_game(canvas: HtmlCanvasElement, level_json: Option<String>) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            if app::is_installed() {
                return Err(JsValue::from_str("Game already initialized"));
            }

            let sim = match level_json {
                Some(json) => Simulation::from_json(&json, Config::new()),
                None => Ok(Simulation::classic()),
            }
            .map_err(|e| JsValue::from_str(&format!("Failed to load level: {}", e)))?;

            let renderer = Renderer::new(canvas.clone(), sim.level.viewport, max_instances(&sim))
                .await
                .map_err(|e| JsValue::from_str(&format!("Failed to init renderer: {}", e)))?;

            app::install(App {
                sim,
                renderer,
                canvas,
            })?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Same as clicking the start/restart button
    #[wasm_bindgen]
    pub fn press_start_button() {
        app::with_input(|input| input.press_restart());
    }

    /// Drive a touch control ("left", "right" or "jump") from JS
    #[wasm_bindgen]
    pub fn set_touch(control: &str, active: bool) -> Result<(), JsValue> {
        let control = TouchControl::from_name(control)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown touch control: {}", control)))?;
        app::with_input(|input| handle_touch(input, control, active));
        Ok(())
    }
}
