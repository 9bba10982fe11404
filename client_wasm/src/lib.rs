//! WebAssembly host for the gap runner
//!
//! Wires the deterministic `game_core` session to the page: a 2D canvas for
//! drawing, `<audio>` elements for music and cues, document input for jumps,
//! and `requestAnimationFrame` for the tick cadence.
//!
//! Pure helpers (key mapping, viewport scaling, cue plans) build on every
//! target; everything touching the DOM is only compiled for wasm32.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

pub mod audio;
pub mod input;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;
#[cfg(target_arch = "wasm32")]
mod screens;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use game_core::GameAction;
    use wasm_bindgen::prelude::*;

    use crate::app;

    /// Set up the game. `config_json` holds optional overrides; `seed` makes runs repeatable.
    #[wasm_bindgen]
    pub fn init_game(config_json: Option<String>, seed: Option<u64>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        app::init(config_json, seed)
    }

    #[wasm_bindgen]
    pub fn start_game() -> Result<(), JsValue> {
        app::begin(GameAction::Start)
    }

    #[wasm_bindgen]
    pub fn restart_game() -> Result<(), JsValue> {
        app::begin(GameAction::Restart)
    }

    /// For hosts that dispatch input themselves
    #[wasm_bindgen]
    pub fn jump() -> Result<(), JsValue> {
        app::jump()
    }

    /// Current frame as JSON, for overlays drawn outside the canvas
    #[wasm_bindgen]
    pub fn snapshot_json() -> Result<String, JsValue> {
        let snap = app::snapshot()?;
        serde_json::to_string(&snap)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize snapshot: {}", e)))
    }
}
