//! Browser app: owns the session and its adapters, and runs the frame loop

use std::cell::RefCell;

use game_core::{Config, FsmState, GameAction, GameEvent, GameRng, GameSession, Snapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::audio::{AudioBank, DEFAULT_ASSETS};
use crate::renderer::Renderer;
use crate::screens::{Screens, CANVAS_ID};
use crate::{input, viewport};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

pub struct App {
    session: GameSession,
    renderer: Renderer,
    audio: AudioBank,
    screens: Screens,
    last_frame_ms: Option<f64>,
}

impl App {
    fn new(config_json: Option<String>, seed: Option<u64>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let mut config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::new(),
        };

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("Missing game canvas"))?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_width(config.viewport_width as u32);
        canvas.set_height(config.viewport_height as u32);

        let audio = AudioBank::new(&DEFAULT_ASSETS)?;
        // Only pick cues we have sounds for
        config.jump_cue_count = audio.cue_count().min(u8::MAX as usize) as u8;

        let renderer = Renderer::new(&canvas)?;
        let screens = Screens::new(&document)?;

        viewport::install(&window, &canvas)?;
        input::install(&document, on_jump_input)?;

        let rng = seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
        console_log!("app: initialised (seed {:?})", seed);

        Ok(Self {
            session: GameSession::new(config, rng),
            renderer,
            audio,
            screens,
            last_frame_ms: None,
        })
    }

    /// Start or restart a run. Returns false if the session was in the wrong state.
    fn begin(&mut self, action: GameAction) -> Result<bool, JsValue> {
        let result = match action {
            GameAction::Restart => self.session.restart(),
            _ => self.session.start(),
        };
        if !result.success {
            console_log!("app: ignored {:?} while {:?}", result.action, result.from_state);
            return Ok(false);
        }
        self.last_frame_ms = None;
        self.dispatch_events()?;
        Ok(true)
    }

    fn jump(&mut self) -> Result<(), JsValue> {
        if self.session.on_jump() {
            self.dispatch_events()?;
        }
        Ok(())
    }

    /// One display frame. Returns whether another frame should be requested.
    fn frame(&mut self, timestamp: f64) -> Result<bool, JsValue> {
        let dt = self
            .last_frame_ms
            .map_or(0.0, |prev| (timestamp - prev).max(0.0));
        self.last_frame_ms = Some(timestamp);

        self.session.tick(dt as f32);
        self.dispatch_events()?;

        let running = self.session.state() == FsmState::Running;
        if running {
            self.renderer.draw(&self.session.snapshot())?;
        }
        Ok(running)
    }

    fn dispatch_events(&mut self) -> Result<(), JsValue> {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Started => {
                    self.screens.show_game()?;
                    self.audio.start_music();
                    console_log!("app: run started");
                }
                GameEvent::JumpAccepted { cue } => self.audio.play_jump(cue, is_running),
                GameEvent::Scored { .. } => {}
                GameEvent::Ended {
                    score,
                    cause,
                    message,
                } => {
                    self.audio.game_over();
                    self.screens.show_retry(&message)?;
                    console_log!("app: run ended ({:?}) with score {}", cause, score);
                }
            }
        }
        Ok(())
    }
}

/// Run `f` against the app, failing if `init` hasn't been called
fn with_app<R>(f: impl FnOnce(&mut App) -> Result<R, JsValue>) -> Result<R, JsValue> {
    APP.with(|slot| {
        let mut slot = slot
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("App is busy"))?;
        let app = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Game not initialized"))?;
        f(app)
    })
}

fn is_running() -> bool {
    APP.with(|slot| {
        slot.try_borrow()
            .ok()
            .and_then(|app| app.as_ref().map(|a| a.session.state() == FsmState::Running))
            .unwrap_or(false)
    })
}

fn on_jump_input() {
    if let Err(e) = with_app(App::jump) {
        console_log!("app: jump failed: {:?}", e);
    }
}

fn on_frame(timestamp: f64) {
    match with_app(|app| app.frame(timestamp)) {
        Ok(true) => {
            if let Err(e) = request_frame() {
                console_log!("app: could not schedule frame: {:?}", e);
            }
        }
        Ok(false) => {}
        Err(e) => console_log!("app: frame failed: {:?}", e),
    }
}

/// Ask the browser for the next paint callback
fn request_frame() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    FRAME.with(|slot| {
        let mut slot = slot.borrow_mut();
        let callback = slot.get_or_insert_with(|| Closure::<dyn FnMut(f64)>::new(on_frame));
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(())
    })
}

pub fn init(config_json: Option<String>, seed: Option<u64>) -> Result<(), JsValue> {
    if APP.with(|slot| slot.borrow().is_some()) {
        return Err(JsValue::from_str("Game already initialized"));
    }
    let app = App::new(config_json, seed)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Start (from the menu) or restart (from the retry screen), then kick off the frame loop
pub fn begin(action: GameAction) -> Result<(), JsValue> {
    if with_app(|app| app.begin(action))? {
        request_frame()?;
    }
    Ok(())
}

pub fn jump() -> Result<(), JsValue> {
    with_app(App::jump)
}

pub fn snapshot() -> Result<Snapshot, JsValue> {
    with_app(|app| Ok(app.session.snapshot()))
}
