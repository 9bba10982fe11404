//! Background music and sound cues
//!
//! Playback is fire-and-forget: a cue that fails to play (autoplay policy,
//! missing file) is logged and otherwise ignored.

use game_core::SoundCue;

/// Asset locations, relative to the page
pub struct AudioAssets {
    pub music: &'static str,
    pub jumps: &'static [&'static str],
    pub retry: &'static str,
}

pub const DEFAULT_ASSETS: AudioAssets = AudioAssets {
    music: "assets/sounds/bgm.mp3",
    jumps: &[
        "assets/sounds/bounce1.mp3",
        "assets/sounds/bounce2.mp3",
        "assets/sounds/bounce3.mp3",
    ],
    retry: "assets/sounds/retry.mp3",
};

pub const MUSIC_VOLUME: f64 = 0.2;
pub const CUE_VOLUME: f64 = 0.8;

/// What playing a jump cue does to the other sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuePlan {
    /// Stop and rewind music, the other jump cues and the retry cue
    pub silence_others: bool,
    /// Bring the music back when this cue ends, if the run is still going
    pub resume_music_after: bool,
}

impl CuePlan {
    pub fn for_cue(cue: SoundCue) -> Self {
        let exclusive = cue.is_exclusive();
        Self {
            silence_others: exclusive,
            resume_music_after: exclusive,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use bank::AudioBank;

#[cfg(target_arch = "wasm32")]
mod bank {
    use std::rc::Rc;

    use game_core::SoundCue;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, HtmlAudioElement};

    use super::{AudioAssets, CuePlan, CUE_VOLUME, MUSIC_VOLUME};

    pub struct AudioBank {
        music: HtmlAudioElement,
        jumps: Vec<HtmlAudioElement>,
        retry: HtmlAudioElement,
        on_rejected: Rc<Closure<dyn FnMut(JsValue)>>,
    }

    fn load(src: &str, volume: f64) -> Result<HtmlAudioElement, JsValue> {
        let audio = HtmlAudioElement::new_with_src(src)?;
        audio.set_volume(volume);
        Ok(audio)
    }

    /// Log rather than surface a rejected `play()`
    fn on_failure(promise: js_sys::Promise, on_rejected: &Closure<dyn FnMut(JsValue)>) {
        let _ = promise.catch(on_rejected);
    }

    fn stop(audio: &HtmlAudioElement) {
        let _ = audio.pause();
        audio.set_current_time(0.0);
    }

    impl AudioBank {
        pub fn new(assets: &AudioAssets) -> Result<Self, JsValue> {
            let music = load(assets.music, MUSIC_VOLUME)?;
            music.set_loop(true);
            let jumps = assets
                .jumps
                .iter()
                .map(|src| load(src, CUE_VOLUME))
                .collect::<Result<Vec<_>, _>>()?;
            let retry = load(assets.retry, CUE_VOLUME)?;

            let on_rejected = Rc::new(Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
                console_log!("audio: play failed: {:?}", e);
            }));

            Ok(Self {
                music,
                jumps,
                retry,
                on_rejected,
            })
        }

        pub fn cue_count(&self) -> usize {
            self.jumps.len()
        }

        fn play(&self, audio: &HtmlAudioElement) {
            match audio.play() {
                Ok(promise) => on_failure(promise, &self.on_rejected),
                Err(e) => console_log!("audio: play threw: {:?}", e),
            }
        }

        pub fn start_music(&self) {
            self.play(&self.music);
        }

        /// Play a jump cue, applying its plan to the other sounds
        ///
        /// `still_running` is asked when an exclusive cue ends, to decide whether
        /// the music should come back.
        pub fn play_jump(&self, cue: SoundCue, still_running: fn() -> bool) {
            let index = cue.index as usize;
            let Some(sound) = self.jumps.get(index) else {
                console_log!("audio: no jump cue {}", index);
                return;
            };
            let plan = CuePlan::for_cue(cue);

            if plan.silence_others {
                stop(&self.music);
                self.jumps
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .for_each(|(_, other)| stop(other));
                stop(&self.retry);
            }

            if plan.resume_music_after {
                let music = self.music.clone();
                let on_rejected = Rc::clone(&self.on_rejected);
                let resume = Closure::once_into_js(move || {
                    if still_running() {
                        if let Ok(promise) = music.play() {
                            on_failure(promise, &on_rejected);
                        }
                    }
                });
                let options = AddEventListenerOptions::new();
                options.set_once(true);
                let watched = sound.add_event_listener_with_callback_and_add_event_listener_options(
                    "ended",
                    resume.unchecked_ref(),
                    &options,
                );
                if let Err(e) = watched {
                    console_log!("audio: could not watch cue end: {:?}", e);
                }
            }

            sound.set_current_time(0.0);
            self.play(sound);
        }

        pub fn game_over(&self) {
            let _ = self.music.pause();
            stop(&self.retry);
            self.play(&self.retry);
        }
    }
}
