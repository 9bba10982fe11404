//! Click, touch and keyboard input, all collapsed into a single jump

/// Keys that count as a jump
pub fn is_jump_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "ArrowUp" | "w" | "W")
}

#[cfg(target_arch = "wasm32")]
pub use listeners::install;

#[cfg(target_arch = "wasm32")]
mod listeners {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, Document, KeyboardEvent, TouchEvent};

    use super::is_jump_key;

    /// Attach document-level listeners that call `on_jump`
    ///
    /// The listeners live as long as the page, so their closures are leaked.
    pub fn install(document: &Document, on_jump: fn()) -> Result<(), JsValue> {
        let click = Closure::<dyn FnMut()>::new(move || on_jump());
        document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();

        // Non-passive so preventDefault can stop the page from scrolling
        let touch = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            event.prevent_default();
            on_jump();
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touch.as_ref().unchecked_ref(),
            &options,
        )?;
        touch.forget();

        let key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if is_jump_key(&event.key()) && !event.repeat() {
                event.prevent_default();
                on_jump();
            }
        });
        document.add_event_listener_with_callback("keydown", key.as_ref().unchecked_ref())?;
        key.forget();

        Ok(())
    }
}
