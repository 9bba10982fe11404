//! Shrink the canvas to fit small screens

/// CSS scale for a `base_w` x `base_h` canvas in a `max_w` x `max_h` window
///
/// Keeps the aspect ratio and never scales up.
pub fn fit_scale(max_w: f64, max_h: f64, base_w: f64, base_h: f64) -> f64 {
    let scale_x = max_w / base_w;
    let scale_y = max_h / base_h;
    scale_x.min(scale_y).min(1.0)
}

#[cfg(target_arch = "wasm32")]
pub use browser::{fit_canvas, install};

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, Window};

    use super::fit_scale;

    /// Delay before re-fitting after an orientation change, so the window has its new size
    const ORIENTATION_SETTLE_MS: i32 = 100;

    pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let max_w = window.inner_width()?.as_f64().unwrap_or(canvas.width() as f64);
        let max_h = window.inner_height()?.as_f64().unwrap_or(canvas.height() as f64);
        let base_w = canvas.width() as f64;
        let base_h = canvas.height() as f64;
        let scale = fit_scale(max_w, max_h, base_w, base_h);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", base_w * scale))?;
        style.set_property("height", &format!("{}px", base_h * scale))?;
        Ok(())
    }

    /// Fit now, and again whenever the window is resized or rotated
    pub fn install(window: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        fit_canvas(window, canvas)?;

        let refit = {
            let window = window.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = fit_canvas(&window, &canvas) {
                    console_log!("viewport: resize failed: {:?}", e);
                }
            })
        };
        window.add_event_listener_with_callback("resize", refit.as_ref().unchecked_ref())?;

        let on_rotate = {
            let window = window.clone();
            let refit_fn = refit.as_ref().clone();
            Closure::<dyn FnMut()>::new(move || {
                let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    refit_fn.unchecked_ref(),
                    ORIENTATION_SETTLE_MS,
                );
                if let Err(e) = scheduled {
                    console_log!("viewport: could not schedule refit: {:?}", e);
                }
            })
        };
        window.add_event_listener_with_callback(
            "orientationchange",
            on_rotate.as_ref().unchecked_ref(),
        )?;

        refit.forget();
        on_rotate.forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_window_keeps_native_size() {
        assert_eq!(fit_scale(1920.0, 1080.0, 360.0, 640.0), 1.0);
    }

    #[test]
    fn test_short_window_scales_by_height() {
        assert_eq!(fit_scale(1920.0, 320.0, 360.0, 640.0), 0.5);
    }

    #[test]
    fn test_narrow_window_scales_by_width() {
        assert_eq!(fit_scale(180.0, 1000.0, 360.0, 640.0), 0.5);
    }
}
