//! Menu, game and retry screens, toggled by element id

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const MENU_ID: &str = "menu";
pub const CANVAS_ID: &str = "game";
pub const RETRY_ID: &str = "retry";
pub const MESSAGE_ID: &str = "message";

pub struct Screens {
    menu: HtmlElement,
    canvas: HtmlElement,
    retry: HtmlElement,
    message: HtmlElement,
}

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", id)))
}

fn set_visible(el: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    el.style()
        .set_property("display", if visible { "block" } else { "none" })
}

impl Screens {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            menu: element(document, MENU_ID)?,
            canvas: element(document, CANVAS_ID)?,
            retry: element(document, RETRY_ID)?,
            message: element(document, MESSAGE_ID)?,
        })
    }

    pub fn show_game(&self) -> Result<(), JsValue> {
        set_visible(&self.menu, false)?;
        set_visible(&self.retry, false)?;
        set_visible(&self.canvas, true)
    }

    pub fn show_retry(&self, message: &str) -> Result<(), JsValue> {
        set_visible(&self.canvas, false)?;
        set_visible(&self.retry, true)?;
        self.message.set_inner_text(message);
        Ok(())
    }
}
