//! Canvas 2D drawing of a game snapshot

use std::f64::consts::TAU;

use game_core::{Aabb, Snapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

pub const BIRD_IMAGE: &str = "assets/images/bird.png";
pub const PILLAR_IMAGE: &str = "assets/images/pillar.png";

/// Bird sprite edge length; larger than the hitbox on purpose
const BIRD_SPRITE_SIZE: f64 = 50.0;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    bird_img: HtmlImageElement,
    pillar_img: HtmlImageElement,
    width: f64,
    height: f64,
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

/// Loaded and decodable
fn ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            bird_img: load_image(BIRD_IMAGE)?,
            pillar_img: load_image(PILLAR_IMAGE)?,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, snap: &Snapshot) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for pillar in &snap.pillars {
            self.draw_pillar_part(&pillar.top)?;
            self.draw_pillar_part(&pillar.bottom)?;
        }

        self.draw_bird(snap)?;

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font("24px Arial");
        self.ctx.fill_text(&format!("Score: {}", snap.score), 10.0, 30.0)?;
        Ok(())
    }

    fn draw_pillar_part(&self, rect: &Aabb) -> Result<(), JsValue> {
        let size = rect.size();
        let (x, y, w, h) = (
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
        if ready(&self.pillar_img) {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&self.pillar_img, x, y, w, h)?;
        } else {
            self.ctx.set_fill_style_str("green");
            self.ctx.fill_rect(x, y, w, h);
        }
        Ok(())
    }

    fn draw_bird(&self, snap: &Snapshot) -> Result<(), JsValue> {
        let (x, y) = (snap.bird.x as f64, snap.bird.y as f64);
        if ready(&self.bird_img) {
            let half = BIRD_SPRITE_SIZE / 2.0;
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.bird_img,
                x - half,
                y - half,
                BIRD_SPRITE_SIZE,
                BIRD_SPRITE_SIZE,
            )?;
        } else {
            // No sprite yet: draw the hitbox-sized circle
            self.ctx.set_fill_style_str("yellow");
            self.ctx.begin_path();
            self.ctx.arc(x, y, snap.bird_radius as f64, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }
}
