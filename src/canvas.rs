use crate::core::particles::{rgba, theme_opacity, trail_fill, ParticleField};
use crate::core::Theme;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D particle backdrop with pointer repulsion and proximity links.
pub struct CanvasParticleField {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    field: ParticleField,
    theme: Theme,
}

impl CanvasParticleField {
    pub fn new(canvas: web::HtmlCanvasElement, theme: Theme) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let (w, h) = crate::dom::fit_canvas_to_container(&canvas);
        let field = ParticleField::new(w as f32, h as f32, &mut rand::thread_rng());
        log::info!(
            "[particles] {}x{} count={}",
            w,
            h,
            field.particles.len()
        );
        Ok(Self {
            ctx,
            canvas,
            field,
            theme,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Pointer position in canvas pixels; `None` disables repulsion.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.field.set_pointer(pointer);
    }

    /// Refit the canvas and scatter a fresh particle set over the new area.
    pub fn resize(&mut self) {
        let (w, h) = crate::dom::fit_canvas_to_container(&self.canvas);
        self.field
            .regenerate(w as f32, h as f32, &mut rand::thread_rng());
    }

    pub fn frame(&mut self) {
        let dark = self.theme.is_dark();
        let (w, h) = (self.field.width as f64, self.field.height as f64);
        self.ctx.set_fill_style_str(trail_fill(dark));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.field.step();

        let accent = self.theme.accent_rgb();
        let alpha_scale = theme_opacity(dark);
        for p in &self.field.particles {
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx
                .set_fill_style_str(&rgba(accent, p.opacity * alpha_scale));
            self.ctx.fill();
        }

        self.ctx.set_line_width(1.0);
        for link in self.field.links() {
            let a = self.field.particles[link.a].pos;
            let b = self.field.particles[link.b].pos;
            self.ctx.set_stroke_style_str(&rgba(accent, link.opacity));
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.stroke();
        }
    }
}
