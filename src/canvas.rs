use crate::core::constants::{
    TEXT_BUFFER_HEIGHT, TEXT_BUFFER_WIDTH, TEXT_FONT, TEXT_RASTER_COLOR, TEXT_WORD,
};
use crate::core::Surface;
use crate::dom;
use glam::Vec2;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` over a canvas 2D context. Clearing covers the canvas backing
/// size at the time of the call, so resizes take effect on the next frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    pub fn by_id(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        Self::new(dom::element_by_id::<web::HtmlCanvasElement>(document, id)?)
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Match the canvas backing store to the viewport; returns the new size.
    pub fn fit_viewport(&self) -> Vec2 {
        let size = dom::viewport_size().unwrap_or(Vec2::ZERO);
        self.set_size(size.x as u32, size.y as u32);
        size
    }

    /// Draw `TEXT_WORD` centered on the canvas and read back its RGBA pixels.
    pub fn rasterize_word(&self) -> anyhow::Result<Vec<u8>> {
        self.set_size(TEXT_BUFFER_WIDTH, TEXT_BUFFER_HEIGHT);
        let (w, h) = (TEXT_BUFFER_WIDTH as f64, TEXT_BUFFER_HEIGHT as f64);
        self.ctx.set_fill_style_str(TEXT_RASTER_COLOR);
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(TEXT_WORD, w / 2.0, h / 2.0)
            .map_err(|e| anyhow::anyhow!("fillText: {:?}", e))?;
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?;
        Ok(image.data().0)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> anyhow::Result<()> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, PI * 2.0)
            .map_err(|e| anyhow::anyhow!("arc r={}: {:?}", radius, e))?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))
}
