use crate::constants::CONTEXT_2D;
use field_core::{Bounds, FieldError, Surface2d};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas element paired with its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: web::HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context(CONTEXT_2D)
            .ok()
            .flatten()
            .ok_or_else(|| FieldError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

/// Look up the visible canvas by id and create a detached off-screen canvas
/// next to it. Either one missing its 2D context is fatal for this start.
pub fn acquire(
    document: &web::Document,
    canvas_id: &str,
) -> Result<(CanvasSurface, CanvasSurface), FieldError> {
    let visible = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| FieldError::SurfaceUnavailable(format!("missing #{}", canvas_id)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?;
    let offscreen = document
        .create_element("canvas")
        .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?;
    Ok((
        CanvasSurface::from_canvas(visible)?,
        CanvasSurface::from_canvas(offscreen)?,
    ))
}

impl Surface2d for CanvasSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.canvas.set_width(bounds.width);
        self.canvas.set_height(bounds.height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        _ = self.ctx.arc(x, y, radius, start_angle, end_angle);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn draw_surface(&mut self, src: &Self, dx: f64, dy: f64) {
        _ = self
            .ctx
            .draw_image_with_html_canvas_element(&src.canvas, dx, dy);
    }
}
