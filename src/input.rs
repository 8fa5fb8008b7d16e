use glam::Vec2;
use web_sys as web;

/// Map a client-space position onto a surface's pixel grid.
///
/// `rect_origin`/`rect_size` describe where the surface sits in the page (CSS
/// pixels) and `surface_size` is its backing size in pixels. When the surface
/// has no layout size yet the offset from its origin is returned unscaled.
#[inline]
pub fn client_to_surface_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    surface_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local * surface_size / rect_size
    } else {
        local
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
