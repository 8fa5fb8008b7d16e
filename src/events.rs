use crate::dom;
use crate::input;
use crate::surface::CanvasSurface;
use field_core::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedLoop = Rc<RefCell<FrameLoop<CanvasSurface>>>;

/// Track the pointer in canvas pixel space; the next tick reads it.
pub fn wire_pointermove(window: &web::Window, frame_loop: &SharedLoop) {
    let frame_loop = frame_loop.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut fl = frame_loop.borrow_mut();
        let pos = input::pointer_canvas_px(&ev, fl.renderer().visible().canvas());
        fl.set_pointer(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-query the viewport on resize and resize surfaces and wrap bounds
/// together.
pub fn wire_resize(window: &web::Window, frame_loop: &SharedLoop) {
    let frame_loop = frame_loop.clone();
    let window_for_size = window.clone();

    let closure = Closure::wrap(Box::new(move || {
        let bounds = dom::viewport_bounds(&window_for_size);
        log::debug!("[surface] viewport {}x{}", bounds.width, bounds.height);
        frame_loop.borrow_mut().resize(bounds);
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
