use field_core::{FieldError, Scheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. Each queued callback is a
/// one-shot closure freed by the browser after it runs.
pub struct AnimationFrameScheduler {
    window: web::Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<(), FieldError> {
        let closure = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(closure.unchecked_ref())
            .map(|_| ())
            .map_err(|e| FieldError::Schedule(format!("{:?}", e)))
    }
}
