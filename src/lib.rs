#![cfg(target_arch = "wasm32")]
use crate::constants::PARTICLES_CANVAS_ID;
use crate::frame::AnimationFrameScheduler;
use field_core::{FieldParams, FieldState, FrameLoop, Renderer, PARTICLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod surface;

thread_local! {
    // Kept so the host page can stop the loop on teardown
    static ACTIVE_LOOP: RefCell<Option<events::SharedLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop scheduling frames. The pending frame, if any, runs as a no-op.
#[wasm_bindgen]
pub fn stop() {
    ACTIVE_LOOP.with(|active| {
        if let Some(frame_loop) = active.borrow_mut().take() {
            frame_loop.borrow_mut().stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (visible, offscreen) = surface::acquire(&document, PARTICLES_CANVAS_ID)?;

    let bounds = dom::viewport_bounds(&window);
    let mut renderer = Renderer::new(visible, offscreen);
    renderer.resize(bounds);

    let mut field = FieldState::new(FieldParams::default(), bounds);
    let mut rng = StdRng::from_entropy();
    field.initialize(PARTICLE_COUNT, bounds, &mut rng)?;

    let frame_loop: events::SharedLoop = Rc::new(RefCell::new(FrameLoop::new(field, renderer)));
    events::wire_pointermove(&window, &frame_loop);
    events::wire_resize(&window, &frame_loop);
    ACTIVE_LOOP.with(|active| *active.borrow_mut() = Some(frame_loop.clone()));

    field_core::start_loop(frame_loop, Rc::new(AnimationFrameScheduler::new(window)));
    Ok(())
}
