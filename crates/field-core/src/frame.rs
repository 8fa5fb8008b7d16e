use crate::error::FieldError;
use crate::particle::Bounds;
use crate::render::Renderer;
use crate::state::FieldState;
use crate::surface::Surface2d;
use std::cell::RefCell;
use std::rc::Rc;

/// Host primitive that runs a callback once, before the next presentation.
pub trait Scheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<(), FieldError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Couples the simulation with its renderer and tracks whether ticks should
/// keep being scheduled.
pub struct FrameLoop<S: Surface2d> {
    field: FieldState,
    renderer: Renderer<S>,
    state: LoopState,
    frames: u64,
}

impl<S: Surface2d> FrameLoop<S> {
    pub fn new(field: FieldState, renderer: Renderer<S>) -> Self {
        Self {
            field,
            renderer,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Idle -> Running. Returns false if the loop was already started or
    /// stopped.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        log::info!("[loop] running");
        true
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::info!("[loop] stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }

    /// One update + render pass. Returns whether the next tick should be
    /// scheduled.
    pub fn tick(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.field.advance();
        self.renderer
            .draw_frame(self.field.particles(), self.field.bounds());
        self.frames += 1;
        true
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.field.set_pointer(x, y);
    }

    /// Viewport changed: update the wrap bounds and both surfaces together.
    /// Ignored once stopped, so a torn-down canvas is not cleared again.
    pub fn resize(&mut self, bounds: Bounds) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.field.set_bounds(bounds.width, bounds.height);
        self.renderer.resize(bounds);
    }

    #[inline]
    pub fn field(&self) -> &FieldState {
        &self.field
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Start `frame_loop` and keep it ticking through `scheduler`.
///
/// The first tick runs immediately; each completed tick queues the next one.
/// Once the loop is stopped the pending callback runs as a no-op and nothing
/// further is queued.
pub fn start_loop<S, H>(frame_loop: Rc<RefCell<FrameLoop<S>>>, scheduler: Rc<H>)
where
    S: Surface2d + 'static,
    H: Scheduler + 'static,
{
    if !frame_loop.borrow_mut().start() {
        log::warn!("[loop] start ignored in state {:?}", frame_loop.borrow().state());
        return;
    }
    run_tick(frame_loop, scheduler);
}

fn run_tick<S, H>(frame_loop: Rc<RefCell<FrameLoop<S>>>, scheduler: Rc<H>)
where
    S: Surface2d + 'static,
    H: Scheduler + 'static,
{
    if !frame_loop.borrow_mut().tick() {
        return;
    }
    let next_loop = frame_loop.clone();
    let next_scheduler = scheduler.clone();
    let queued = scheduler.schedule(Box::new(move || run_tick(next_loop, next_scheduler)));
    if let Err(e) = queued {
        log::error!("[loop] {}", e);
        frame_loop.borrow_mut().stop();
    }
}
