//! Double-buffered particle renderer.
//!
//! Particles are drawn into an off-screen buffer first; the visible surface
//! is only cleared and blitted once the frame is complete, so a partially
//! drawn frame is never presented.

use crate::constants::PARTICLE_COLOR;
use crate::particle::{Bounds, Particle};
use crate::surface::Surface2d;
use std::f64::consts::TAU;

pub struct Renderer<S: Surface2d> {
    visible: S,
    offscreen: S,
    fill_style: String,
}

impl<S: Surface2d> Renderer<S> {
    /// Takes ownership of both targets and brings the buffer to the visible
    /// surface's size.
    pub fn new(visible: S, mut offscreen: S) -> Self {
        let bounds = visible.size();
        offscreen.set_size(bounds);
        Self {
            visible,
            offscreen,
            fill_style: PARTICLE_COLOR.to_string(),
        }
    }

    pub fn with_fill_style(mut self, style: impl Into<String>) -> Self {
        self.fill_style = style.into();
        self
    }

    /// Resize visible surface and buffer together.
    pub fn resize(&mut self, bounds: Bounds) {
        self.visible.set_size(bounds);
        self.offscreen.set_size(bounds);
        log::debug!("[render] resized to {}x{}", bounds.width, bounds.height);
    }

    pub fn draw_frame(&mut self, particles: &[Particle], bounds: Bounds) {
        let w = bounds.width as f64;
        let h = bounds.height as f64;

        self.offscreen.clear_rect(0.0, 0.0, w, h);
        self.offscreen.set_fill_style(&self.fill_style);
        for p in particles {
            self.offscreen.begin_path();
            self.offscreen.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.size() as f64,
                0.0,
                TAU,
            );
            self.offscreen.fill();
        }

        self.visible.clear_rect(0.0, 0.0, w, h);
        self.visible.draw_surface(&self.offscreen, 0.0, 0.0);
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.visible.size()
    }

    pub fn visible(&self) -> &S {
        &self.visible
    }

    pub fn offscreen(&self) -> &S {
        &self.offscreen
    }
}
