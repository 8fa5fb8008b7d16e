//! Simulation state for the particle field.
//!
//! `FieldState` owns the particle collection together with the pointer
//! position and the surface bounds. Event handlers mutate the pointer and
//! bounds through the setters only; the frame loop calls `advance` once per
//! tick. Everything stays on one logical thread, so no locking is involved.

use crate::constants::*;
use crate::error::FieldError;
use crate::particle::{Bounds, Particle};
use glam::Vec2;
use rand::Rng;

/// Sampling ranges and pointer interaction tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub size_min: f32,
    pub size_variation: f32,
    pub velocity_min: f32,
    pub velocity_max: f32,
    /// Radius around the pointer inside which particles are pushed away.
    pub effect_radius: f32,
    /// Velocity added per tick to a particle sitting on the pointer.
    pub effect_strength: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            size_min: PARTICLE_SIZE_MIN,
            size_variation: PARTICLE_SIZE_VARIATION,
            velocity_min: PARTICLE_VELOCITY_MIN,
            velocity_max: PARTICLE_VELOCITY_MAX,
            effect_radius: MOUSE_EFFECT_RADIUS,
            effect_strength: MOUSE_EFFECT_FORCE,
        }
    }
}

pub struct FieldState {
    params: FieldParams,
    particles: Vec<Particle>,
    pointer: Vec2,
    bounds: Bounds,
}

impl FieldState {
    /// Empty field with the pointer parked at the sentinel.
    pub fn new(params: FieldParams, bounds: Bounds) -> Self {
        Self {
            params,
            particles: Vec::new(),
            pointer: Vec2::from(POINTER_SENTINEL),
            bounds,
        }
    }

    /// Field holding an existing particle collection as-is.
    pub fn with_particles(params: FieldParams, bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            ..Self::new(params, bounds)
        }
    }

    /// Replace the collection with `count` freshly sampled particles spread
    /// over `bounds`, which also become the current bounds.
    pub fn initialize<R: Rng>(
        &mut self,
        count: usize,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<(), FieldError> {
        if !bounds.has_area() {
            return Err(FieldError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        self.bounds = bounds;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, bounds, &self.params))
            .collect();
        log::info!(
            "[field] initialized {} particles over {}x{}",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
        Ok(())
    }

    /// Move every particle one tick, wrapping at the edges, then apply the
    /// pointer repulsion to the ones inside the effect radius.
    pub fn advance(&mut self) {
        if !self.bounds.has_area() {
            return;
        }
        let width = self.bounds.width as f32;
        let height = self.bounds.height as f32;
        let radius = self.params.effect_radius;
        let radius_sq = radius * radius;
        let strength = self.params.effect_strength;
        let pointer = self.pointer;

        for p in &mut self.particles {
            p.position.x = wrap_coord(p.position.x, p.velocity.x, width);
            p.position.y = wrap_coord(p.position.y, p.velocity.y, height);

            let d = p.position - pointer;
            let dist_sq = d.length_squared();
            if dist_sq < radius_sq {
                p.velocity += pointer_impulse(d, dist_sq.sqrt(), radius, strength);
            }
        }
    }

    /// Last writer wins; no smoothing between pointer events.
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Particles are not repositioned; out-of-range ones wrap on the next
    /// `advance`.
    #[inline]
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::new(width, height);
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Toroidal step along one axis: `(pos + vel + extent) mod extent`.
///
/// The `+ extent` bias keeps the result nonnegative for any step back across
/// the origin. A velocity larger than a whole extent can still leave the sum
/// negative, so that case is folded back into `[0, extent)` explicitly.
#[inline]
pub fn wrap_coord(pos: f32, vel: f32, extent: f32) -> f32 {
    let wrapped = (pos + vel + extent) % extent;
    if wrapped >= 0.0 {
        return wrapped;
    }
    let folded = wrapped.rem_euclid(extent);
    if folded < extent {
        folded
    } else {
        0.0
    }
}

/// Velocity change for a particle offset `d` from the pointer at `distance`.
///
/// Points away from the pointer and falls off linearly from `strength` at the
/// centre to zero at `radius`.
#[inline]
pub fn pointer_impulse(d: Vec2, distance: f32, radius: f32, strength: f32) -> Vec2 {
    let angle = d.y.atan2(d.x);
    let force = (radius - distance) / radius;
    Vec2::new(angle.cos(), angle.sin()) * (force * strength)
}
