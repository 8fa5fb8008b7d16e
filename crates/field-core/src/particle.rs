use crate::state::FieldParams;
use glam::Vec2;
use rand::Rng;

/// A single drifting point rendered as a filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    size: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    /// Sample a particle uniformly over `bounds` with radius and velocity
    /// drawn from the ranges in `params`. `bounds` must have a positive area.
    pub fn random<R: Rng>(rng: &mut R, bounds: Bounds, params: &FieldParams) -> Self {
        let x = rng.gen_range(0.0..bounds.width as f32);
        let y = rng.gen_range(0.0..bounds.height as f32);
        let size = params.size_min + rng.gen::<f32>() * params.size_variation;
        let span = params.velocity_max - params.velocity_min;
        let vx = params.velocity_min + rng.gen::<f32>() * span;
        let vy = params.velocity_min + rng.gen::<f32>() * span;
        Self::new(Vec2::new(x, y), Vec2::new(vx, vy), size)
    }

    /// Radius in surface pixels; fixed at creation.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Pixel extents shared by the visible surface and its off-screen buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width as f32 && p.y >= 0.0 && p.y < self.height as f32
    }
}
