// Tuning constants for the ambient particle field.

// Population
pub const PARTICLE_COUNT: usize = 100;

// Radius is SIZE_MIN + U[0,1) * SIZE_VARIATION (surface pixels)
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_VARIATION: f32 = 1.0;

// Per-axis drift speed range (pixels per tick)
pub const PARTICLE_VELOCITY_MIN: f32 = 0.05;
pub const PARTICLE_VELOCITY_MAX: f32 = 0.15;

// Pointer repulsion
pub const MOUSE_EFFECT_RADIUS: f32 = 100.0; // pixels
pub const MOUSE_EFFECT_FORCE: f32 = 0.05; // velocity added per tick at the pointer centre

// Single fill style shared by every particle
pub const PARTICLE_COLOR: &str = "rgba(94, 94, 94, 0.5)";

// Pointer position before the first real pointer event; far outside any surface
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0];
