// Host page wiring for the web front-end.

// Element id of the visible canvas in the host page
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Context id requested from both canvases
pub const CONTEXT_2D: &str = "2d";
