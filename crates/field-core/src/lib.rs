//! Ambient particle field: simulation, double-buffered renderer and the
//! frame loop that alternates them.
//!
//! Nothing here touches a platform API. Hosts supply a [`Surface2d`]
//! implementation and a [`Scheduler`]; the web front-end wires both to a
//! canvas and `requestAnimationFrame`.

pub mod constants;
pub mod error;
pub mod frame;
pub mod particle;
pub mod render;
pub mod state;
pub mod surface;

pub use constants::*;
pub use error::FieldError;
pub use frame::*;
pub use particle::*;
pub use render::Renderer;
pub use state::*;
pub use surface::Surface2d;
