use thiserror::Error;

/// Failures the particle field can report.
///
/// Only initialization and scheduling can fail; advancing the simulation and
/// drawing a frame assume a surface that was acquired successfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The drawable surface or one of its 2D contexts could not be acquired.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// Particles cannot be spread over a surface with no area.
    #[error("invalid surface bounds {width}x{height}")]
    InvalidBounds { width: u32, height: u32 },
    /// The host refused to queue the next tick.
    #[error("could not schedule next frame: {0}")]
    Schedule(String),
}
