use thiserror::Error;

/// Configuration errors, all fatal at initialization. The steady-state
/// simulation loop reports no recoverable errors.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("requested {requested} particles per body; bodies carry exactly {supported}")]
    ClusterSizeMismatch { requested: usize, supported: usize },
    #[error("timestep must be positive, got {0}")]
    InvalidTimestep(f32),
    #[error("collision radius must be non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("substeps per frame must be at least 1")]
    InvalidSubstepCount,
    #[error("particle layout of body {0} is degenerate; inertia tensor is singular")]
    DegenerateInertia(usize),
}
