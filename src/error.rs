//! Error types for navigation-mesh geometry operations.

use thiserror::Error;

/// Errors that can occur while building navigation-mesh geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The boolean-operation boundary walk did not close within its iteration
    /// bound. Near-coincident intersection points can make the walk cycle
    /// without returning to its start; the bound turns that into an explicit
    /// failure instead of a wrong polygon set.
    #[error("boundary walk did not close after {iterations} steps")]
    BoundaryWalkDiverged {
        /// Number of walk steps attempted before giving up.
        iterations: usize,
    },

    /// The polygon handed to the triangulator is not y-monotone.
    ///
    /// Monotonicity is a precondition; this is raised when a sweep chain
    /// fails to descend, rather than silently emitting a wrong mesh.
    #[error("triangulation input is not y-monotone")]
    NonMonotoneInput,
}
