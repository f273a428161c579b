use thiserror::Error;

use super::{ShapeId, ShapeKind};

/// Errors raised by the registry and by shape capability queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// The id was never issued by this registry, or its slot has already
    /// been removed.
    #[error("shape id {0} is out of range")]
    OutOfRange(ShapeId),

    /// The primitive does not implement the requested capability.
    #[error("{kind} does not support {operation}")]
    NotSupported {
        kind: ShapeKind,
        operation: &'static str,
    },

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    InvalidGeometry { vertices: usize },
}
