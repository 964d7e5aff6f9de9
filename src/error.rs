//! Error types for the frame solver

use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node '{0}' not found in model")]
    NodeNotFound(String),

    #[error("Bar '{0}' not found in model")]
    BarNotFound(String),

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Section '{0}' not found in model")]
    SectionNotFound(String),

    #[error("Load case '{0}' not found in model")]
    LoadCaseNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid load position: {0}")]
    InvalidLoadPosition(String),

    #[error("Invalid support: {0}")]
    InvalidSupport(String),

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Model not analyzed - run analyze() first")]
    NotAnalyzed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
