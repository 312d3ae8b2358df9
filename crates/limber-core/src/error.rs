//! Error types for Limber

use thiserror::Error;

/// The main error type for Limber operations
#[derive(Debug, Error)]
pub enum LimberError {
    #[error("Bone not found: {0}")]
    BoneNotFound(String),

    #[error("Duplicate bone name: {0}")]
    DuplicateBone(String),

    #[error("Skeleton already has a root bone '{existing}', cannot add root '{name}'")]
    MultipleRoots { existing: String, name: String },

    #[error("Skeleton has no root bone")]
    MissingRoot,

    #[error("Clip not found: {0}")]
    ClipNotFound(String),

    #[error("Clip has zero total tick length")]
    EmptyClip,

    #[error("Invalid keyframe: {0}")]
    InvalidKeyframe(String),

    #[error("Keyframe index {index} would leave a hole (clip has {len} frames)")]
    SparseKeyframeIndex { index: usize, len: usize },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type alias for Limber operations
pub type Result<T> = std::result::Result<T, LimberError>;

impl From<toml::de::Error> for LimberError {
    fn from(err: toml::de::Error) -> Self {
        LimberError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for LimberError {
    fn from(err: toml::ser::Error) -> Self {
        LimberError::TomlSerError(err.to_string())
    }
}
