//! Error types for scene construction and loading

use std::path::PathBuf;

use thiserror::Error;

/// A scene that cannot be rendered. Detected before any pixel is produced.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene holds no object at all
    #[error("the scene is empty")]
    Empty,

    #[error("the scene has no camera")]
    MissingCamera,

    #[error("the scene has more than one camera (objects {first} and {second})")]
    MultipleCameras { first: usize, second: usize },

    #[error("camera extents must be positive, got {width}x{height}")]
    InvalidCamera { width: f32, height: f32 },

    #[error("object {index}: sphere radius must be positive, got {radius}")]
    NonPositiveRadius { index: usize, radius: f32 },

    #[error("object {index}: plane normal has no direction")]
    DegenerateNormal { index: usize },

    #[error("object {index}: spot light has no direction")]
    DegenerateSpotDirection { index: usize },

    #[error("object {index}: {name} must be in [0, 1], got {value}")]
    CoefficientOutOfRange {
        index: usize,
        name: &'static str,
        value: f32,
    },

    #[error("object {index}: index of refraction must be positive, got {ior}")]
    InvalidIor { index: usize, ior: f32 },
}

/// Failure to turn a scene description into a [crate::scene::Scene]
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene description")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene")]
    Scene(#[from] SceneError),
}
