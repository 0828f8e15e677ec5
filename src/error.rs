use std::path::PathBuf;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value that parses but cannot drive a scene
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Texture and environment map load errors
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Loader for {0:?} stopped before producing a result")]
    Cancelled(PathBuf),
}

/// Render errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("GPU setup failed: {0}")]
    Setup(String),
}
