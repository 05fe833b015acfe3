use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("degenerate direction vector (length {length})")]
    DegenerateDirection { length: f32 },
    #[error("control point index {index} out of range 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl From<&str> for ViewerError {
    fn from(error: &str) -> Self {
        ViewerError::InvalidArgument(error.to_string())
    }
}
