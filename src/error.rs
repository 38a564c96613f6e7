use thiserror::Error;

/// Failures of the input and output surfaces around the renderer. Rendering
/// itself never fails.
#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid JSON tree: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
