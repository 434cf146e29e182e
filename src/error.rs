/// Error types
///
/// Low-level errors (`NormalizeError`, `RemoteError`, `ConfigError`) carry the
/// source error. `Failure` is what the user gets to see: it is `Clone` so it
/// can travel inside UI messages, and it only keeps the rendered message.

use thiserror::Error;

/// Errors from the image intake step
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to encode JPEG: {0}")]
    Encode(String),

    #[error("image decode did not finish within {0:?}")]
    Timeout(std::time::Duration),

    #[error("decode worker stopped: {0}")]
    Worker(String),
}

/// Errors from the project store and upload endpoints
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// User-visible failure of a portfolio operation
///
/// None of these are fatal; they end up as notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Fetching (or seeding) the project list failed, built-in list in use
    #[error("could not load projects: {0}")]
    Load(String),

    /// Persisting a project failed; the local change is kept
    #[error("could not save project: {0}")]
    Save(String),

    /// The upload endpoint refused or could not be reached
    #[error("could not upload image: {0}")]
    Upload(String),

    /// The selected file could not be turned into an upload payload
    #[error("could not read image: {0}")]
    Decode(String),

    #[error("no project with id '{0}'")]
    UnknownProject(String),
}

impl Failure {
    pub fn load(err: RemoteError) -> Self {
        Failure::Load(err.to_string())
    }

    pub fn save(err: RemoteError) -> Self {
        Failure::Save(err.to_string())
    }

    pub fn upload(err: RemoteError) -> Self {
        Failure::Upload(err.to_string())
    }
}

impl From<NormalizeError> for Failure {
    fn from(err: NormalizeError) -> Self {
        Failure::Decode(err.to_string())
    }
}
