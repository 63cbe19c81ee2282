use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Rate limit exceeded twice for {url}, giving up")]
    RateLimited { url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unknown {kind}: {value}")]
    UnknownCode { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    /// Exit code for a process that chooses to terminate on this error.
    /// HTTP failures map to their status code, everything else to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Http { status, .. } => i32::from(*status),
            AppError::RateLimited { .. } => 429,
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::JsonError(e.to_string())
    }
}
