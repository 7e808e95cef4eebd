// Error taxonomy for a single conversion attempt

use thiserror::Error;

/// Failure of one `convert` call. Every variant is terminal for that call:
/// nothing is retried automatically and no partial result is produced. The
/// caller decides whether to surface the error (manual invocations) or
/// suppress it (background refreshes).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("nothing to explain: the selection is empty or whitespace-only")]
    EmptyInput,

    #[error(
        "no API credential configured: set api_key in .gloss.json or the GLOSS_API_KEY environment variable"
    )]
    MissingCredential,

    #[error("explanation service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
