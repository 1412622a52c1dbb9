//! The remote translation boundary.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a translation call did not produce a reply.
///
/// The session treats every variant the same way; the distinction only
/// shows up in logs.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("failed to reach translation endpoint: {0}")]
    Network(String),

    #[error("translation endpoint rejected the credentials ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("translation request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("translation did not complete within {0:?}")]
    Timeout(Duration),

    #[error("translation cancelled")]
    Cancelled,
}

/// Something that can turn a directive plus content into translated text.
#[async_trait]
pub trait TranslationCapability: Send + Sync {
    /// Sends `content` together with the natural-language `directive`.
    ///
    /// Returns the reply text exactly as produced, which may be empty.
    async fn translate(&self, directive: &str, content: &str) -> Result<String, TranslationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TranslationError::Auth {
            status: 401,
            body: "bad key".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("bad key"));

        let err = TranslationError::Timeout(Duration::from_secs(60));
        assert!(err.to_string().contains("60s"));
    }
}
