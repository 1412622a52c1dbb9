//! Translation session: transcript state and the controller that drives it.

/// Submission protocol and language selection intents.
pub mod controller;
mod message;
mod state;

pub use controller::{
    DEFAULT_REQUEST_TIMEOUT, EMPTY_TRANSLATION, FAILURE_NOTICE, PendingTranslation, Rejection,
    SessionController, SubmitOutcome,
};
pub use message::{Message, Origin};
pub use state::{GREETING, Session, SessionError};
