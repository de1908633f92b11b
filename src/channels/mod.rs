pub mod email;
pub mod message;

use thiserror::Error;

pub use email::{EmailAttachment, EmailChannel, OutboundEmail, SendGridChannel};
pub use message::{MessageChannel, TwilioChannel};

/// Failure from one provider call. The display text is what ends up in the
/// delivery outcome for the affected target.
#[derive(Debug, Clone, Error)]
pub enum ChannelError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for ChannelError {
    fn from(err: reqwest::Error) -> Self {
        ChannelError::Transport(err.to_string())
    }
}
