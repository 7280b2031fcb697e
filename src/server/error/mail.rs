use thiserror::Error;

/// Failures raised while building or delivering a mail.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid mailbox '{0}'")]
    InvalidAddress(String),

    /// The message could not be assembled.
    #[error("Failed to build mail: {0}")]
    Build(String),

    /// The transport rejected or failed to deliver the message.
    #[error("Failed to deliver mail: {0}")]
    Transport(String),
}
