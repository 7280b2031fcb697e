//! Outgoing mail.
//!
//! Services send through the `MailTransport` trait so the SMTP relay can be replaced in
//! tests. `AppState` holds `None` when no relay is configured, which disables the
//! password reset flow.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::MailConfig, error::mail::MailError};

/// Port that expects TLS from the first byte instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// A plain-text mail ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// SMTP relay transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds the relay transport. No connection is opened until the first send.
    ///
    /// # Arguments
    /// - `config` - Relay host, port, optional credentials and sender mailbox
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport ready to send
    /// - `Err(MailError::InvalidAddress)` - `MAIL_FROM` is not a valid mailbox
    /// - `Err(MailError::Transport)` - TLS parameters could not be built for the host
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(config.from.clone()))?;

        let builder = if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| MailError::Transport(e.to_string()))?
        .port(config.port);

        let builder = match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let to = mail
            .to
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(mail.to.clone()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}
