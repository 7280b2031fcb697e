//! Application state shared across all request handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{auth::reset_link::ResetLinkSigner, mail::MailTransport},
};

/// Shared resources handed to every handler through Axum's state extraction.
///
/// All fields are cheap to clone: the database connection is a pool handle, the
/// mailer sits behind an `Arc`, and the signer's keys are small buffers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Mail transport; `None` disables the forgot password flow.
    pub mailer: Option<Arc<dyn MailTransport>>,

    /// Signs and verifies password reset links.
    pub reset_links: ResetLinkSigner,

    /// Secret mixed into auth tokens.
    pub app_key: String,

    /// Resolve client addresses from proxy headers.
    pub trust_proxy: bool,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        mailer: Option<Arc<dyn MailTransport>>,
        config: &Config,
    ) -> Self {
        Self {
            db,
            mailer,
            reset_links: ResetLinkSigner::new(&config.app_key, config.app_url.clone()),
            app_key: config.app_key.clone(),
            trust_proxy: config.trust_proxy,
        }
    }
}
