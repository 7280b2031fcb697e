use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::mail::{MailTransport, SmtpMailer},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database and the session layer.
///
/// Sessions end with the browser session unless login marks them as remembered.
///
/// # Returns
/// - `Ok((SqliteStore, SessionManagerLayer))` - Store for the cleanup job and the layer
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(SqliteStore, SessionManagerLayer<SqliteStore>), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store.clone())
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd);

    Ok((session_store, session_layer))
}

/// Builds the SMTP mailer when a relay is configured.
///
/// # Returns
/// - `Ok(Some(_))` - Relay configured
/// - `Ok(None)` - `MAIL_HOST` unset; password reset is disabled
/// - `Err(AppError::MailErr)` - Invalid sender address or relay host
pub fn build_mailer(config: &Config) -> Result<Option<Arc<dyn MailTransport>>, AppError> {
    let Some(mail_config) = &config.mail else {
        tracing::warn!("MAIL_HOST is not set, password reset is disabled");
        return Ok(None);
    };

    let mailer = SmtpMailer::new(mail_config)?;
    tracing::info!(
        "Sending mail through {}:{}",
        mail_config.host,
        mail_config.port
    );

    Ok(Some(Arc::new(mailer)))
}
