use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::error::AppError;

/// Starts the expired session cleanup scheduler.
///
/// Runs at the top of every hour and deletes sessions whose expiry has passed.
/// Sessions ending with the browser are stored with a default lifetime, so they are
/// removed by the same job.
///
/// # Arguments
/// - `store` - Session store backed by the application database
pub async fn start_scheduler(store: SqliteStore) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            match store.delete_expired().await {
                Ok(()) => tracing::debug!("Expired sessions deleted"),
                Err(e) => tracing::error!("Error deleting expired sessions: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(())
}
