//! Option store service.

use sea_orm::DatabaseConnection;

use crate::{
    model::option::UpdateSiteOptionsDto,
    server::{data::option::OptionRepository, error::AppError, model::option::SiteOptions},
};

pub struct OptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the typed option set, falling back to defaults for missing or
    /// unparsable rows.
    pub async fn load(&self) -> Result<SiteOptions, AppError> {
        let pairs = OptionRepository::new(self.db).get_all().await?;

        Ok(SiteOptions::from_pairs(pairs))
    }

    /// Applies a partial update and persists the changed rows.
    ///
    /// Nothing is written when the resulting set is invalid.
    ///
    /// # Returns
    /// - `Ok(SiteOptions)` - Option set after the update
    /// - `Err(AppError::ValidationErr)` - Unknown name rule or inconsistent length bounds
    /// - `Err(AppError::DbErr)` - Database error while reading or writing
    pub async fn update(&self, update: UpdateSiteOptionsDto) -> Result<SiteOptions, AppError> {
        let mut options = self.load().await?;
        let rows = options.apply(update)?;

        let repo = OptionRepository::new(self.db);
        for (name, value) in rows {
            repo.set(name, value).await?;
        }

        tracing::info!("Site options updated");

        Ok(options)
    }
}
