use sea_orm::{DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{player::PlayerRepository, user::UserRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::session::CaptchaSession,
    model::{
        auth::{Authenticated, RegisterParam},
        player::CreatePlayerParam,
        user::{CreateUserParam, Permission},
    },
    service::{auth::AuthService, option::OptionService},
    util::{password, validate},
};

impl<'a> AuthService<'a> {
    /// Registers a new account and logs it in.
    ///
    /// When the site registers with player names, the player name doubles as the
    /// nickname and a player with that name is created in the same transaction. The
    /// first account created while no administrator exists becomes super admin.
    ///
    /// The email is stored lowercased. A concurrent registration that wins the race
    /// for the same email or player name surfaces as the matching `Taken` error.
    ///
    /// # Arguments
    /// - `param` - Registration fields and the client IP
    ///
    /// # Returns
    /// - `Ok(Authenticated)` - Account created and session established
    /// - `Err(AppError::ValidationErr)` - Invalid or taken field, or wrong CAPTCHA
    /// - `Err(AuthError::RegistrationClosed)` - Registration is disabled
    /// - `Err(AuthError::RegistrationQuotaReached)` - Too many accounts from this IP
    pub async fn register(&self, param: RegisterParam) -> Result<Authenticated, AppError> {
        let options = OptionService::new(self.db).load().await?;
        let user_repo = UserRepository::new(self.db);

        let email = validate::normalize_email(&param.email);
        validate::email("email", &email)?;
        if user_repo.email_exists(&email).await? {
            return Err(ValidationError::Taken("email").into());
        }

        validate::password(&param.password)?;

        let (nickname, player_name) = if options.register_with_player_name {
            let name = param.player_name.unwrap_or_default();
            validate::player_name(
                &name,
                options.player_name_rule,
                options.player_name_length_min,
                options.player_name_length_max,
            )?;
            if PlayerRepository::new(self.db).name_exists(&name).await? {
                return Err(ValidationError::Taken("player_name").into());
            }
            (name.clone(), Some(name))
        } else {
            let nickname = param.nickname.unwrap_or_default();
            validate::nickname(&nickname)?;
            (nickname, None)
        };

        if options.auth_captcha {
            CaptchaSession::new(self.session)
                .verify(param.captcha.as_deref())
                .await?;
        }

        if !options.user_can_register {
            return Err(AuthError::RegistrationClosed.into());
        }

        if user_repo.count_by_ip(&param.ip).await? >= u64::from(options.regs_per_ip) {
            return Err(AuthError::RegistrationQuotaReached(options.regs_per_ip).into());
        }

        let password_hash = password::hash(&param.password)?;

        let txn = self.db.begin().await?;
        let txn_user_repo = UserRepository::new(&txn);

        let permission = if txn_user_repo.admin_exists().await? {
            Permission::Normal
        } else {
            Permission::SuperAdmin
        };

        let user = txn_user_repo
            .create(CreateUserParam {
                email,
                nickname,
                password_hash,
                score: options.user_initial_score,
                permission,
                ip: param.ip,
            })
            .await
            .map_err(taken_or_db_error)?;

        if let Some(name) = player_name {
            PlayerRepository::new(&txn)
                .create(CreatePlayerParam {
                    uid: user.uid,
                    name,
                })
                .await
                .map_err(taken_or_db_error)?;
        }

        txn.commit().await?;

        tracing::info!(uid = user.uid, ip = %user.ip, "User registered");

        self.establish(user, false).await
    }
}

/// Maps a unique index violation on a registration field to the field's `Taken` error.
///
/// # Returns
/// - `Some(ValidationError::Taken)` - The error is a duplicate email or player name
/// - `None` - Any other database error
pub fn taken_field(err: &DbErr) -> Option<ValidationError> {
    let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() else {
        return None;
    };

    if message.contains("users.email") {
        Some(ValidationError::Taken("email"))
    } else if message.contains("players.name") {
        Some(ValidationError::Taken("player_name"))
    } else {
        None
    }
}

fn taken_or_db_error(err: DbErr) -> AppError {
    match taken_field(&err) {
        Some(taken) => taken.into(),
        None => err.into(),
    }
}
