//! Signed password reset links.
//!
//! The token is an HS256 JWT keyed with the application key. Besides the user and
//! the expiry it carries a fingerprint of the password hash current at issue time, so
//! a link stops working once the password it was issued for has been replaced.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Lifetime of a reset link in seconds.
pub const RESET_LINK_TTL_SECONDS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub uid: i32,
    pub exp: i64,
    /// Fingerprint of the password hash the link was issued for.
    pub pwd: String,
}

#[derive(Clone)]
pub struct ResetLinkSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    app_url: Url,
}

impl ResetLinkSigner {
    pub fn new(app_key: &str, app_url: Url) -> Self {
        Self {
            encoding: EncodingKey::from_secret(app_key.as_bytes()),
            decoding: DecodingKey::from_secret(app_key.as_bytes()),
            app_url,
        }
    }

    /// Builds the public link for a user, valid for [`RESET_LINK_TTL_SECONDS`].
    pub fn link(&self, user: &User) -> Result<String, AppError> {
        let token = self.sign(user, Utc::now().timestamp() + RESET_LINK_TTL_SECONDS)?;

        Ok(format!(
            "{}/auth/reset/{}",
            self.app_url.as_str().trim_end_matches('/'),
            token
        ))
    }

    /// Signs a token for a user that expires at the given unix timestamp.
    pub fn sign(&self, user: &User, expires_at: i64) -> Result<String, AppError> {
        let claims = ResetClaims {
            uid: user.uid,
            exp: expires_at,
            pwd: fingerprint(&user.password_hash),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to sign reset link: {}", e)))
    }

    /// Checks the signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(ResetClaims)` - Authentic, unexpired token
    /// - `Err(AuthError::InvalidResetLink)` - Tampered, malformed or expired token
    pub fn verify(&self, token: &str) -> Result<ResetClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<ResetClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected reset token: {}", e);
                AuthError::InvalidResetLink
            })
    }

    /// Whether the claims were issued for the user's current password.
    pub fn matches(claims: &ResetClaims, user: &User) -> bool {
        claims.uid == user.uid && claims.pwd == fingerprint(&user.password_hash)
    }
}

fn fingerprint(password_hash: &str) -> String {
    let digest = Sha256::digest(password_hash.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}
