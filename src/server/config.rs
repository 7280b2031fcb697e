use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAIL_PORT: u16 = 587;
const MIN_APP_KEY_LENGTH: usize = 32;

/// SMTP relay settings. Present only when `MAIL_HOST` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    /// Public base URL used to build password reset links.
    pub app_url: Url,
    /// Secret for auth tokens and reset link signatures.
    pub app_key: String,

    pub bind_address: String,
    /// Trust `X-Forwarded-For` / `X-Real-IP` when resolving the client IP.
    pub trust_proxy: bool,
    pub secure_cookies: bool,

    pub mail: Option<MailConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let app_url = required("APP_URL")?;
        let app_url = Url::parse(&app_url).map_err(|e| invalid("APP_URL", e.to_string()))?;

        let app_key = required("APP_KEY")?;
        if app_key.len() < MIN_APP_KEY_LENGTH {
            return Err(invalid(
                "APP_KEY",
                format!("must be at least {} characters", MIN_APP_KEY_LENGTH),
            )
            .into());
        }

        let mail = match var("MAIL_HOST") {
            Some(host) => {
                let port = match var("MAIL_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .map_err(|e| invalid("MAIL_PORT", e.to_string()))?,
                    None => DEFAULT_MAIL_PORT,
                };

                Some(MailConfig {
                    host,
                    port,
                    username: var("MAIL_USERNAME"),
                    password: var("MAIL_PASSWORD"),
                    from: required("MAIL_FROM")?,
                })
            }
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url,
            app_key,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            trust_proxy: parse_flag("TRUST_PROXY", var("TRUST_PROXY"))?,
            secure_cookies: parse_flag("SECURE_COOKIES", var("SECURE_COOKIES"))?,
            mail,
        })
    }
}

fn invalid(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("false") | Some("0") | Some("no") => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some(other) => Err(invalid(name, format!("expected a boolean, got '{}'", other))),
    }
}
