use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// SMTP relay used for OTP emails.
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Credentials for the admin created on first start.
#[derive(Clone, Debug)]
pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origin of the browser clients, used for CORS.
    pub app_url: String,

    /// `None` disables email delivery; codes are logged instead.
    pub smtp: Option<SmtpConfig>,

    /// `None` when `ADMIN_EMAIL` or `ADMIN_PASSWORD` is unset.
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match get("APP_PORT") {
            Some(value) => parse_port("APP_PORT", value)?,
            None => DEFAULT_PORT,
        };

        let smtp = match get("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: match get("SMTP_PORT") {
                    Some(value) => parse_port("SMTP_PORT", value)?,
                    None => 587,
                },
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
                from: require("SMTP_FROM")?,
            }),
            None => None,
        };

        let admin = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                name: get("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            host: get("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            app_url: require("APP_URL")?,
            smtp,
            admin,
        })
    }
}

fn parse_port(name: &str, value: String) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
