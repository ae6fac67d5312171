use std::env;

use crate::auth::application::services::AdminSeed;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub enum EmailTransport {
    /// TLS relay with credentials.
    Smtp {
        server: String,
        username: String,
        password: String,
    },
    /// Plain SMTP to a local catcher such as Mailpit.
    Local { host: String, port: u16 },
    /// Writes outgoing mail to the log instead of sending it.
    Log,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub email_from: String,
    pub email_transport: EmailTransport,
    pub storage_bucket: String,
    pub storage_public_base_url: Option<String>,
    pub admin_seed: Option<AdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = optional("PORT").unwrap_or_else(|| "5000".to_string());
        let port = port
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: port })?;

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: required("DATABASE_URL")?,
            run_migrations: flag("RUN_MIGRATIONS")?,
            email_from: optional("EMAIL_FROM")
                .unwrap_or_else(|| "noreply@gulfcoastmusic.com".to_string()),
            email_transport: email_transport()?,
            storage_bucket: required("STORAGE_BUCKET")?,
            storage_public_base_url: optional("STORAGE_PUBLIC_BASE_URL"),
            admin_seed: admin_seed(),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn email_transport() -> Result<EmailTransport, ConfigError> {
    let kind = optional("EMAIL_TRANSPORT").unwrap_or_else(|| "smtp".to_string());

    match kind.to_lowercase().as_str() {
        "smtp" => Ok(EmailTransport::Smtp {
            server: required("SMTP_SERVER")?,
            username: required("SMTP_USERNAME")?,
            password: required("SMTP_PASSWORD")?,
        }),
        "local" => {
            let port = optional("SMTP_PORT").unwrap_or_else(|| "1025".to_string());
            Ok(EmailTransport::Local {
                host: optional("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: port
                    .parse()
                    .map_err(|_| ConfigError::Invalid { key: "SMTP_PORT", value: port })?,
            })
        }
        "log" => Ok(EmailTransport::Log),
        _ => Err(ConfigError::Invalid {
            key: "EMAIL_TRANSPORT",
            value: kind,
        }),
    }
}

/// All three variables must be present for the seed to run.
fn admin_seed() -> Option<AdminSeed> {
    Some(AdminSeed {
        username: optional("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
        email: optional("ADMIN_EMAIL")?,
        password: optional("ADMIN_PASSWORD")?,
    })
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag(key: &'static str) -> Result<bool, ConfigError> {
    match optional(key).as_deref().map(str::to_lowercase).as_deref() {
        None | Some("false") | Some("0") | Some("no") => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
        }),
    }
}
