//! Process configuration, read once from the environment at startup.

use std::{env, error::Error, fmt, net::SocketAddr};

use lettre::message::Mailbox;

use crate::email::SmtpConfig;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
  Missing(String),
  Invalid { name: String, reason: String },
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(name) => write!(f, "{} environment variable must be set", name),
      ConfigError::Invalid { name, reason } => write!(f, "{} is invalid: {}", name, reason),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub smtp: SmtpConfig,
  pub sender: Mailbox,
  pub bind_addr: SocketAddr,
  pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let optional = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |name: &str| optional(name).ok_or_else(|| ConfigError::Missing(name.to_string()));

    let username = required("SMTP_USERNAME")?;
    let password = required("SMTP_PASSWORD")?;
    let from_email = required("SMTP_FROM_EMAIL")?;

    let sender: Mailbox = from_email.parse().map_err(|e| ConfigError::Invalid {
      name: "SMTP_FROM_EMAIL".to_string(),
      reason: format!("{}", e),
    })?;

    let host = optional("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
    let port = match optional("SMTP_PORT") {
      Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
        name: "SMTP_PORT".to_string(),
        reason: format!("{}", e),
      })?,
      None => DEFAULT_SMTP_PORT,
    };

    let bind_addr = optional("BIND_ADDR")
      .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
      .parse::<SocketAddr>()
      .map_err(|e| ConfigError::Invalid {
        name: "BIND_ADDR".to_string(),
        reason: format!("{}", e),
      })?;

    let cors_allowed_origins = optional("CORS_ALLOWED_ORIGINS")
      .map(|raw| {
        raw
          .split(',')
          .map(str::trim)
          .filter(|origin| !origin.is_empty())
          .map(String::from)
          .collect()
      })
      .unwrap_or_default();

    Ok(AppConfig {
      smtp: SmtpConfig {
        host,
        port,
        username,
        password,
      },
      sender,
      bind_addr,
      cors_allowed_origins,
    })
  }
}
