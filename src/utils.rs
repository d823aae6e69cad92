use std::sync::Arc;

use crate::{
  config::AppConfig,
  email::{EmailService, MailTransport},
};

pub mod error;

pub fn init_email_service(config: &AppConfig) -> anyhow::Result<Arc<dyn MailTransport>> {
  let email_service = EmailService::new(config.smtp.clone())?;
  Ok(Arc::new(email_service))
}
