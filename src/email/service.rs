use crate::email::{
  transport::MailTransport,
  types::{DeliveryReceipt, Envelope, SmtpConfig},
};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

pub struct EmailService {
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username, smtp_config.password);

    let transporter = if Self::is_local_host(&smtp_config.host) {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    tracing::info!(
      host = %smtp_config.host,
      port = smtp_config.port,
      "SMTP transport configured"
    );

    Ok(EmailService { transporter })
  }

  // Local mail catchers (MailHog and friends) don't speak TLS.
  fn is_local_host(host: &str) -> bool {
    host == "localhost" || host == "mailhog"
  }

  fn build_message(envelope: &Envelope) -> Result<Message> {
    let message = Message::builder()
      .from(envelope.from.clone())
      .to(envelope.to.clone())
      .subject(&envelope.subject)
      .header(ContentType::TEXT_PLAIN)
      .body(envelope.text.clone())?;

    Ok(message)
  }
}

#[async_trait]
impl MailTransport for EmailService {
  async fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt> {
    let message = Self::build_message(envelope)?;
    let response = self.transporter.send(message).await?;

    Ok(DeliveryReceipt::from(response))
  }
}
