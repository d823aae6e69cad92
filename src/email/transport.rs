use anyhow::Result;
use async_trait::async_trait;

use super::types::{DeliveryReceipt, Envelope};

/// Hands a single envelope to whatever actually delivers mail.
///
/// One call is one delivery attempt. Implementations must not retry on their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn deliver(&self, envelope: &Envelope) -> Result<DeliveryReceipt>;
}
