use std::sync::Arc;

use lettre::message::Mailbox;

use crate::{
  domains::mail::{
    model::{SendRequest, SendResponse},
    service::{MailService, MailServiceError, MailServiceImpl},
  },
  email::MailTransport,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_mail(
    &self,
    req: SendRequest,
  ) -> impl std::future::Future<Output = Result<SendResponse, MailServiceError>> + Send;
}

/// Process-wide state: built once at startup and shared by every request.
#[derive(Clone)]
pub struct SharedAppState {
  pub mail_service: Arc<MailServiceImpl>,
}

impl SharedAppState {
  pub fn new(sender: Mailbox, transport: Arc<dyn MailTransport>) -> Self {
    let mail_service = Arc::new(MailServiceImpl::new(sender, transport));

    Self { mail_service }
  }
}

impl AppState for SharedAppState {
  async fn send_mail(&self, req: SendRequest) -> Result<SendResponse, MailServiceError> {
    self.mail_service.send_mail(req).await
  }
}
