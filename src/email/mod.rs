//! Email sending functionality module
//!
//! This module provides basic email sending capabilities using lettre,
//! a popular email library for Rust. Callers depend on the [`MailTransport`]
//! trait; [`EmailService`] is the SMTP implementation used in production.

mod service;
mod transport;
mod types;

pub use service::EmailService;
#[cfg(test)]
pub use transport::MockMailTransport;
pub use transport::MailTransport;
pub use types::{DeliveryReceipt, Envelope, SmtpConfig};
