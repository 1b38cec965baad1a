//! Email notifications about room and equipment changes

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::{str::FromStr, sync::Arc};

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

/// Something that can deliver a notification message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> AppResult<()>;
}

/// SMTP notifier sending every message to a single recipient
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| AppError::Notification("SMTP host is not configured".to_string()))?;

        let from_address = config
            .from_address()
            .ok_or_else(|| AppError::Notification("No sender address configured".to_string()))?;
        let from = match config.smtp_from_name.as_deref() {
            Some(name) => Mailbox::from_str(&format!("{} <{}>", name, from_address)),
            None => Mailbox::from_str(from_address),
        }
        .map_err(|e| AppError::Notification(format!("Invalid from address: {}", e)))?;

        let to = Mailbox::from_str(&config.mail_to)
            .map_err(|e| AppError::Notification(format!("Invalid to address: {}", e)))?;

        let mailer_builder = if config.smtp_use_tls {
            SmtpTransport::starttls_relay(host)
                .map_err(|e| AppError::Notification(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(host)
        }
        .port(config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) =
            (&config.smtp_username, &config.smtp_password)
        {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        Ok(Self {
            mailer: mailer_builder.build(),
            from,
            to,
        })
    }
}

#[async_trait]
impl Notifier for EmailService {
    async fn send(&self, subject: &str, body: &str) -> AppResult<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::Notification(format!("Failed to build email: {}", e)))?;

        // lettre's SmtpTransport blocks on network I/O.
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::Internal(format!("Email task failed: {}", e)))?
            .map_err(|e| AppError::Notification(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

/// Best-effort notification side channel.
///
/// Never fails: without a notifier it does nothing, and delivery errors are
/// logged and dropped.
#[derive(Clone, Default)]
pub struct NotificationSink {
    notifier: Option<Arc<dyn Notifier>>,
}

impl NotificationSink {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    pub fn disabled() -> Self {
        Self { notifier: None }
    }

    /// SMTP-backed sink, or a disabled one when no SMTP host is configured
    pub fn from_config(config: &EmailConfig) -> AppResult<Self> {
        if !config.is_enabled() {
            tracing::info!("SMTP not configured, email notifications disabled");
            return Ok(Self::disabled());
        }
        Ok(Self::new(Arc::new(EmailService::new(config)?)))
    }

    pub fn is_enabled(&self) -> bool {
        self.notifier.is_some()
    }

    pub async fn notify(&self, subject: &str, body: &str) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        match notifier.send(subject, body).await {
            Ok(()) => tracing::debug!(subject, "Notification sent"),
            Err(e) => tracing::error!(subject, error = %e, "Error sending notification"),
        }
    }
}
