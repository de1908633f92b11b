use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::channels::ChannelError;
use crate::config::Config;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Clone, Debug)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub mime_type: String,
}

#[derive(Clone, Debug)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html_body: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Boundary to the transactional-email provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), ChannelError>;
}

/// SendGrid v3 mail-send implementation.
pub struct SendGridChannel {
    client: reqwest::Client,
    api_key: SecretString,
}

impl SendGridChannel {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: config.sendgrid_api_key.clone(),
        }
    }

    fn payload(email: &OutboundEmail) -> serde_json::Value {
        let mut payload = json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": email.from },
            "subject": email.subject,
            "content": [{ "type": "text/html", "value": email.html_body }],
        });

        // SendGrid rejects an empty attachments array, so only set the key
        // when there is something to attach.
        if !email.attachments.is_empty() {
            let attachments: Vec<serde_json::Value> = email
                .attachments
                .iter()
                .map(|a| {
                    json!({
                        "content": BASE64.encode(&a.content),
                        "filename": a.filename,
                        "type": a.mime_type,
                        "disposition": "attachment",
                    })
                })
                .collect();
            payload["attachments"] = serde_json::Value::Array(attachments);
        }

        payload
    }
}

#[async_trait]
impl EmailChannel for SendGridChannel {
    async fn send(&self, email: OutboundEmail) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&Self::payload(&email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("SendGrid rejected mail to {}: {} {}", email.to, status, body);
            return Err(ChannelError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        log::info!("Email sent to {} ({})", email.to, email.subject);
        Ok(())
    }
}
