use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::channels::ChannelError;
use crate::config::Config;

/// Boundary to the messaging provider. Text only; attachments never travel
/// over this channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError>;
}

/// Twilio Messages API implementation for WhatsApp notifications.
pub struct TwilioChannel {
    client: reqwest::Client,
    account_sid: String,
    auth_token: SecretString,
    from: String,
}

impl TwilioChannel {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from: config.twilio_whatsapp_from.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        )
    }

    fn whatsapp_address(number: &str) -> String {
        if number.starts_with("whatsapp:") {
            number.to_string()
        } else {
            format!("whatsapp:{}", number)
        }
    }
}

#[async_trait]
impl MessageChannel for TwilioChannel {
    async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError> {
        let to = Self::whatsapp_address(to);
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[("From", self.from.as_str()), ("To", to.as_str()), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Twilio rejected message to {}: {} {}", to, status, body);
            return Err(ChannelError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        log::info!("WhatsApp message sent to {}", to);
        Ok(())
    }
}
