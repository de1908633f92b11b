use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub sendgrid_api_key: SecretString,
    pub twilio_account_sid: String,
    pub twilio_auth_token: SecretString,
    pub twilio_whatsapp_from: String,
    pub anthropic_api_key: SecretString,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
    pub sender_email: String,
    pub recorder_email: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            sendgrid_api_key: SecretString::from(env::var("SENDGRID_API_KEY").unwrap_or_default()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: SecretString::from(env::var("TWILIO_AUTH_TOKEN").unwrap_or_default()),
            twilio_whatsapp_from: env::var("TWILIO_WHATSAPP_FROM")
                .unwrap_or_else(|_| "whatsapp:+14155238886".to_string()),
            anthropic_api_key: SecretString::from(env::var("CLAUDE_API_KEY").unwrap_or_default()),
            anthropic_model: env::var("CLAUDE_MODEL")
                .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string()),
            anthropic_max_tokens: env::var("CLAUDE_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2000),
            sender_email: env::var("SENDER_EMAIL")
                .unwrap_or_else(|_| "noreply@genius-edu.example".to_string()),
            recorder_email: env::var("RECORDER_EMAIL")
                .unwrap_or_else(|_| "records@genius-edu.example".to_string()),
        }
    }

    pub fn sendgrid_configured(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.sendgrid_api_key.expose_secret().is_empty()
    }

    pub fn twilio_configured(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.twilio_account_sid.is_empty() && !self.twilio_auth_token.expose_secret().is_empty()
    }

    pub fn anthropic_configured(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.anthropic_api_key.expose_secret().is_empty()
    }

    /// Validate that production-critical configuration is set
    /// Panics if required provider credentials are missing
    pub fn validate_for_production(&self) {
        if !self.sendgrid_configured() {
            panic!("FATAL: SENDGRID_API_KEY is not set! Email delivery cannot work without it.");
        }

        if !self.twilio_configured() {
            panic!(
                "FATAL: TWILIO_ACCOUNT_SID / TWILIO_AUTH_TOKEN are not set! WhatsApp delivery cannot work without them."
            );
        }

        if !self.anthropic_configured() {
            panic!("FATAL: CLAUDE_API_KEY is not set! Quiz generation cannot work without it.");
        }

        if self.sender_email.ends_with(".example") {
            panic!(
                "FATAL: SENDER_EMAIL is using the default placeholder! Set it to a verified sender address."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            sendgrid_api_key: SecretString::from("test_sendgrid_key".to_string()),
            twilio_account_sid: "ACtest".to_string(),
            twilio_auth_token: SecretString::from("test_twilio_token".to_string()),
            twilio_whatsapp_from: "whatsapp:+14155238886".to_string(),
            anthropic_api_key: SecretString::from("test_claude_key".to_string()),
            anthropic_model: "claude-sonnet-4-20250514".to_string(),
            anthropic_max_tokens: 2000,
            sender_email: "sender@test.com".to_string(),
            recorder_email: "recorder@test.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.anthropic_model.is_empty());
        assert!(config.twilio_whatsapp_from.starts_with("whatsapp:"));
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.recorder_email, "recorder@test.com");
        assert!(config.sendgrid_configured());
        assert!(config.twilio_configured());
        assert!(config.anthropic_configured());
    }

    #[test]
    fn test_missing_keys_report_unconfigured() {
        let mut config = Config::test_config();
        config.sendgrid_api_key = SecretString::from(String::new());
        config.twilio_account_sid = String::new();

        assert!(!config.sendgrid_configured());
        assert!(!config.twilio_configured());
    }
}
