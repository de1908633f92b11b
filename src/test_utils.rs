
#[cfg(test)]
pub mod fakes {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::channels::{ChannelError, EmailChannel, MessageChannel, OutboundEmail};
    use crate::errors::{AppError, AppResult};
    use crate::services::model_service::CompletionModel;

    /// Email channel that records sends and can reject one address or all.
    #[derive(Default)]
    pub struct FakeEmailChannel {
        sent: Mutex<Vec<OutboundEmail>>,
        reject_address: Option<String>,
        reject_all: bool,
    }

    impl FakeEmailChannel {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rejecting(mut self, address: &str) -> Self {
            self.reject_address = Some(address.to_string());
            self
        }

        pub fn rejecting_all(mut self) -> Self {
            self.reject_all = true;
            self
        }

        pub fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailChannel for FakeEmailChannel {
        async fn send(&self, email: OutboundEmail) -> Result<(), ChannelError> {
            if self.reject_all || self.reject_address.as_deref() == Some(email.to.as_str()) {
                return Err(ChannelError::Rejected {
                    status: 400,
                    body: "address rejected by provider".to_string(),
                });
            }
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    /// Message channel that records (to, body) pairs.
    #[derive(Default)]
    pub struct FakeMessageChannel {
        sent: Mutex<Vec<(String, String)>>,
        reject_all: bool,
    }

    impl FakeMessageChannel {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rejecting_all(mut self) -> Self {
            self.reject_all = true;
            self
        }

        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageChannel for FakeMessageChannel {
        async fn send(&self, to: &str, body: &str) -> Result<(), ChannelError> {
            if self.reject_all {
                return Err(ChannelError::Transport("provider unreachable".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(())
        }
    }

    /// Completion model with a scripted reply.
    pub struct FakeModel {
        reply: AppResult<String>,
    }

    impl FakeModel {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(AppError::UpstreamError(message.to_string())),
            }
        }
    }

    #[async_trait]
    impl CompletionModel for FakeModel {
        async fn complete(&self, _prompt: &str) -> AppResult<String> {
            self.reply.clone()
        }
    }
}
