use std::sync::Arc;

use crate::{
    channels::{EmailChannel, MessageChannel, SendGridChannel, TwilioChannel},
    config::Config,
    services::{AnthropicModel, CompletionModel, DispatchService, DocumentService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub document_service: Arc<DocumentService>,
    pub dispatch_service: Arc<DispatchService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        let model = Arc::new(AnthropicModel::new(&config, http.clone()));
        let email = Arc::new(SendGridChannel::new(&config, http.clone()));
        let message = Arc::new(TwilioChannel::new(&config, http));

        Self::with_components(config, model, email, message)
    }

    /// Component-injection constructor; tests swap the provider adapters for
    /// fakes here.
    pub fn with_components(
        config: Config,
        model: Arc<dyn CompletionModel>,
        email: Arc<dyn EmailChannel>,
        message: Arc<dyn MessageChannel>,
    ) -> Self {
        let dispatch_service = Arc::new(DispatchService::new(email, message, &config));

        Self {
            quiz_service: Arc::new(QuizService::new(model)),
            document_service: Arc::new(DocumentService::new()),
            dispatch_service,
            config: Arc::new(config),
        }
    }
}
