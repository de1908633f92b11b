pub mod dispatch_service;
pub mod document_service;
pub mod model_service;
pub mod quiz_service;
pub mod templates;

pub use dispatch_service::DispatchService;
pub use document_service::DocumentService;
pub use model_service::{AnthropicModel, CompletionModel};
pub use quiz_service::QuizService;
