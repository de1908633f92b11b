use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{DispatchReport, Quiz};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    pub endpoints: EndpointMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointMap {
    pub generate_quiz: &'static str,
    pub send_materials: &'static str,
    pub health: &'static str,
}

impl ServiceInfoResponse {
    pub fn current() -> Self {
        Self {
            message: "Genius Educational Software Backend API",
            status: "Running",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
            endpoints: EndpointMap {
                generate_quiz: "/api/generate-quiz",
                send_materials: "/api/send-quiz-materials",
                health: "/health",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceStatuses,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatuses {
    pub sendgrid: &'static str,
    pub twilio: &'static str,
    pub anthropic: &'static str,
}

pub fn configured_label(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "missing"
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub quiz: Quiz,
}

#[derive(Debug, Serialize)]
pub struct DispatchResults {
    pub emails: Vec<String>,
    pub whatsapp: Vec<String>,
    pub errors: Vec<String>,
}

impl DispatchResults {
    /// Folds the report into the wire shape, with any pre-dispatch errors
    /// (render or decode failures) ahead of the delivery failures.
    pub fn from_report(report: &DispatchReport, pre_dispatch_errors: Vec<String>) -> Self {
        let mut errors = pre_dispatch_errors;
        errors.extend(report.failures());
        Self {
            emails: report.sent_emails(),
            whatsapp: report.sent_messages(),
            errors,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendMaterialsResponse {
    pub success: bool,
    pub message: &'static str,
    pub results: DispatchResults,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: String,
    pub available_routes: [&'static str; 4],
}

impl NotFoundResponse {
    pub fn for_path(path: &str) -> Self {
        Self {
            error: "Route not found",
            message: format!("The route {} does not exist on this server", path),
            available_routes: ["/", "/health", "/api/generate-quiz", "/api/send-quiz-materials"],
        }
    }
}
