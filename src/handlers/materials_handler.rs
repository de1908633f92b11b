use actix_web::{post, web, HttpResponse};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::{
        DeliveryJob, DocumentKind, DocumentSet, JobContext, RenderedDocument, Role, RoleContact,
    },
    models::dto::{
        request::SendMaterialsRequest,
        response::{DispatchResults, SendMaterialsResponse},
    },
    services::document_service::stamped_filename,
};

const EXCERPT_CHARS: usize = 500;

#[post("/api/send-quiz-materials")]
pub async fn send_quiz_materials(
    state: web::Data<AppState>,
    request: web::Json<SendMaterialsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let form = request.form_data.normalized();
    form.validate()?;

    log::info!(
        "Processing quiz materials distribution for subject '{}'",
        form.subject_name.as_deref().unwrap_or("Quiz")
    );

    let source_text = request
        .original_content
        .as_ref()
        .and_then(|c| c.educational_text.as_deref());

    // A generated quiz wins over any pre-rendered PDFs in the request.
    let (documents, errors) = match request
        .original_content
        .as_ref()
        .and_then(|c| c.generated_quiz.as_ref())
    {
        Some(quiz) => {
            log::info!("Generating PDFs from quiz data");
            state.document_service.render_bundle(quiz, source_text)
        }
        None => decode_provided_documents(&request),
    };

    let context = JobContext {
        school: form.school_name.clone(),
        subject: form.subject_name.clone(),
        grade: form.student_grade.clone(),
        source_excerpt: source_text.map(excerpt),
    };

    let contacts = vec![
        (
            Role::Recorder,
            RoleContact {
                email: Some(state.config.recorder_email.clone()),
                phone: None,
            },
        ),
        (
            Role::Company,
            RoleContact {
                email: form.company_email.clone(),
                phone: form.company_whats_app.clone(),
            },
        ),
        (
            Role::Teacher,
            RoleContact {
                email: form.teacher_email.clone(),
                phone: form.teacher_whats_app.clone(),
            },
        ),
        (
            Role::Parent,
            RoleContact {
                email: form.parent_email.clone(),
                phone: form.parent_whats_app.clone(),
            },
        ),
        (
            Role::Student,
            RoleContact {
                email: form.student_email.clone(),
                phone: form.student_whats_app.clone(),
            },
        ),
    ];

    let job = DeliveryJob::new(contacts, documents, context);
    let report = state.dispatch_service.dispatch(&job).await;

    if !report.failures().is_empty() || !errors.is_empty() {
        log::warn!(
            "Dispatch finished with {} delivery failures, {} preparation errors",
            report.failures().len(),
            errors.len()
        );
    }

    Ok(HttpResponse::Ok().json(SendMaterialsResponse {
        success: true,
        message: "Quiz materials processed and distributed successfully!",
        results: DispatchResults::from_report(&report, errors),
        timestamp: Utc::now(),
    }))
}

/// Decodes the request's pre-rendered base64 PDFs. Undecodable input is
/// recorded as an error and that document is skipped.
fn decode_provided_documents(request: &SendMaterialsRequest) -> (DocumentSet, Vec<String>) {
    let provided = [
        (DocumentKind::Answers, &request.student_answers_pdf),
        (DocumentKind::StudyNotes, &request.study_notes_pdf),
        (DocumentKind::AnswerKey, &request.answer_key_pdf),
        (DocumentKind::LessonPlan, &request.lesson_plan_pdf),
        (DocumentKind::StudyPlan, &request.study_plan_pdf),
    ];

    let mut set = DocumentSet::new();
    let mut errors = Vec::new();

    for (kind, encoded) in provided {
        let Some(encoded) = encoded.as_deref() else {
            continue;
        };
        match BASE64.decode(encoded) {
            Ok(content) => set.insert(RenderedDocument::pdf(kind, stamped_filename(kind), content)),
            Err(e) => {
                log::error!("Undecodable {} payload: {}", kind.title(), e);
                errors.push(format!("Invalid base64 content for {}: {}", kind.title(), e));
            }
        }
    }

    (set, errors)
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", cut)
    }
}
