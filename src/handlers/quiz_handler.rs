use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
};

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    // Upstream failure is recovered inside the service with a placeholder
    // quiz, so this path only errors on a bad request shape.
    let quiz = state.quiz_service.generate_quiz(&request).await;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse {
        success: true,
        quiz,
    }))
}
