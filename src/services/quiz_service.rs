use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::{
    constants::prompts::QUIZ_FORMAT_INSTRUCTIONS,
    models::domain::{Quiz, QuizQuestion},
    models::dto::request::GenerateQuizRequest,
    services::model_service::CompletionModel,
};

/// First `{ ... }` block in the reply, so fenced or prose-wrapped JSON still
/// parses.
static JSON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON_BLOCK is a valid regex pattern"));

#[derive(Debug, Deserialize)]
struct ModelQuizReply {
    questions: Vec<QuizQuestion>,
}

pub struct QuizService {
    model: Arc<dyn CompletionModel>,
}

impl QuizService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Generates a quiz from the submitted content. Upstream failure is
    /// recovered locally with a deterministic placeholder quiz; this never
    /// errors out to the caller.
    pub async fn generate_quiz(&self, request: &GenerateQuizRequest) -> Quiz {
        let count = request.number_of_questions as usize;
        let prompt = build_prompt(request);

        log::info!(
            "Generating {} questions for subject '{}'",
            count,
            request.subject
        );

        let questions = match self.model.complete(&prompt).await {
            Ok(reply) => match parse_quiz_reply(&reply) {
                Ok(questions) => {
                    log::info!("Quiz generated with {} questions", questions.len());
                    questions
                }
                Err(reason) => {
                    log::warn!("Unusable model reply ({}), using placeholder quiz", reason);
                    placeholder_questions(count, &request.subject)
                }
            },
            Err(e) => {
                log::warn!("Model call failed ({}), using placeholder quiz", e);
                placeholder_questions(count, &request.subject)
            }
        };

        Quiz::new(
            questions,
            &request.subject,
            request.grade.as_deref(),
            request.content_type.as_deref(),
        )
    }
}

fn build_prompt(request: &GenerateQuizRequest) -> String {
    let lead = if request.is_image_content() {
        format!(
            "Based on this educational image content, create {} multiple choice questions for {} (Grade {}).",
            request.number_of_questions,
            request.subject,
            request.grade.as_deref().unwrap_or("N/A"),
        )
    } else {
        format!(
            "Based on this educational content: \"{}\", create {} multiple choice questions for {} (Grade {}).",
            request.content.as_deref().unwrap_or(""),
            request.number_of_questions,
            request.subject,
            request.grade.as_deref().unwrap_or("N/A"),
        )
    };

    format!("{}\n\n{}", lead, QUIZ_FORMAT_INSTRUCTIONS)
}

/// Best-effort extraction of a question list from the model's free-text
/// reply. Returns the reason on failure so the caller can log it.
fn parse_quiz_reply(reply: &str) -> Result<Vec<QuizQuestion>, String> {
    let block = JSON_BLOCK
        .find(reply)
        .ok_or_else(|| "no JSON object in reply".to_string())?;

    let parsed: ModelQuizReply = serde_json::from_str(block.as_str())
        .map_err(|e| format!("invalid quiz JSON: {}", e))?;

    let questions: Vec<QuizQuestion> = parsed
        .questions
        .into_iter()
        .filter(is_well_formed)
        .collect();

    if questions.is_empty() {
        return Err("no well-formed questions in reply".to_string());
    }

    Ok(questions)
}

/// A usable question has text, exactly 4 options, and a correct answer that
/// is one of them.
fn is_well_formed(question: &QuizQuestion) -> bool {
    !question.question.trim().is_empty()
        && question.options.len() == 4
        && question.options.contains(&question.correct_answer)
}

fn placeholder_questions(count: usize, subject: &str) -> Vec<QuizQuestion> {
    (1..=count)
        .map(|i| QuizQuestion {
            question: format!("Sample Question {} for {}?", i, subject),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer: "Option A".to_string(),
        })
        .collect()
}
