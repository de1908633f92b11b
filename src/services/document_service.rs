use std::collections::BTreeMap;

use chrono::Utc;
use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::models::domain::{DocumentKind, DocumentSet, Quiz, RenderedDocument};

/// Renders the five fixed-template PDF documents from a generated quiz.
/// Each document is a title plus a templated text body; everything funnels
/// through one text-to-PDF path.
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full bundle. A failure for one document is recorded as a
    /// human-readable error string and rendering continues with the rest.
    pub fn render_bundle(
        &self,
        quiz: &Quiz,
        source_text: Option<&str>,
    ) -> (DocumentSet, Vec<String>) {
        let mut set = DocumentSet::new();
        let mut errors = Vec::new();

        for kind in DocumentKind::ALL {
            let body = document_body(kind, quiz, source_text);
            match self.render(kind.title(), &body) {
                Ok(content) => {
                    set.insert(RenderedDocument::pdf(kind, stamped_filename(kind), content));
                }
                Err(e) => {
                    log::error!("PDF generation error for {}: {}", kind.title(), e);
                    errors.push(format!("PDF generation failed: {}: {}", kind.title(), e));
                }
            }
        }

        (set, errors)
    }

    fn render(&self, title: &str, body: &str) -> Result<Vec<u8>, String> {
        let html = text_to_simple_html(title, body);
        let mut warnings = Vec::new();

        match PdfDocument::from_html(
            &html,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &GeneratePdfOptions::default(),
            &mut warnings,
        ) {
            Ok(doc) => {
                if !warnings.is_empty() {
                    log::debug!("PDF warnings for '{}': {:?}", title, warnings);
                }
                Ok(doc.save(&Default::default(), &mut warnings))
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stamped_filename(kind: DocumentKind) -> String {
    format!("{}_{}.pdf", kind.file_stem(), Utc::now().timestamp_millis())
}

fn document_body(kind: DocumentKind, quiz: &Quiz, source_text: Option<&str>) -> String {
    match kind {
        DocumentKind::Answers => student_answers_body(quiz),
        DocumentKind::StudyNotes => study_notes_body(quiz, source_text),
        DocumentKind::AnswerKey => answer_key_body(quiz),
        DocumentKind::LessonPlan => lesson_plan_body(quiz),
        DocumentKind::StudyPlan => study_plan_body(quiz),
    }
}

fn header(quiz: &Quiz) -> String {
    format!("Subject: {}\nGrade: {}\n\n", quiz.subject(), quiz.grade())
}

fn student_answers_body(quiz: &Quiz) -> String {
    let mut body = header(quiz);
    for (i, q) in quiz.questions.iter().enumerate() {
        body.push_str(&format!("Q{}: {}\nAnswer: Not answered\n\n", i + 1, q.question));
    }
    body
}

fn study_notes_body(quiz: &Quiz, source_text: Option<&str>) -> String {
    let mut body = header(quiz);
    body.push_str("Original Educational Content:\n");
    body.push_str(source_text.unwrap_or("Image content provided"));
    body.push_str("\n\nKey Points to Study:\n");
    for (i, q) in quiz.questions.iter().enumerate() {
        body.push_str(&format!("{}. {}\n", i + 1, q.question));
    }
    body
}

fn answer_key_body(quiz: &Quiz) -> String {
    let mut body = header(quiz);
    for (i, q) in quiz.questions.iter().enumerate() {
        body.push_str(&format!(
            "Q{}: {}\nCorrect Answer: {}\n\n",
            i + 1,
            q.question,
            q.correct_answer
        ));
    }
    body
}

fn lesson_plan_body(quiz: &Quiz) -> String {
    let mut body = header(quiz);
    body.push_str("Lesson Objectives:\n");
    for (i, q) in quiz.questions.iter().enumerate() {
        body.push_str(&format!("{}. Understand: {}\n", i + 1, q.question.replace('?', "")));
    }
    body.push_str("\nTeaching Materials:\n");
    body.push_str("Use the provided study notes and answer key to guide discussion.\n\n");
    body.push_str("Assessment:\n");
    body.push_str("Quiz questions provided assess student understanding of key concepts.\n");
    body
}

fn study_plan_body(quiz: &Quiz) -> String {
    let mut body = header(quiz);
    body.push_str("Study Schedule:\n");
    body.push_str("Week 1: Review basic concepts\n");
    body.push_str("Week 2: Practice questions\n");
    body.push_str("Week 3: Take quiz and review answers\n\n");
    body.push_str("Key Topics to Focus On:\n");
    for (i, q) in quiz.questions.iter().enumerate() {
        body.push_str(&format!("{}. {}\n", i + 1, q.question.replace('?', "")));
    }
    body
}

/// Flat HTML for the PDF renderer: a heading plus one paragraph per line.
/// Complex layout is deliberately avoided.
fn text_to_simple_html(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html><html><head><style>body { font-family: sans-serif; }</style></head><body>",
    );
    html.push_str(&format!("<h1>{}</h1>", escape_html(title)));
    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }
        html.push_str(&format!("<p>{}</p>", escape_html(line)));
    }
    html.push_str("</body></html>");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;

    fn quiz() -> Quiz {
        Quiz::new(
            vec![
                QuizQuestion {
                    question: "What is photosynthesis?".to_string(),
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct_answer: "A".to_string(),
                },
                QuizQuestion {
                    question: "Where does it happen?".to_string(),
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct_answer: "C".to_string(),
                },
            ],
            "Biology",
            Some("7"),
            Some("text"),
        )
    }

    #[test]
    fn test_answer_key_lists_correct_answers() {
        let body = answer_key_body(&quiz());
        assert!(body.starts_with("Subject: Biology\nGrade: 7"));
        assert!(body.contains("Q1: What is photosynthesis?\nCorrect Answer: A"));
        assert!(body.contains("Q2: Where does it happen?\nCorrect Answer: C"));
    }

    #[test]
    fn test_student_answers_marks_everything_unanswered() {
        let body = student_answers_body(&quiz());
        assert_eq!(body.matches("Answer: Not answered").count(), 2);
    }

    #[test]
    fn test_study_notes_fall_back_to_image_note() {
        let with_text = study_notes_body(&quiz(), Some("Plants make food from light."));
        assert!(with_text.contains("Plants make food from light."));

        let without = study_notes_body(&quiz(), None);
        assert!(without.contains("Image content provided"));
    }

    #[test]
    fn test_lesson_plan_strips_question_marks_from_objectives() {
        let body = lesson_plan_body(&quiz());
        assert!(body.contains("1. Understand: What is photosynthesis"));
        assert!(!body.contains("Understand: What is photosynthesis?"));
        assert!(body.contains("Assessment:"));
    }

    #[test]
    fn test_study_plan_has_fixed_schedule() {
        let body = study_plan_body(&quiz());
        assert!(body.contains("Week 1: Review basic concepts"));
        assert!(body.contains("Week 3: Take quiz and review answers"));
    }

    #[test]
    fn test_stamped_filenames_use_document_stems() {
        let name = stamped_filename(DocumentKind::AnswerKey);
        assert!(name.starts_with("Answer_Key_"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_html_conversion_escapes_markup() {
        let html = text_to_simple_html("Notes", "1 < 2 & 3 > 2");
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
    }
}
