use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Quiz;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    pub content: Option<String>,

    pub content_type: Option<String>,

    #[validate(range(min = 1, max = 50))]
    pub number_of_questions: u8,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub grade: Option<String>,
}

impl GenerateQuizRequest {
    pub fn is_image_content(&self) -> bool {
        self.content_type.as_deref() == Some("image")
    }
}

/// Contact form submitted alongside the materials. Every field is optional;
/// an absent contact means that role is skipped, not an error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub school_name: Option<String>,
    pub subject_name: Option<String>,
    pub student_grade: Option<String>,

    #[validate(email)]
    pub company_email: Option<String>,
    #[validate(email)]
    pub teacher_email: Option<String>,
    #[validate(email)]
    pub parent_email: Option<String>,
    #[validate(email)]
    pub student_email: Option<String>,

    pub company_whats_app: Option<String>,
    pub teacher_whats_app: Option<String>,
    pub parent_whats_app: Option<String>,
    pub student_whats_app: Option<String>,
}

impl ContactForm {
    /// Trims every field and drops the empty ones, so that validation only
    /// sees addresses that are actually present.
    pub fn normalized(&self) -> Self {
        Self {
            school_name: none_if_empty(&self.school_name),
            subject_name: none_if_empty(&self.subject_name),
            student_grade: none_if_empty(&self.student_grade),
            company_email: none_if_empty(&self.company_email),
            teacher_email: none_if_empty(&self.teacher_email),
            parent_email: none_if_empty(&self.parent_email),
            student_email: none_if_empty(&self.student_email),
            company_whats_app: none_if_empty(&self.company_whats_app),
            teacher_whats_app: none_if_empty(&self.teacher_whats_app),
            parent_whats_app: none_if_empty(&self.parent_whats_app),
            student_whats_app: none_if_empty(&self.student_whats_app),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginalContent {
    pub educational_text: Option<String>,
    pub generated_quiz: Option<Quiz>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMaterialsRequest {
    pub form_data: ContactForm,

    #[serde(rename = "studentAnswersPDF")]
    pub student_answers_pdf: Option<String>,
    #[serde(rename = "studyNotesPDF")]
    pub study_notes_pdf: Option<String>,
    #[serde(rename = "answerKeyPDF")]
    pub answer_key_pdf: Option<String>,
    #[serde(rename = "lessonPlanPDF")]
    pub lesson_plan_pdf: Option<String>,
    #[serde(rename = "studyPlanPDF")]
    pub study_plan_pdf: Option<String>,

    pub original_content: Option<OriginalContent>,
}

fn none_if_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_generate_quiz_request() {
        let request = GenerateQuizRequest {
            content: Some("The water cycle has three stages.".to_string()),
            content_type: Some("text".to_string()),
            number_of_questions: 5,
            subject: "Science".to_string(),
            grade: Some("6".to_string()),
        };
        assert!(request.validate().is_ok());
        assert!(!request.is_image_content());
    }

    #[test]
    fn test_zero_questions_rejected() {
        let request = GenerateQuizRequest {
            content: None,
            content_type: None,
            number_of_questions: 0,
            subject: "Science".to_string(),
            grade: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_normalized_drops_empty_and_whitespace_fields() {
        let form = ContactForm {
            teacher_email: Some("  teacher@school.org ".to_string()),
            parent_email: Some("   ".to_string()),
            student_whats_app: Some(String::new()),
            ..ContactForm::default()
        };

        let normalized = form.normalized();
        assert_eq!(normalized.teacher_email.as_deref(), Some("teacher@school.org"));
        assert!(normalized.parent_email.is_none());
        assert!(normalized.student_whats_app.is_none());
    }

    #[test]
    fn test_invalid_email_rejected_after_normalization() {
        let form = ContactForm {
            teacher_email: Some("not-an-email".to_string()),
            ..ContactForm::default()
        };
        assert!(form.normalized().validate().is_err());
    }

    #[test]
    fn test_send_materials_request_wire_names() {
        let json = r#"{
            "formData": {
                "subjectName": "Maths",
                "teacherEmail": "teacher@school.org",
                "companyWhatsApp": "+264811234567"
            },
            "studentAnswersPDF": "aGVsbG8=",
            "originalContent": { "educationalText": "Fractions." }
        }"#;

        let request: SendMaterialsRequest =
            serde_json::from_str(json).expect("request should deserialize");
        assert_eq!(request.form_data.subject_name.as_deref(), Some("Maths"));
        assert_eq!(
            request.form_data.company_whats_app.as_deref(),
            Some("+264811234567")
        );
        assert_eq!(request.student_answers_pdf.as_deref(), Some("aGVsbG8="));
        assert!(request.original_content.unwrap().generated_quiz.is_none());
    }
}
