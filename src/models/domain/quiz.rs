use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated quiz as it travels over the wire. Field names stay camelCase
/// because the frontend round-trips this object into the send-materials call.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub id: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QuizMetadata>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        questions: Vec<QuizQuestion>,
        subject: &str,
        grade: Option<&str>,
        content_type: Option<&str>,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            questions,
            metadata: Some(QuizMetadata {
                subject: Some(subject.to_string()),
                grade: grade.map(str::to_string),
                content_type: content_type.map(str::to_string),
                created_at: Some(Utc::now()),
            }),
        }
    }

    pub fn subject(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.subject.as_deref())
            .unwrap_or("Quiz")
    }

    pub fn grade(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.grade.as_deref())
            .unwrap_or("N/A")
    }
}
