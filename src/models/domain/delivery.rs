use serde::{Deserialize, Serialize};

/// Recipient category. The internal recorder is a permanent pseudo-role so
/// target construction stays uniform across all recipients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Recorder,
    Company,
    Teacher,
    Parent,
    Student,
}

impl Role {
    /// Email targets are attempted in this order.
    pub const EMAIL_ORDER: [Role; 5] = [
        Role::Recorder,
        Role::Company,
        Role::Teacher,
        Role::Parent,
        Role::Student,
    ];

    /// Message targets are attempted in this order; the recorder has no phone.
    pub const MESSAGE_ORDER: [Role; 4] = [Role::Company, Role::Teacher, Role::Parent, Role::Student];

    pub fn descriptor(&self) -> &'static str {
        match self {
            Role::Recorder => "Data recording",
            Role::Company => "Company",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::Student => "Student",
        }
    }
}

/// Logical name of one of the five generated documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Answers,
    StudyNotes,
    AnswerKey,
    LessonPlan,
    StudyPlan,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Answers,
        DocumentKind::StudyNotes,
        DocumentKind::AnswerKey,
        DocumentKind::LessonPlan,
        DocumentKind::StudyPlan,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Answers => "Student Quiz Answers",
            DocumentKind::StudyNotes => "Study Notes",
            DocumentKind::AnswerKey => "Answer Key",
            DocumentKind::LessonPlan => "Teacher Lesson Plan",
            DocumentKind::StudyPlan => "Student Study Plan",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            DocumentKind::Answers => "Student_Answers",
            DocumentKind::StudyNotes => "Study_Notes",
            DocumentKind::AnswerKey => "Answer_Key",
            DocumentKind::LessonPlan => "Lesson_Plan",
            DocumentKind::StudyPlan => "Study_Plan",
        }
    }
}

/// One rendered document: opaque bytes plus the metadata a channel needs to
/// attach it.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub filename: String,
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl RenderedDocument {
    pub fn pdf(kind: DocumentKind, filename: String, content: Vec<u8>) -> Self {
        Self {
            kind,
            filename,
            content,
            mime_type: "application/pdf".to_string(),
        }
    }
}

/// The documents available to a job, possibly a partial set.
#[derive(Clone, Debug, Default)]
pub struct DocumentSet {
    docs: Vec<RenderedDocument>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document, replacing any existing one of the same kind.
    pub fn insert(&mut self, doc: RenderedDocument) {
        self.docs.retain(|d| d.kind != doc.kind);
        self.docs.push(doc);
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&RenderedDocument> {
        self.docs.iter().find(|d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Contact points for one role. Absent or empty addresses mean the role is
/// skipped on that channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleContact {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Free-form metadata used only for message text.
#[derive(Clone, Debug, Default)]
pub struct JobContext {
    pub school: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub source_excerpt: Option<String>,
}

impl JobContext {
    pub fn subject_or_default(&self) -> &str {
        self.subject.as_deref().unwrap_or("Quiz")
    }

    pub fn grade_or_default(&self) -> &str {
        self.grade.as_deref().unwrap_or("Not specified")
    }

    pub fn school_or_default(&self) -> &str {
        self.school.as_deref().unwrap_or("Not specified")
    }
}

/// The unit of work handed to the dispatcher. Built fresh per request,
/// never persisted.
#[derive(Clone, Debug)]
pub struct DeliveryJob {
    contacts: Vec<(Role, RoleContact)>,
    pub documents: DocumentSet,
    pub context: JobContext,
}

impl DeliveryJob {
    pub fn new(
        contacts: Vec<(Role, RoleContact)>,
        documents: DocumentSet,
        context: JobContext,
    ) -> Self {
        Self {
            contacts,
            documents,
            context,
        }
    }

    pub fn contact(&self, role: Role) -> Option<&RoleContact> {
        self.contacts.iter().find(|(r, _)| *r == role).map(|(_, c)| c)
    }

    /// The non-empty email address configured for a role, if any.
    pub fn email_for(&self, role: Role) -> Option<&str> {
        self.contact(role)
            .and_then(|c| c.email.as_deref())
            .filter(|e| !e.is_empty())
    }

    /// The non-empty phone number configured for a role, if any.
    pub fn phone_for(&self, role: Role) -> Option<&str> {
        self.contact(role)
            .and_then(|c| c.phone.as_deref())
            .filter(|p| !p.is_empty())
    }
}
