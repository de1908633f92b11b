//! Role-scoped message content. Email bodies are small self-contained HTML
//! fragments; WhatsApp bodies are WhatsApp-flavored plain text. Both only
//! ever reference job metadata, never document bytes.

use chrono::Utc;

use crate::models::domain::{DeliveryJob, JobContext, Role};

pub fn email_subject(role: Role, ctx: &JobContext) -> String {
    let subject = ctx.subject_or_default();
    match role {
        Role::Recorder => format!(
            "Data Recording - {} - {}",
            subject,
            Utc::now().format("%Y-%m-%d")
        ),
        Role::Company => format!("Complete Educational Package - {}", subject),
        Role::Teacher => format!("Teaching Materials - {}", subject),
        Role::Parent => format!("Quiz Results - {}", subject),
        Role::Student => format!("Your Quiz Results - {}", subject),
    }
}

pub fn email_body(role: Role, job: &DeliveryJob) -> String {
    match role {
        Role::Recorder => recorder_email_body(job),
        Role::Company => company_email_body(&job.context),
        Role::Teacher => teacher_email_body(&job.context),
        Role::Parent => parent_email_body(&job.context),
        Role::Student => student_email_body(&job.context),
    }
}

pub fn message_body(role: Role, job: &DeliveryJob) -> String {
    let ctx = &job.context;
    match role {
        // The recorder never gets a message target; text kept uniform anyway.
        Role::Recorder | Role::Company => format!(
            "*Genius Educational Software*\n\nComplete educational package generated!\n\nSubject: {}\nGrade: {}\n\n{}",
            ctx.subject_or_default(),
            ctx.grade_or_default(),
            check_email_line(job, Role::Company),
        ),
        Role::Teacher => format!(
            "*Teaching Materials Ready*\n\nNew materials for:\nSubject: {}\nGrade: {}\n\n{}",
            ctx.subject_or_default(),
            ctx.grade_or_default(),
            check_email_line(job, Role::Teacher),
        ),
        Role::Parent => format!(
            "*Quiz Results Available*\n\nYour child completed a quiz:\nSubject: {}\n\n{}",
            ctx.subject_or_default(),
            check_email_line(job, Role::Parent),
        ),
        Role::Student => format!(
            "*Quiz Completed!*\n\nGreat job on your quiz!\nSubject: {}\n\n{}",
            ctx.subject_or_default(),
            check_email_line(job, Role::Student),
        ),
    }
}

fn check_email_line(job: &DeliveryJob, role: Role) -> String {
    match job.email_for(role) {
        Some(email) => format!("Check your email: {}", email),
        None => "Check your email.".to_string(),
    }
}

fn session_details(ctx: &JobContext) -> String {
    format!(
        "<ul><li><strong>School:</strong> {}</li><li><strong>Subject:</strong> {}</li><li><strong>Grade:</strong> {}</li></ul>",
        ctx.school_or_default(),
        ctx.subject_or_default(),
        ctx.grade_or_default(),
    )
}

const FULL_PACKAGE_LIST: &str = "<ul>\
<li>Student Quiz Answers</li>\
<li>Study Notes</li>\
<li>Answer Key</li>\
<li>Teacher's Lesson Plan</li>\
<li>Student's Study Plan</li>\
</ul>";

fn recorder_email_body(job: &DeliveryJob) -> String {
    let ctx = &job.context;
    let mut body = String::new();
    body.push_str("<h2>Complete Data Recording - Genius Educational Software</h2>");
    body.push_str("<h3>Session Details</h3>");
    body.push_str(&format!(
        "<p><strong>Timestamp:</strong> {}</p>",
        Utc::now().to_rfc3339()
    ));
    body.push_str(&session_details(ctx));

    body.push_str("<h3>Contact Information Collected</h3><ul>");
    for (label, role) in [
        ("Student Email", Role::Student),
        ("Teacher Email", Role::Teacher),
        ("Parent Email", Role::Parent),
    ] {
        body.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>",
            label,
            job.email_for(role).unwrap_or("Not provided")
        ));
    }
    let numbers: Vec<&str> = Role::MESSAGE_ORDER
        .iter()
        .filter_map(|role| job.phone_for(*role))
        .collect();
    body.push_str(&format!(
        "<li><strong>WhatsApp Numbers:</strong> {}</li></ul>",
        if numbers.is_empty() {
            "None provided".to_string()
        } else {
            numbers.join(", ")
        }
    ));

    if let Some(excerpt) = ctx.source_excerpt.as_deref() {
        body.push_str("<h3>Educational Content Used</h3>");
        body.push_str(&format!("<p>{}</p>", excerpt));
    }

    body.push_str("<h3>Generated Materials</h3>");
    body.push_str(FULL_PACKAGE_LIST);
    body.push_str("<p>Complete session data recorded and distributed successfully.</p>");
    body
}

fn company_email_body(ctx: &JobContext) -> String {
    format!(
        "<h2>Complete Educational Package Generated</h2>{}<h3>Package Contents</h3>{}<p>All materials have been distributed according to your settings.</p><p><strong>Generated by Genius Educational Software</strong></p>",
        session_details(ctx),
        FULL_PACKAGE_LIST,
    )
}

fn teacher_email_body(ctx: &JobContext) -> String {
    format!(
        "<h2>Teaching Materials Ready</h2><p>Dear Teacher,</p><p>Here are the teaching materials for <strong>{}</strong>:</p><h3>Attached Materials</h3><ul><li>Student Quiz Answers (for grading)</li><li>Study Notes (teaching context)</li><li>Answer Key (grading guide)</li><li>Lesson Plan (structured approach)</li></ul>{}<p>Best regards,<br><strong>Genius Educational Software</strong></p>",
        ctx.subject_or_default(),
        session_details(ctx),
    )
}

fn parent_email_body(ctx: &JobContext) -> String {
    format!(
        "<h2>Your Child's Quiz Results</h2><p>Dear Parent,</p><p>Your child has completed a quiz in <strong>{}</strong>.</p><h3>Attached Documents</h3><ul><li>Quiz Answers (your child's responses)</li><li>Answer Key (to help review with your child)</li><li>Study Plan (for continued learning)</li></ul>{}<p>Use the answer key to help your child understand any mistakes and learn from them.</p><p>Best regards,<br><strong>Genius Educational Software</strong></p>",
        ctx.subject_or_default(),
        session_details(ctx),
    )
}

fn student_email_body(ctx: &JobContext) -> String {
    format!(
        "<h2>Your Quiz Results</h2><p>Hello!</p><p>Here are your answers for the <strong>{}</strong> quiz you just completed.</p><h3>What's Attached</h3><ul><li>Your quiz responses for review</li><li>Study plan for continued learning</li></ul>{}<p>Review your answers and discuss any questions with your teacher or parents.</p><p>Keep learning!<br><strong>Genius Educational Software</strong></p>",
        ctx.subject_or_default(),
        session_details(ctx),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{DocumentSet, RoleContact};

    fn job() -> DeliveryJob {
        DeliveryJob::new(
            vec![
                (
                    Role::Recorder,
                    RoleContact {
                        email: Some("recorder@test.com".to_string()),
                        phone: None,
                    },
                ),
                (
                    Role::Teacher,
                    RoleContact {
                        email: Some("teacher@school.org".to_string()),
                        phone: Some("+264811111111".to_string()),
                    },
                ),
            ],
            DocumentSet::new(),
            JobContext {
                school: Some("Windhoek Primary".to_string()),
                subject: Some("Maths".to_string()),
                grade: Some("5".to_string()),
                source_excerpt: Some("Fractions are parts of a whole.".to_string()),
            },
        )
    }

    #[test]
    fn test_subjects_are_role_specific() {
        let ctx = job().context.clone();
        assert!(email_subject(Role::Recorder, &ctx).starts_with("Data Recording - Maths"));
        assert_eq!(email_subject(Role::Teacher, &ctx), "Teaching Materials - Maths");
        assert_eq!(email_subject(Role::Student, &ctx), "Your Quiz Results - Maths");
    }

    #[test]
    fn test_recorder_body_lists_contacts_and_content() {
        let body = email_body(Role::Recorder, &job());
        assert!(body.contains("teacher@school.org"));
        assert!(body.contains("Not provided"));
        assert!(body.contains("+264811111111"));
        assert!(body.contains("Fractions are parts of a whole."));
    }

    #[test]
    fn test_message_bodies_point_at_email() {
        let job = job();
        let teacher = message_body(Role::Teacher, &job);
        assert!(teacher.contains("Subject: Maths"));
        assert!(teacher.contains("Check your email: teacher@school.org"));

        // Roles without a configured email still get a generic pointer.
        let parent = message_body(Role::Parent, &job);
        assert!(parent.ends_with("Check your email."));
    }

    #[test]
    fn test_bodies_fall_back_when_context_is_empty() {
        let empty = DeliveryJob::new(vec![], DocumentSet::new(), JobContext::default());
        let body = email_body(Role::Company, &empty);
        assert!(body.contains("<strong>School:</strong> Not specified"));
        assert!(body.contains("<strong>Subject:</strong> Quiz"));
    }
}
