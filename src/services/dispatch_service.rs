use std::sync::Arc;

use crate::{
    channels::{EmailAttachment, EmailChannel, MessageChannel, OutboundEmail},
    config::Config,
    models::domain::{
        ChannelKind, ChannelTarget, DeliveryJob, DeliveryOutcome, DispatchReport, DocumentKind,
        Role,
    },
    services::templates,
};

/// Which documents each role receives by email. Message targets never carry
/// attachments.
pub fn attachment_policy(role: Role) -> &'static [DocumentKind] {
    match role {
        Role::Recorder | Role::Company => &DocumentKind::ALL,
        Role::Teacher => &[
            DocumentKind::Answers,
            DocumentKind::StudyNotes,
            DocumentKind::AnswerKey,
            DocumentKind::LessonPlan,
        ],
        Role::Parent => &[
            DocumentKind::Answers,
            DocumentKind::AnswerKey,
            DocumentKind::StudyPlan,
        ],
        Role::Student => &[DocumentKind::Answers, DocumentKind::StudyPlan],
    }
}

/// Best-effort multi-target fan-out dispatcher. Computes the target list for
/// a job, attempts each delivery in a fixed order, and aggregates outcomes.
/// One target's failure never aborts or affects another target's attempt.
pub struct DispatchService {
    email: Arc<dyn EmailChannel>,
    message: Arc<dyn MessageChannel>,
    sender_email: String,
}

impl DispatchService {
    pub fn new(
        email: Arc<dyn EmailChannel>,
        message: Arc<dyn MessageChannel>,
        config: &Config,
    ) -> Self {
        Self {
            email,
            message,
            sender_email: config.sender_email.clone(),
        }
    }

    /// Attempts every planned target and returns the aggregated report.
    /// Infallible as a whole: total delivery failure still yields a report.
    pub async fn dispatch(&self, job: &DeliveryJob) -> DispatchReport {
        let targets = self.plan_targets(job);
        log::info!("Dispatching {} delivery targets", targets.len());

        let mut outcomes = Vec::with_capacity(targets.len());
        for target in &targets {
            let outcome = self.attempt(job, target).await;
            match &outcome.error {
                None => log::info!("{}", outcome.descriptor()),
                Some(_) => log::error!("{}", outcome.descriptor()),
            }
            outcomes.push(outcome);
        }

        DispatchReport::new(outcomes)
    }

    /// Builds the full target list: one email target per role with a
    /// configured address (recorder first, company skipped when it shares
    /// the recorder's address), then one message target per role with a
    /// configured phone number.
    pub fn plan_targets(&self, job: &DeliveryJob) -> Vec<ChannelTarget> {
        let recorder_email = job.email_for(Role::Recorder);
        let mut targets = Vec::new();

        for role in Role::EMAIL_ORDER {
            let Some(address) = job.email_for(role) else {
                continue;
            };
            if role == Role::Company && Some(address) == recorder_email {
                continue;
            }
            targets.push(ChannelTarget {
                kind: ChannelKind::Email,
                role,
                address: address.to_string(),
                documents: attachment_policy(role).to_vec(),
                subject: Some(templates::email_subject(role, &job.context)),
                body: templates::email_body(role, job),
            });
        }

        for role in Role::MESSAGE_ORDER {
            let Some(address) = job.phone_for(role) else {
                continue;
            };
            targets.push(ChannelTarget {
                kind: ChannelKind::Message,
                role,
                address: address.to_string(),
                documents: Vec::new(),
                subject: None,
                body: templates::message_body(role, job),
            });
        }

        targets
    }

    /// One adapter call, captured as an outcome. Never propagates the error.
    async fn attempt(&self, job: &DeliveryJob, target: &ChannelTarget) -> DeliveryOutcome {
        let result = match target.kind {
            ChannelKind::Email => {
                let attachments: Vec<EmailAttachment> = target
                    .documents
                    .iter()
                    .filter_map(|kind| job.documents.get(*kind))
                    .map(|doc| EmailAttachment {
                        filename: doc.filename.clone(),
                        content: doc.content.clone(),
                        mime_type: doc.mime_type.clone(),
                    })
                    .collect();

                self.email
                    .send(OutboundEmail {
                        to: target.address.clone(),
                        from: self.sender_email.clone(),
                        subject: target.subject.clone().unwrap_or_default(),
                        html_body: target.body.clone(),
                        attachments,
                    })
                    .await
            }
            ChannelKind::Message => self.message.send(&target.address, &target.body).await,
        };

        match result {
            Ok(()) => DeliveryOutcome::sent(target),
            Err(e) => DeliveryOutcome::failed(target, e.to_string()),
        }
    }
}
