use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::delivery::{DocumentKind, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Message,
}

/// One planned single-recipient delivery attempt over one channel.
#[derive(Clone, Debug)]
pub struct ChannelTarget {
    pub kind: ChannelKind,
    pub role: Role,
    pub address: String,
    pub documents: Vec<DocumentKind>,
    pub subject: Option<String>,
    pub body: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// The result of one attempt. Always produced, never raised.
#[derive(Clone, Debug)]
pub struct DeliveryOutcome {
    pub role: Role,
    pub kind: ChannelKind,
    pub address: String,
    pub status: DeliveryStatus,
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn sent(target: &ChannelTarget) -> Self {
        Self {
            role: target.role,
            kind: target.kind,
            address: target.address.clone(),
            status: DeliveryStatus::Sent,
            error: None,
        }
    }

    pub fn failed(target: &ChannelTarget, error: impl Into<String>) -> Self {
        Self {
            role: target.role,
            kind: target.kind,
            address: target.address.clone(),
            status: DeliveryStatus::Failed,
            error: Some(error.into()),
        }
    }

    fn channel_noun(&self) -> &'static str {
        match self.kind {
            ChannelKind::Email => "email",
            ChannelKind::Message => "WhatsApp",
        }
    }

    /// Human-readable log line, e.g. "Teacher email sent to t@school.org".
    pub fn descriptor(&self) -> String {
        match self.status {
            DeliveryStatus::Sent => format!(
                "{} {} sent to {}",
                self.role.descriptor(),
                self.channel_noun(),
                self.address
            ),
            DeliveryStatus::Failed => format!(
                "{} {} failed: {}",
                self.role.descriptor(),
                self.channel_noun(),
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// Aggregate of all outcomes for one job. The dispatcher returns this even
/// when every attempt failed.
#[derive(Clone, Debug)]
pub struct DispatchReport {
    pub outcomes: Vec<DeliveryOutcome>,
    pub generated_at: DateTime<Utc>,
}

impl DispatchReport {
    pub fn new(outcomes: Vec<DeliveryOutcome>) -> Self {
        Self {
            outcomes,
            generated_at: Utc::now(),
        }
    }

    pub fn sent_emails(&self) -> Vec<String> {
        self.bucket(ChannelKind::Email, DeliveryStatus::Sent)
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.bucket(ChannelKind::Message, DeliveryStatus::Sent)
    }

    pub fn failures(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| o.status == DeliveryStatus::Failed)
            .map(DeliveryOutcome::descriptor)
            .collect()
    }

    fn bucket(&self, kind: ChannelKind, status: DeliveryStatus) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| o.kind == kind && o.status == status)
            .map(DeliveryOutcome::descriptor)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(role: Role, kind: ChannelKind) -> ChannelTarget {
        ChannelTarget {
            kind,
            role,
            address: "someone@example.com".to_string(),
            documents: vec![],
            subject: None,
            body: String::new(),
        }
    }

    #[test]
    fn descriptors_name_the_role_and_channel() {
        let sent = DeliveryOutcome::sent(&target(Role::Teacher, ChannelKind::Email));
        assert_eq!(sent.descriptor(), "Teacher email sent to someone@example.com");

        let failed = DeliveryOutcome::failed(
            &target(Role::Parent, ChannelKind::Message),
            "number unreachable",
        );
        assert_eq!(failed.descriptor(), "Parent WhatsApp failed: number unreachable");
    }

    #[test]
    fn report_partitions_outcomes_by_kind_and_status() {
        let report = DispatchReport::new(vec![
            DeliveryOutcome::sent(&target(Role::Recorder, ChannelKind::Email)),
            DeliveryOutcome::failed(&target(Role::Teacher, ChannelKind::Email), "rejected"),
            DeliveryOutcome::sent(&target(Role::Student, ChannelKind::Message)),
        ]);

        assert_eq!(report.sent_emails().len(), 1);
        assert_eq!(report.sent_messages().len(), 1);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.outcomes.len(), 3);
    }
}
