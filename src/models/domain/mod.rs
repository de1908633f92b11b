pub mod delivery;
pub mod dispatch;
pub mod quiz;

pub use delivery::{DeliveryJob, DocumentKind, DocumentSet, JobContext, RenderedDocument, Role, RoleContact};
pub use dispatch::{ChannelKind, ChannelTarget, DeliveryOutcome, DeliveryStatus, DispatchReport};
pub use quiz::{Quiz, QuizMetadata, QuizQuestion};
