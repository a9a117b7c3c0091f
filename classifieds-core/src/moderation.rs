use crate::entities::*;

/// The decision of a moderator about a pending ad version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { reason: String },
}

impl Decision {
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
        }
    }

    /// The terminal status of the moderated version.
    pub const fn status(&self) -> ModerationStatus {
        match self {
            Self::Approve => ModerationStatus::Approved,
            Self::Reject { .. } => ModerationStatus::Rejected,
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::Approve => None,
            Self::Reject { reason } => Some(reason.as_str()),
        }
    }
}

/// A validated moderation request that is ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationRequest {
    pub ad_id: Id,
    pub version_id: Id,
    pub decision: Decision,
}
