use std::collections::HashSet;

use thiserror::Error;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdVersionInvalidation {
    #[error("Moderated version {0} without moderator")]
    MissingModerator(VersionNumber),
    #[error("Pending version {0} with moderator")]
    UnexpectedModerator(VersionNumber),
    #[error("Rejected version {0} without rejection reason")]
    MissingRejectionReason(VersionNumber),
    #[error("Version {0} with rejection reason but not rejected")]
    UnexpectedRejectionReason(VersionNumber),
}

impl Validate for AdVersion {
    type Error = AdVersionInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let nr = self.version_number;
        match (self.status, &self.moderator) {
            (ModerationStatus::Pending, Some(_)) => {
                return Err(Self::Error::UnexpectedModerator(nr));
            }
            (ModerationStatus::Approved | ModerationStatus::Rejected, None) => {
                return Err(Self::Error::MissingModerator(nr));
            }
            _ => {}
        }
        let has_reason = self.rejection_reason.as_deref().is_some_and(|r| !is_blank(r));
        match self.status {
            ModerationStatus::Rejected if !has_reason => {
                Err(Self::Error::MissingRejectionReason(nr))
            }
            ModerationStatus::Pending | ModerationStatus::Approved
                if self.rejection_reason.is_some() =>
            {
                Err(Self::Error::UnexpectedRejectionReason(nr))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdInvalidation {
    #[error("The ad has no versions")]
    NoVersions,
    #[error("Version number {0} is used more than once")]
    DuplicateVersionNumber(VersionNumber),
    #[error("More than one version is pending")]
    MultiplePendingVersions,
    #[error(transparent)]
    Version(#[from] AdVersionInvalidation),
}

impl Validate for Ad {
    type Error = AdInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.versions.is_empty() {
            return Err(Self::Error::NoVersions);
        }
        let mut version_numbers = HashSet::with_capacity(self.versions.len());
        for v in &self.versions {
            if !version_numbers.insert(v.version_number) {
                return Err(Self::Error::DuplicateVersionNumber(v.version_number));
            }
        }
        if self.versions.iter().filter(|v| v.is_pending()).count() > 1 {
            return Err(Self::Error::MultiplePendingVersions);
        }
        for v in &self.versions {
            v.validate()?;
        }
        Ok(())
    }
}

/// Logs inconsistencies of data that has been received from the backend.
///
/// The backend is authoritative, so the data is not rejected.
pub fn warn_if_invalid(ad: &Ad) {
    if let Err(err) = ad.validate() {
        log::warn!("Inconsistent ad {}: {err}", ad.id);
    }
}
