//! Resolution of the current version of an ad.
//!
//! An ad accumulates versions over time and each version carries
//! its own moderation status. The *current* version is the one that
//! is displayed and acted upon:
//!
//! 1. the most recent pending version, i.e. an edit that awaits moderation,
//! 2. otherwise the most recent approved version, i.e. the public state,
//! 3. otherwise the most recent rejected version.
//!
//! "Most recent" always refers to the highest [`VersionNumber`],
//! never to the position within the collection.

use thiserror::Error;

use crate::entities::*;

/// Violated invariants of an ad and its versions.
///
/// These are data or programming errors that should never
/// occur given the lifecycle rules of ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("The ad has no versions")]
    NoVersions,
    #[error("None of the versions is pending, approved or rejected")]
    NoResolvableVersion,
    #[error("The ad has no version with id {0}")]
    UnknownVersion(Id),
}

const RESOLUTION_ORDER: [ModerationStatus; 3] = [
    ModerationStatus::Pending,
    ModerationStatus::Approved,
    ModerationStatus::Rejected,
];

pub fn resolve_current_version(versions: &[AdVersion]) -> Result<&AdVersion, InvalidState> {
    if versions.is_empty() {
        return Err(InvalidState::NoVersions);
    }
    RESOLUTION_ORDER
        .into_iter()
        .find_map(|status| latest_version_with_status(versions, status))
        .ok_or(InvalidState::NoResolvableVersion)
}

pub fn current_version(ad: &Ad) -> Result<&AdVersion, InvalidState> {
    resolve_current_version(&ad.versions).inspect_err(|err| {
        log::error!("Unable to resolve the current version of ad {}: {err}", ad.id);
    })
}

fn latest_version_with_status(
    versions: &[AdVersion],
    status: ModerationStatus,
) -> Option<&AdVersion> {
    versions
        .iter()
        .filter(|v| v.status == status)
        .max_by_key(|v| v.version_number)
}
