use super::prelude::*;
use crate::{
    moderation::{Decision, ModerationRequest},
    version::{current_version, InvalidState},
};

/// Validates a moderation decision for the current version of an ad.
///
/// Nothing is sent to the backend. The resulting request always
/// refers to the pending version that has been resolved as the
/// current version of the ad.
pub fn prepare_moderation(ad: &Ad, decision: Decision) -> Result<ModerationRequest> {
    let decision = match decision {
        Decision::Approve => Decision::Approve,
        Decision::Reject { reason } => {
            if is_blank(&reason) {
                return Err(ValidationError::EmptyRejectionReason.into());
            }
            Decision::Reject {
                reason: reason.trim().to_owned(),
            }
        }
    };
    let version = current_version(ad)?;
    if !version.is_pending() {
        log::debug!(
            "Current version {} of ad {} is already {}",
            version.version_number,
            ad.id,
            version.status
        );
        return Err(ValidationError::NoPendingVersion.into());
    }
    Ok(ModerationRequest {
        ad_id: ad.id,
        version_id: version.id,
        decision,
    })
}

/// Moderates the pending version of an ad.
///
/// Returns the moderated version as confirmed by the backend.
/// A version that has already been moderated by someone else
/// results in [`Error::Conflict`]. The caller has to reload
/// the ad and decide again.
pub fn moderate_ad<G>(gateway: &G, ad: &Ad, decision: Decision) -> Result<AdVersion>
where
    G: AdGateway,
{
    let request = prepare_moderation(ad, decision)?;
    let status = request.decision.status();
    log::info!(
        "Moderating version {} of ad {}: {status}",
        request.version_id,
        request.ad_id
    );
    let version = gateway.submit_moderation(&request).inspect_err(|err| {
        log::warn!(
            "Failed to moderate version {} of ad {}: {err}",
            request.version_id,
            request.ad_id
        );
    })?;
    if version.id != request.version_id || version.status != status {
        log::warn!(
            "Unexpected moderation result for ad {}: version {} is {}",
            request.ad_id,
            version.id,
            version.status
        );
    }
    log::info!(
        "Version {} of ad {} has been {status}",
        version.version_number,
        request.ad_id
    );
    Ok(version)
}

/// Replaces the local copy of a moderated version.
pub fn merge_moderated_version(ad: &mut Ad, version: AdVersion) -> Result<()> {
    let Some(local) = ad.version_mut(version.id) else {
        return Err(InvalidState::UnknownVersion(version.id).into());
    };
    *local = version;
    Ok(())
}
