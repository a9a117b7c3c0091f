use super::Result;
use crate::{entities::*, moderation::ModerationRequest};

pub trait AdGateway {
    fn all_ads(&self) -> Result<Vec<Ad>>;

    /// The ad including all of its versions.
    fn get_ad(&self, id: Id) -> Result<Ad>;

    /// Ads that have a version awaiting moderation.
    fn pending_ads(&self) -> Result<Vec<Ad>>;

    /// Returns the moderated version.
    ///
    /// Fails with [`Error::Conflict`](super::Error::Conflict) if
    /// the version has already been moderated.
    fn submit_moderation(&self, request: &ModerationRequest) -> Result<AdVersion>;
}
