use super::prelude::*;
use crate::{util::validate::warn_if_invalid, version::current_version};

pub fn list_ads<G>(gateway: &G) -> Result<Vec<Ad>>
where
    G: AdGateway,
{
    let ads = gateway.all_ads()?;
    log::debug!("Loaded {} ads", ads.len());
    ads.iter().for_each(warn_if_invalid);
    Ok(ads)
}

pub fn get_ad<G>(gateway: &G, id: Id) -> Result<Ad>
where
    G: AdGateway,
{
    let ad = gateway.get_ad(id)?;
    warn_if_invalid(&ad);
    Ok(ad)
}

/// Ads with a current version that awaits moderation.
pub fn list_pending_ads<G>(gateway: &G) -> Result<Vec<Ad>>
where
    G: AdGateway,
{
    let ads = gateway.pending_ads()?;
    let count = ads.len();
    let mut pending_ads = Vec::with_capacity(count);
    for ad in ads {
        warn_if_invalid(&ad);
        if !current_version(&ad)?.is_pending() {
            log::warn!("Ignoring ad {} without pending version", ad.id);
            continue;
        }
        pending_ads.push(ad);
    }
    log::debug!("Loaded {} of {count} pending ads", pending_ads.len());
    Ok(pending_ads)
}
