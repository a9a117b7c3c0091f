//! # classifieds-core
//!
//! Business logic of the classifieds admin client:
//! resolving the current version of an ad, moderating
//! pending versions and the use cases of the dashboard.
//!
//! The backend is only accessed through the traits in [`gateways`].

pub mod gateways;
pub mod moderation;
pub mod usecases;
pub mod util;
pub mod version;

pub mod entities {
    pub use classifieds_entities::{
        ad::*, category::*, id::*, location::*, moderation::*, time::*, user::*, version::*,
    };
}
