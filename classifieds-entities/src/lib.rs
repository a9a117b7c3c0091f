#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # classifieds-entities
//!
//! Reusable, agnostic domain entities of the classifieds platform.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod ad;
pub mod category;
pub mod id;
pub mod location;
pub mod moderation;
pub mod time;
pub mod user;
pub mod version;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
