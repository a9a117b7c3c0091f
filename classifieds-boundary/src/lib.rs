use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
}

const fn active_by_default() -> bool {
    true
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id         : String,
    pub first_name : String,
    pub last_name  : String,
    #[serde(default)]
    pub email      : String,
    #[serde(default = "active_by_default")]
    pub is_active  : bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role       : Option<Role>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at : Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at : Option<OffsetDateTime>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct AdVersion {
    pub id               : u64,
    pub version_number   : u64,
    pub title            : String,
    #[serde(default)]
    pub description      : String,
    pub price            : f64,
    pub status           : ModerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderator        : Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason : Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at       : OffsetDateTime,
}

/// Reference to a category or subcategory.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct CategoryRef {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Country {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct City {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub country: Country,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id          : u64,
    pub user        : User,
    pub category    : CategoryRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory : Option<CategoryRef>,
    pub city        : City,
    #[serde(default = "active_by_default")]
    pub is_active   : bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at  : OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at  : Option<OffsetDateTime>,
    #[serde(default)]
    pub versions    : Vec<AdVersion>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<Subcategory>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Subcategory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct NewSubcategory {
    pub name: String,
    pub description: String,
    pub category_id: u64,
}

/// Body of a moderation request.
///
/// The rejection reason is only sent along with a rejection.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[serde(rename_all = "camelCase")]
pub struct ModerateAdVersion {
    pub status: ModerationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// A single message or a list of messages, e.g. one per invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Single(msg) => f.write_str(msg),
            Self::Multiple(msgs) => f.write_str(&msgs.join("; ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct Error {
    #[serde(default)]
    pub status_code: u16,
    pub message: ErrorMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
