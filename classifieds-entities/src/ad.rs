use crate::{
    category::CategoryRef, id::Id, location::City, moderation::ModerationStatus, time::Timestamp,
    user::User, version::VersionNumber,
};

/// One revision of the content of an ad.
#[derive(Debug, Clone, PartialEq)]
pub struct AdVersion {
    pub id: Id,
    pub version_number: VersionNumber,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub status: ModerationStatus,
    // Only set if the version has been moderated
    pub moderator: Option<User>,
    // Only set if the version has been rejected
    pub rejection_reason: Option<String>,
    pub created_at: Timestamp,
}

impl AdVersion {
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

/// A classified listing together with its version history.
#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: Id,
    pub user: User,
    pub category: CategoryRef,
    pub subcategory: Option<CategoryRef>,
    pub city: City,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub versions: Vec<AdVersion>,
}

impl Ad {
    pub fn version(&self, id: Id) -> Option<&AdVersion> {
        self.versions.iter().find(|v| v.id == id)
    }

    pub fn version_mut(&mut self, id: Id) -> Option<&mut AdVersion> {
        self.versions.iter_mut().find(|v| v.id == id)
    }

    /// Human readable category path, e.g. `Vehicles > Cars`.
    pub fn category_path(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{} > {}", self.category.name, sub.name),
            None => self.category.name.clone(),
        }
    }
}
