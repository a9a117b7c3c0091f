use super::*;
use classifieds_entities as e;

impl From<e::moderation::ModerationStatus> for ModerationStatus {
    fn from(from: e::moderation::ModerationStatus) -> Self {
        use e::moderation::ModerationStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<ModerationStatus> for e::moderation::ModerationStatus {
    fn from(from: ModerationStatus) -> Self {
        use ModerationStatus::*;
        match from {
            Pending => Self::Pending,
            Approved => Self::Approved,
            Rejected => Self::Rejected,
        }
    }
}

impl From<Role> for e::user::Role {
    fn from(from: Role) -> Self {
        Self { name: from.name }
    }
}

impl From<e::user::Role> for Role {
    fn from(from: e::user::Role) -> Self {
        Self {
            id: None,
            name: from.name,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            is_active,
            role,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            is_active,
            role: role.map(Into::into),
            created_at: created_at.map(Into::into),
            updated_at: updated_at.map(Into::into),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            first_name,
            last_name,
            email,
            is_active,
            role,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            is_active,
            role: role.map(Into::into),
            created_at: created_at.map(Into::into),
            updated_at: updated_at.map(Into::into),
        }
    }
}

impl From<CategoryRef> for e::category::CategoryRef {
    fn from(from: CategoryRef) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<e::category::CategoryRef> for CategoryRef {
    fn from(from: e::category::CategoryRef) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl From<City> for e::location::City {
    fn from(from: City) -> Self {
        let City { id, name, country } = from;
        Self {
            id: id.into(),
            name,
            country: e::location::Country { name: country.name },
        }
    }
}

impl From<e::location::City> for City {
    fn from(from: e::location::City) -> Self {
        let e::location::City { id, name, country } = from;
        Self {
            id: id.into(),
            name,
            country: Country { name: country.name },
        }
    }
}

impl From<AdVersion> for e::ad::AdVersion {
    fn from(from: AdVersion) -> Self {
        let AdVersion {
            id,
            version_number,
            title,
            description,
            price,
            status,
            moderator,
            rejection_reason,
            created_at,
        } = from;
        Self {
            id: id.into(),
            version_number: version_number.into(),
            title,
            description,
            price,
            status: status.into(),
            moderator: moderator.map(Into::into),
            rejection_reason,
            created_at: created_at.into(),
        }
    }
}

impl From<e::ad::AdVersion> for AdVersion {
    fn from(from: e::ad::AdVersion) -> Self {
        let e::ad::AdVersion {
            id,
            version_number,
            title,
            description,
            price,
            status,
            moderator,
            rejection_reason,
            created_at,
        } = from;
        Self {
            id: id.into(),
            version_number: version_number.into(),
            title,
            description,
            price,
            status: status.into(),
            moderator: moderator.map(Into::into),
            rejection_reason,
            created_at: created_at.into(),
        }
    }
}

impl From<Ad> for e::ad::Ad {
    fn from(from: Ad) -> Self {
        let Ad {
            id,
            user,
            category,
            subcategory,
            city,
            is_active,
            created_at,
            updated_at,
            versions,
        } = from;
        Self {
            id: id.into(),
            user: user.into(),
            category: category.into(),
            subcategory: subcategory.map(Into::into),
            city: city.into(),
            is_active,
            created_at: created_at.into(),
            updated_at: updated_at.map(Into::into),
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::ad::Ad> for Ad {
    fn from(from: e::ad::Ad) -> Self {
        let e::ad::Ad {
            id,
            user,
            category,
            subcategory,
            city,
            is_active,
            created_at,
            updated_at,
            versions,
        } = from;
        Self {
            id: id.into(),
            user: user.into(),
            category: category.into(),
            subcategory: subcategory.map(Into::into),
            city: city.into(),
            is_active,
            created_at: created_at.into(),
            updated_at: updated_at.map(Into::into),
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Subcategory> for e::category::Subcategory {
    fn from(from: Subcategory) -> Self {
        let Subcategory {
            id,
            name,
            description,
            category,
        } = from;
        Self {
            id: id.into(),
            name,
            description: description.unwrap_or_default(),
            category: category.map(Into::into),
        }
    }
}

impl From<e::category::Subcategory> for Subcategory {
    fn from(from: e::category::Subcategory) -> Self {
        let e::category::Subcategory {
            id,
            name,
            description,
            category,
        } = from;
        Self {
            id: id.into(),
            name,
            description: Some(description),
            category: category.map(Into::into),
        }
    }
}

impl From<Category> for e::category::Category {
    fn from(from: Category) -> Self {
        let Category {
            id,
            name,
            description,
            subcategories,
        } = from;
        let category = e::category::CategoryRef {
            id: id.into(),
            name: name.clone(),
        };
        let subcategories = subcategories
            .unwrap_or_default()
            .into_iter()
            .map(|s| {
                let mut s = e::category::Subcategory::from(s);
                // Nested subcategories don't repeat their parent
                s.category.get_or_insert_with(|| category.clone());
                s
            })
            .collect();
        Self {
            id: id.into(),
            name,
            description: description.unwrap_or_default(),
            subcategories,
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            name,
            description,
            subcategories,
        } = from;
        Self {
            id: id.into(),
            name,
            description: Some(description),
            subcategories: Some(subcategories.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> &'static str {
        r#"{
            "id": "c0ffee",
            "firstName": "Mia",
            "lastName": "Manager",
            "email": "mia@example.com",
            "isActive": true,
            "role": { "id": 1, "name": "manager" },
            "createdAt": "2025-04-17T08:15:42.123Z"
        }"#
    }

    #[test]
    fn convert_user_into_entity() {
        let user: User = serde_json::from_str(user_json()).unwrap();
        let user = e::user::User::from(user);
        assert_eq!("c0ffee", user.id.as_str());
        assert!(user.is_manager());
        assert_eq!(
            Some(1_744_877_742),
            user.created_at.map(e::time::Timestamp::into_seconds)
        );
        assert_eq!(None, user.updated_at);
    }

    #[test]
    fn convert_status_in_both_directions() {
        for status in [
            ModerationStatus::Pending,
            ModerationStatus::Approved,
            ModerationStatus::Rejected,
        ] {
            let entity = e::moderation::ModerationStatus::from(status);
            assert_eq!(status, ModerationStatus::from(entity));
        }
        assert_eq!(
            e::moderation::ModerationStatus::Rejected,
            ModerationStatus::Rejected.into()
        );
    }

    #[test]
    fn nested_subcategories_refer_to_their_category() {
        let category: Category = serde_json::from_str(
            r#"{"id":4,"name":"Jobs","subcategories":[{"id":41,"name":"IT","description":"Software"}]}"#,
        )
        .unwrap();
        let category = e::category::Category::from(category);
        assert_eq!("", category.description);
        let subcategory = &category.subcategories[0];
        assert_eq!("Software", subcategory.description);
        assert_eq!(
            Some(e::id::Id::new(4)),
            subcategory.category.as_ref().map(|c| c.id)
        );
    }

    #[test]
    fn convert_ad_into_entity() {
        let ad: Ad = serde_json::from_str(
            r#"{
                "id": 9,
                "user": { "id": "u1", "firstName": "Jane", "lastName": "Doe" },
                "category": { "id": 2, "name": "Furniture" },
                "city": { "id": 1, "name": "Berlin", "country": { "name": "Germany" } },
                "createdAt": "2025-03-01T10:00:00Z",
                "versions": [{
                    "id": 90,
                    "versionNumber": 1,
                    "title": "Oak table",
                    "price": 80,
                    "status": "rejected",
                    "rejectionReason": "Blurry photos",
                    "createdAt": "2025-03-01T10:00:00Z"
                }]
            }"#,
        )
        .unwrap();
        let ad = e::ad::Ad::from(ad);
        assert!(ad.is_active);
        assert_eq!(None, ad.subcategory);
        assert_eq!("Furniture", ad.category_path());
        let version = &ad.versions[0];
        assert_eq!(e::moderation::ModerationStatus::Rejected, version.status);
        assert_eq!(Some("Blurry photos"), version.rejection_reason.as_deref());
        assert!(version.version_number.is_initial());
    }
}
