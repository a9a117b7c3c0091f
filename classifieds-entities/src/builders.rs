pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{ad_builder::*, ad_version_builder::*, user_builder::*};

pub mod ad_version_builder {

    use super::*;
    use crate::{ad::*, moderation::*, time::*, user::*, version::*};

    #[derive(Debug)]
    pub struct AdVersionBuild {
        version: AdVersion,
    }

    impl AdVersionBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.version.id = id.into();
            self
        }
        pub fn version_number(mut self, v: u64) -> Self {
            self.version.version_number = v.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.version.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.version.description = desc.into();
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.version.price = price;
            self
        }
        pub fn pending(mut self) -> Self {
            self.version.status = ModerationStatus::Pending;
            self.version.moderator = None;
            self.version.rejection_reason = None;
            self
        }
        pub fn approved_by(mut self, moderator: User) -> Self {
            self.version.status = ModerationStatus::Approved;
            self.version.moderator = Some(moderator);
            self.version.rejection_reason = None;
            self
        }
        pub fn rejected_by(mut self, moderator: User, reason: &str) -> Self {
            self.version.status = ModerationStatus::Rejected;
            self.version.moderator = Some(moderator);
            self.version.rejection_reason = Some(reason.into());
            self
        }
        // Sets the bare status without touching moderator or reason
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.version.status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.version.created_at = created_at;
            self
        }
        pub fn finish(self) -> AdVersion {
            self.version
        }
    }

    impl Builder for AdVersion {
        type Build = AdVersionBuild;
        fn build() -> AdVersionBuild {
            AdVersionBuild {
                version: AdVersion {
                    id: 1.into(),
                    version_number: VersionNumber::initial(),
                    title: "".into(),
                    description: "".into(),
                    price: 0.0,
                    status: ModerationStatus::default(),
                    moderator: None,
                    rejection_reason: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod ad_builder {

    use super::*;
    use crate::{ad::*, category::*, location::*, time::*, user::*};

    #[derive(Debug)]
    pub struct AdBuild {
        ad: Ad,
    }

    impl AdBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.ad.id = id.into();
            self
        }
        pub fn user(mut self, user: User) -> Self {
            self.ad.user = user;
            self
        }
        pub fn category(mut self, id: u64, name: &str) -> Self {
            self.ad.category = CategoryRef {
                id: id.into(),
                name: name.into(),
            };
            self
        }
        pub fn subcategory(mut self, id: u64, name: &str) -> Self {
            self.ad.subcategory = Some(CategoryRef {
                id: id.into(),
                name: name.into(),
            });
            self
        }
        pub fn city(mut self, name: &str, country: &str) -> Self {
            self.ad.city.name = name.into();
            self.ad.city.country.name = country.into();
            self
        }
        pub fn versions(mut self, versions: Vec<AdVersion>) -> Self {
            self.ad.versions = versions;
            self
        }
        pub fn version(mut self, version: AdVersion) -> Self {
            self.ad.versions.push(version);
            self
        }
        pub fn finish(self) -> Ad {
            self.ad
        }
    }

    impl Builder for Ad {
        type Build = AdBuild;
        fn build() -> AdBuild {
            AdBuild {
                ad: Ad {
                    id: 1.into(),
                    user: User::build().finish(),
                    category: CategoryRef {
                        id: 1.into(),
                        name: "Miscellaneous".into(),
                    },
                    subcategory: None,
                    city: City {
                        id: 1.into(),
                        name: "Berlin".into(),
                        country: Country {
                            name: "Germany".into(),
                        },
                    },
                    is_active: true,
                    created_at: Timestamp::now(),
                    updated_at: None,
                    versions: vec![],
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::user::*;

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, first_name: &str, last_name: &str) -> Self {
            self.user.first_name = first_name.into();
            self.user.last_name = last_name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        pub fn active(mut self, is_active: bool) -> Self {
            self.user.is_active = is_active;
            self
        }
        pub fn role(mut self, name: &str) -> Self {
            self.user.role = Some(Role { name: name.into() });
            self
        }
        pub fn manager(mut self) -> Self {
            self.user.role = Some(Role::manager());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: "user".into(),
                    first_name: "".into(),
                    last_name: "".into(),
                    email: "user@example.com".into(),
                    is_active: true,
                    role: None,
                    created_at: None,
                    updated_at: None,
                },
            }
        }
    }
}
