use std::fmt;

use crate::time::Timestamp;

/// Opaque user identifier, e.g. a UUID string.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for UserId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for UserId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<UserId> for String {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
}

impl Role {
    pub const NAME_MANAGER: &'static str = "manager";

    pub fn manager() -> Self {
        Self {
            name: Self::NAME_MANAGER.to_owned(),
        }
    }

    pub fn is_manager(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::NAME_MANAGER)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : UserId,
    pub first_name : String,
    pub last_name  : String,
    pub email      : String,
    pub is_active  : bool,
    pub role       : Option<Role>,
    pub created_at : Option<Timestamp>,
    pub updated_at : Option<Timestamp>,
}

impl User {
    pub fn full_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            ("", "") => self.email.clone(),
            (first, "") => first.to_owned(),
            ("", last) => last.to_owned(),
            (first, last) => format!("{first} {last}"),
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_manager)
    }
}
