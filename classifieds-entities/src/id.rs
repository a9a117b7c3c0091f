use std::{fmt, num::ParseIntError, str::FromStr};

pub type IdValue = u64;

/// Numeric identifier assigned by the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(IdValue);

impl Id {
    pub const fn new(value: IdValue) -> Self {
        Self(value)
    }

    pub const fn value(self) -> IdValue {
        self.0
    }
}

impl From<IdValue> for Id {
    fn from(from: IdValue) -> Self {
        Self(from)
    }
}

impl From<Id> for IdValue {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
