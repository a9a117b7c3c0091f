use std::fmt;

use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: Id,
    pub name: String,
    pub country: Country,
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.country.name)
    }
}
