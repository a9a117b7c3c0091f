use crate::id::Id;

/// Lightweight reference to a category or subcategory,
/// as embedded in other entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub category: Option<CategoryRef>,
}

impl From<&Category> for CategoryRef {
    fn from(from: &Category) -> Self {
        Self {
            id: from.id,
            name: from.name.clone(),
        }
    }
}

impl From<&Subcategory> for CategoryRef {
    fn from(from: &Subcategory) -> Self {
        Self {
            id: from.id,
            name: from.name.clone(),
        }
    }
}
