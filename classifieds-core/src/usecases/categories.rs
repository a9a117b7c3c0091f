use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl AutoCorrect for NewCategory {
    fn auto_correct(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
        }
    }
}

fn validate_new_category(category: NewCategory) -> Result<NewCategory> {
    let category = category.auto_correct();
    if category.name.is_empty() {
        return Err(ValidationError::Name.into());
    }
    Ok(category)
}

pub fn list_categories<G>(gateway: &G) -> Result<Vec<Category>>
where
    G: CategoryGateway,
{
    Ok(gateway.all_categories()?)
}

pub fn create_category<G>(gateway: &G, category: NewCategory) -> Result<Category>
where
    G: CategoryGateway,
{
    let category = validate_new_category(category)?;
    let created = gateway.create_category(&category)?;
    log::info!("Created category {} '{}'", created.id, created.name);
    Ok(created)
}

pub fn update_category<G>(gateway: &G, id: Id, category: NewCategory) -> Result<Category>
where
    G: CategoryGateway,
{
    let category = validate_new_category(category)?;
    let updated = gateway.update_category(id, &category)?;
    log::info!("Updated category {} '{}'", updated.id, updated.name);
    Ok(updated)
}
