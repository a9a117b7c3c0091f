use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubcategory {
    pub name: String,
    pub description: String,
    pub category_id: Id,
}

impl AutoCorrect for NewSubcategory {
    fn auto_correct(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ..self
        }
    }
}

fn validate_new_subcategory(subcategory: NewSubcategory) -> Result<NewSubcategory> {
    let subcategory = subcategory.auto_correct();
    if subcategory.name.is_empty() {
        return Err(ValidationError::Name.into());
    }
    // The backend never assigns 0
    if subcategory.category_id.value() == 0 {
        return Err(ValidationError::Category.into());
    }
    Ok(subcategory)
}

pub fn list_subcategories<G>(gateway: &G) -> Result<Vec<Subcategory>>
where
    G: CategoryGateway,
{
    Ok(gateway.all_subcategories()?)
}

pub fn create_subcategory<G>(gateway: &G, subcategory: NewSubcategory) -> Result<Subcategory>
where
    G: CategoryGateway,
{
    let subcategory = validate_new_subcategory(subcategory)?;
    let created = gateway.create_subcategory(&subcategory)?;
    log::info!("Created subcategory {} '{}'", created.id, created.name);
    Ok(created)
}

pub fn update_subcategory<G>(gateway: &G, id: Id, subcategory: NewSubcategory) -> Result<Subcategory>
where
    G: CategoryGateway,
{
    let subcategory = validate_new_subcategory(subcategory)?;
    let updated = gateway.update_subcategory(id, &subcategory)?;
    log::info!("Updated subcategory {} '{}'", updated.id, updated.name);
    Ok(updated)
}
