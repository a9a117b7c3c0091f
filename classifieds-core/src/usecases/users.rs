use super::prelude::*;

/// Editable attributes of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl AutoCorrect for UpdateUser {
    fn auto_correct(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            ..self
        }
    }
}

impl From<&User> for UpdateUser {
    fn from(from: &User) -> Self {
        Self {
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
            is_active: from.is_active,
        }
    }
}

pub fn list_users<G>(gateway: &G) -> Result<Vec<User>>
where
    G: UserGateway,
{
    let users = gateway.all_users()?;
    log::debug!("Loaded {} users", users.len());
    Ok(users)
}

pub fn get_user<G>(gateway: &G, id: &UserId) -> Result<User>
where
    G: UserGateway,
{
    Ok(gateway.get_user(id)?)
}

pub fn update_user<G>(gateway: &G, id: &UserId, update: UpdateUser) -> Result<User>
where
    G: UserGateway,
{
    let update = update.auto_correct();
    if update.first_name.is_empty() {
        return Err(ValidationError::FirstName.into());
    }
    if update.last_name.is_empty() {
        return Err(ValidationError::LastName.into());
    }
    let user = gateway.update_user(id, &update)?;
    log::info!(
        "Updated user {} ({}, active: {})",
        user.id,
        user.full_name(),
        user.is_active
    );
    Ok(user)
}
