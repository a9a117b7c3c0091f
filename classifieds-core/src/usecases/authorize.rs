use super::prelude::*;

/// Only active managers are allowed to use the admin client.
pub fn authorize_manager(user: &User) -> Result<()> {
    if !user.is_manager() {
        log::warn!("User {} is not a manager", user.id);
        return Err(Error::Unauthorized);
    }
    if !user.is_active {
        log::warn!("The account of manager {} is deactivated", user.id);
        return Err(Error::Unauthorized);
    }
    Ok(())
}
