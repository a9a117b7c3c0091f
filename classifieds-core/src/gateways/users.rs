use super::Result;
use crate::{entities::*, usecases::UpdateUser};

pub trait UserGateway {
    fn all_users(&self) -> Result<Vec<User>>;
    fn get_user(&self, id: &UserId) -> Result<User>;
    fn update_user(&self, id: &UserId, update: &UpdateUser) -> Result<User>;
}
