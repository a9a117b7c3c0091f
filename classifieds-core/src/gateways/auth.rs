use super::Result;
use crate::{entities::*, usecases::Credentials};

pub trait AuthGateway {
    fn login(&self, credentials: &Credentials) -> Result<()>;
    fn logout(&self) -> Result<()>;
    fn current_user(&self) -> Result<User>;
}
