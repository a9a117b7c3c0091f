mod ads;
mod authorize;
mod categories;
mod error;
mod login;
mod moderate_ad;
mod subcategories;
mod users;

#[cfg(test)]
pub mod tests;

pub use self::{
    ads::*,
    authorize::*,
    categories::*,
    error::{Error, ValidationError},
    login::*,
    moderate_ad::*,
    subcategories::*,
    users::*,
};

mod prelude {
    pub use super::error::{Error, ValidationError};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::*,
        util::validate::{is_blank, AutoCorrect},
    };
}
