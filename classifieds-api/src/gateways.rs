use classifieds_boundary as json;
use classifieds_core::{
    entities::*,
    gateways::{self, AdGateway, AuthGateway, CategoryGateway, UserGateway},
    moderation::ModerationRequest,
    usecases::{Credentials, NewCategory, NewSubcategory, UpdateUser},
};

use crate::{AdminApi, Error};

type Result<T> = gateways::Result<T>;

impl From<Error> for gateways::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(err) => match err.status_code {
                400 | 422 => Self::Validation(err.message.to_string()),
                401 | 403 => Self::Unauthorized,
                404 => Self::NotFound,
                409 => Self::Conflict,
                _ => Self::Other(err.into()),
            },
            Error::Fetch(_) | Error::Url(_) => Self::Other(err.into()),
        }
    }
}

fn moderation_body(request: &ModerationRequest) -> json::ModerateAdVersion {
    json::ModerateAdVersion {
        status: request.decision.status().into(),
        rejection_reason: request.decision.rejection_reason().map(ToOwned::to_owned),
    }
}

fn category_body(category: &NewCategory) -> json::NewCategory {
    let NewCategory { name, description } = category;
    json::NewCategory {
        name: name.clone(),
        description: description.clone(),
    }
}

fn subcategory_body(subcategory: &NewSubcategory) -> json::NewSubcategory {
    let NewSubcategory {
        name,
        description,
        category_id,
    } = subcategory;
    json::NewSubcategory {
        name: name.clone(),
        description: description.clone(),
        category_id: (*category_id).into(),
    }
}

impl AdGateway for AdminApi {
    fn all_ads(&self) -> Result<Vec<Ad>> {
        Ok(self.ads()?.into_iter().map(Into::into).collect())
    }

    fn get_ad(&self, id: Id) -> Result<Ad> {
        Ok(self.ad(id.into())?.into())
    }

    fn pending_ads(&self) -> Result<Vec<Ad>> {
        Ok(AdminApi::pending_ads(self)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn submit_moderation(&self, request: &ModerationRequest) -> Result<AdVersion> {
        let version = self.moderate_ad_version(
            request.ad_id.into(),
            request.version_id.into(),
            &moderation_body(request),
        )?;
        Ok(version.into())
    }
}

impl AuthGateway for AdminApi {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        let Credentials { email, password } = credentials;
        let credentials = json::Credentials {
            email: email.clone(),
            password: password.clone(),
        };
        Ok(AdminApi::login(self, &credentials)?)
    }

    fn logout(&self) -> Result<()> {
        Ok(AdminApi::logout(self)?)
    }

    fn current_user(&self) -> Result<User> {
        Ok(AdminApi::current_user(self)?.into())
    }
}

impl UserGateway for AdminApi {
    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users()?.into_iter().map(Into::into).collect())
    }

    fn get_user(&self, id: &UserId) -> Result<User> {
        Ok(self.user(id.as_str())?.into())
    }

    fn update_user(&self, id: &UserId, update: &UpdateUser) -> Result<User> {
        let UpdateUser {
            first_name,
            last_name,
            is_active,
        } = update;
        let update = json::UpdateUser {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            is_active: *is_active,
        };
        Ok(AdminApi::update_user(self, id.as_str(), &update)?.into())
    }
}

impl CategoryGateway for AdminApi {
    fn all_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories()?.into_iter().map(Into::into).collect())
    }

    fn create_category(&self, category: &NewCategory) -> Result<Category> {
        Ok(AdminApi::create_category(self, &category_body(category))?.into())
    }

    fn update_category(&self, id: Id, category: &NewCategory) -> Result<Category> {
        Ok(AdminApi::update_category(self, id.into(), &category_body(category))?.into())
    }

    fn all_subcategories(&self) -> Result<Vec<Subcategory>> {
        Ok(self.subcategories()?.into_iter().map(Into::into).collect())
    }

    fn create_subcategory(&self, subcategory: &NewSubcategory) -> Result<Subcategory> {
        Ok(AdminApi::create_subcategory(self, &subcategory_body(subcategory))?.into())
    }

    fn update_subcategory(&self, id: Id, subcategory: &NewSubcategory) -> Result<Subcategory> {
        Ok(
            AdminApi::update_subcategory(self, id.into(), &subcategory_body(subcategory))?
                .into(),
        )
    }
}
