use super::Result;
use crate::{
    entities::*,
    usecases::{NewCategory, NewSubcategory},
};

pub trait CategoryGateway {
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn create_category(&self, category: &NewCategory) -> Result<Category>;
    fn update_category(&self, id: Id, category: &NewCategory) -> Result<Category>;

    fn all_subcategories(&self) -> Result<Vec<Subcategory>>;
    fn create_subcategory(&self, subcategory: &NewSubcategory) -> Result<Subcategory>;
    fn update_subcategory(&self, id: Id, subcategory: &NewSubcategory) -> Result<Subcategory>;
}
