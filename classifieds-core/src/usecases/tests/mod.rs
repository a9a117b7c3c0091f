use std::cell::{Cell, RefCell};

use super::{Credentials, NewCategory, NewSubcategory, UpdateUser};
use crate::{
    entities::*,
    gateways::{self, AdGateway, AuthGateway, CategoryGateway, UserGateway},
    moderation::{Decision, ModerationRequest},
};

type Result<T> = gateways::Result<T>;

/// In-memory backend that behaves like the REST backend.
#[derive(Default)]
pub struct MockBackend {
    ads: RefCell<Vec<Ad>>,
    pending_ad_ids: RefCell<Option<Vec<Id>>>,
    users: RefCell<Vec<User>>,
    accounts: RefCell<Vec<(String, String, User)>>,
    session: RefCell<Option<User>>,
    categories: RefCell<Vec<Category>>,
    subcategories: RefCell<Vec<Subcategory>>,
    last_id: Cell<u64>,
    requests: Cell<usize>,
}

impl MockBackend {
    pub fn add_ad(&self, ad: Ad) {
        self.ads.borrow_mut().push(ad);
    }

    /// Overrides the ads that are reported as pending.
    pub fn set_pending_ad_ids(&self, ids: Vec<Id>) {
        *self.pending_ad_ids.borrow_mut() = Some(ids);
    }

    pub fn add_user(&self, user: User) {
        self.users.borrow_mut().push(user);
    }

    pub fn add_account(&self, email: &str, password: &str, user: User) {
        self.add_user(user.clone());
        self.accounts
            .borrow_mut()
            .push((email.to_owned(), password.to_owned(), user));
    }

    pub fn login_as(&self, user: User) {
        *self.session.borrow_mut() = Some(user);
    }

    pub fn logged_in_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }

    /// Number of requests that reached the backend.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    fn request(&self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn next_id(&self) -> Id {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        id.into()
    }

    fn category_ref(&self, id: Id) -> Result<CategoryRef> {
        self.categories
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .map(CategoryRef::from)
            .ok_or(gateways::Error::NotFound)
    }
}

impl AdGateway for MockBackend {
    fn all_ads(&self) -> Result<Vec<Ad>> {
        self.request();
        Ok(self.ads.borrow().clone())
    }

    fn get_ad(&self, id: Id) -> Result<Ad> {
        self.request();
        self.ads
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(gateways::Error::NotFound)
    }

    fn pending_ads(&self) -> Result<Vec<Ad>> {
        self.request();
        let ads = self.ads.borrow();
        let pending = match &*self.pending_ad_ids.borrow() {
            Some(ids) => ads.iter().filter(|a| ids.contains(&a.id)).cloned().collect(),
            None => ads
                .iter()
                .filter(|a| a.versions.iter().any(AdVersion::is_pending))
                .cloned()
                .collect(),
        };
        Ok(pending)
    }

    fn submit_moderation(&self, request: &ModerationRequest) -> Result<AdVersion> {
        self.request();
        let moderator = self.logged_in_user();
        let mut ads = self.ads.borrow_mut();
        let ad = ads
            .iter_mut()
            .find(|a| a.id == request.ad_id)
            .ok_or(gateways::Error::NotFound)?;
        let version = ad
            .version_mut(request.version_id)
            .ok_or(gateways::Error::NotFound)?;
        if version.status.is_terminal() {
            return Err(gateways::Error::Conflict);
        }
        version.status = request.decision.status();
        version.moderator = moderator;
        version.rejection_reason = match &request.decision {
            Decision::Approve => None,
            Decision::Reject { reason } => Some(reason.clone()),
        };
        Ok(version.clone())
    }
}

impl AuthGateway for MockBackend {
    fn login(&self, credentials: &Credentials) -> Result<()> {
        self.request();
        let user = self
            .accounts
            .borrow()
            .iter()
            .find(|(email, password, _)| {
                *email == credentials.email && *password == credentials.password
            })
            .map(|(_, _, user)| user.clone())
            .ok_or(gateways::Error::Unauthorized)?;
        self.login_as(user);
        Ok(())
    }

    fn logout(&self) -> Result<()> {
        self.request();
        self.session.borrow_mut().take();
        Ok(())
    }

    fn current_user(&self) -> Result<User> {
        self.request();
        self.logged_in_user().ok_or(gateways::Error::Unauthorized)
    }
}

impl UserGateway for MockBackend {
    fn all_users(&self) -> Result<Vec<User>> {
        self.request();
        Ok(self.users.borrow().clone())
    }

    fn get_user(&self, id: &UserId) -> Result<User> {
        self.request();
        self.users
            .borrow()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(gateways::Error::NotFound)
    }

    fn update_user(&self, id: &UserId, update: &UpdateUser) -> Result<User> {
        self.request();
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or(gateways::Error::NotFound)?;
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.is_active = update.is_active;
        Ok(user.clone())
    }
}

impl CategoryGateway for MockBackend {
    fn all_categories(&self) -> Result<Vec<Category>> {
        self.request();
        Ok(self.categories.borrow().clone())
    }

    fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.request();
        let created = Category {
            id: self.next_id(),
            name: category.name.clone(),
            description: category.description.clone(),
            subcategories: vec![],
        };
        self.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_category(&self, id: Id, category: &NewCategory) -> Result<Category> {
        self.request();
        let mut categories = self.categories.borrow_mut();
        let stored = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(gateways::Error::NotFound)?;
        stored.name = category.name.clone();
        stored.description = category.description.clone();
        Ok(stored.clone())
    }

    fn all_subcategories(&self) -> Result<Vec<Subcategory>> {
        self.request();
        Ok(self.subcategories.borrow().clone())
    }

    fn create_subcategory(&self, subcategory: &NewSubcategory) -> Result<Subcategory> {
        self.request();
        let category = self.category_ref(subcategory.category_id)?;
        let created = Subcategory {
            id: self.next_id(),
            name: subcategory.name.clone(),
            description: subcategory.description.clone(),
            category: Some(category),
        };
        self.subcategories.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_subcategory(&self, id: Id, subcategory: &NewSubcategory) -> Result<Subcategory> {
        self.request();
        let category = self.category_ref(subcategory.category_id)?;
        let mut subcategories = self.subcategories.borrow_mut();
        let stored = subcategories
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(gateways::Error::NotFound)?;
        stored.name = subcategory.name.clone();
        stored.description = subcategory.description.clone();
        stored.category = Some(category);
        Ok(stored.clone())
    }
}
