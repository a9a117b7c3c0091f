use std::{sync::Arc, time::Duration};

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{
    blocking::{Client, RequestBuilder},
    cookie::{CookieStore, Jar},
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use classifieds_boundary::{
    Ad, AdVersion, Category, Credentials, ModerateAdVersion, NewCategory, NewSubcategory,
    Subcategory, UpdateUser, User,
};

use crate::{into_empty, into_json, Result};

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Admin API of the classifieds backend.
///
/// The session is kept in a cookie jar that is
/// shared by all clones.
#[derive(Debug, Clone)]
pub struct AdminApi {
    url: Url,
    client: Client,
    cookies: Arc<Jar>,
}

impl AdminApi {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let mut url = Url::parse(url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url,
            client,
            cookies,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.url.join(path)?)
    }

    fn xsrf_token(&self) -> Option<String> {
        let cookies = self.cookies.cookies(&self.url)?;
        let cookies = cookies.to_str().ok()?;
        cookies
            .split(';')
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == XSRF_COOKIE)
            .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
    }

    fn add_xsrf_header(&self, req: RequestBuilder) -> RequestBuilder {
        match self.xsrf_token() {
            Some(token) => req.header(XSRF_HEADER, token),
            None => req,
        }
    }

    fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = req.send()?;
        into_json(response)
    }

    fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_xsrf_header(req).json(data).send()?;
        into_json(response)
    }

    fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");
        self.send(self.client.get(url))
    }

    fn post<D, T>(&self, path: &str, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let url = self.endpoint(path)?;
        log::debug!("POST {url}");
        self.send_json(self.client.post(url), data)
    }

    fn patch<D, T>(&self, path: &str, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let url = self.endpoint(path)?;
        log::debug!("PATCH {url}");
        self.send_json(self.client.patch(url), data)
    }

    pub fn login(&self, credentials: &Credentials) -> Result<()> {
        let url = self.endpoint("auth/admin/login")?;
        let response = self.client.post(url).json(credentials).send()?;
        into_empty(response)
    }

    pub fn logout(&self) -> Result<()> {
        let url = self.endpoint("auth/logout")?;
        let response = self.add_xsrf_header(self.client.post(url)).send()?;
        into_empty(response)
    }

    pub fn current_user(&self) -> Result<User> {
        self.get("users/me")
    }

    pub fn users(&self) -> Result<Vec<User>> {
        self.get("users")
    }

    pub fn user(&self, id: &str) -> Result<User> {
        self.get(&format!("users/{}", encode(id)))
    }

    pub fn update_user(&self, id: &str, update: &UpdateUser) -> Result<User> {
        self.patch(&format!("users/{}", encode(id)), update)
    }

    pub fn ads(&self) -> Result<Vec<Ad>> {
        self.get("ads/all")
    }

    pub fn ad(&self, id: u64) -> Result<Ad> {
        self.get(&format!("ads/{id}"))
    }

    pub fn pending_ads(&self) -> Result<Vec<Ad>> {
        self.get("ads/pending")
    }

    pub fn moderate_ad_version(
        &self,
        ad_id: u64,
        version_id: u64,
        moderation: &ModerateAdVersion,
    ) -> Result<AdVersion> {
        self.patch(
            &format!("ads/{ad_id}/versions/{version_id}/moderate"),
            moderation,
        )
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        self.get("categories")
    }

    pub fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.post("categories", category)
    }

    pub fn update_category(&self, id: u64, category: &NewCategory) -> Result<Category> {
        self.patch(&format!("categories/{id}"), category)
    }

    pub fn subcategories(&self) -> Result<Vec<Subcategory>> {
        self.get("categories/subcategories/all")
    }

    pub fn create_subcategory(&self, subcategory: &NewSubcategory) -> Result<Subcategory> {
        self.post("categories/subcategories", subcategory)
    }

    pub fn update_subcategory(&self, id: u64, subcategory: &NewSubcategory) -> Result<Subcategory> {
        self.patch(&format!("categories/subcategories/{id}"), subcategory)
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::Error;

    fn api(server: &Server) -> AdminApi {
        AdminApi::new(&format!("{}/api", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = AdminApi::new("http://localhost:3000/api", Duration::from_secs(1)).unwrap();
        assert_eq!("http://localhost:3000/api/", api.url().as_str());
        assert_eq!(
            "http://localhost:3000/api/ads/all",
            api.endpoint("ads/all").unwrap().as_str()
        );
    }

    #[test]
    fn reject_invalid_base_url() {
        let err = AdminApi::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn echo_xsrf_cookie_on_mutating_requests() {
        let mut server = Server::new();
        let login = server
            .mock("POST", "/api/auth/admin/login")
            .match_body(Matcher::Json(
                json!({"email": "mia@example.com", "password": "secret"}),
            ))
            .with_status(201)
            .with_header("set-cookie", "XSRF-TOKEN=abc%3D123; Path=/")
            .with_header("set-cookie", "access_token=jwt; Path=/; HttpOnly")
            .create();
        let patch = server
            .mock("PATCH", "/api/categories/3")
            .match_header("x-xsrf-token", "abc=123")
            .match_header("cookie", Matcher::Regex("access_token=jwt".into()))
            .match_body(Matcher::Json(json!({"name": "Jobs", "description": ""})))
            .with_status(200)
            .with_body(r#"{"id":3,"name":"Jobs","description":""}"#)
            .create();

        let api = api(&server);
        api.login(&Credentials {
            email: "mia@example.com".into(),
            password: "secret".into(),
        })
        .unwrap();
        let category = api
            .update_category(
                3,
                &NewCategory {
                    name: "Jobs".into(),
                    description: String::new(),
                },
            )
            .unwrap();
        assert_eq!("Jobs", category.name);
        login.assert();
        patch.assert();
    }

    #[test]
    fn no_xsrf_header_without_cookie() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/categories")
            .match_header("x-xsrf-token", Matcher::Missing)
            .with_status(201)
            .with_body(r#"{"id":1,"name":"Vehicles","description":"Cars and bikes"}"#)
            .create();
        let category = api(&server)
            .create_category(&NewCategory {
                name: "Vehicles".into(),
                description: "Cars and bikes".into(),
            })
            .unwrap();
        assert_eq!(1, category.id);
        mock.assert();
    }

    #[test]
    fn send_moderation_request() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/api/ads/7/versions/70/moderate")
            .match_body(Matcher::Json(
                json!({"status": "rejected", "rejectionReason": "Spam"}),
            ))
            .with_status(200)
            .with_body(
                r#"{"id":70,"versionNumber":2,"title":"Bike","price":10,"status":"rejected",
                    "rejectionReason":"Spam","createdAt":"2025-02-01T12:00:00Z"}"#,
            )
            .create();
        let version = api(&server)
            .moderate_ad_version(
                7,
                70,
                &ModerateAdVersion {
                    status: classifieds_boundary::ModerationStatus::Rejected,
                    rejection_reason: Some("Spam".into()),
                },
            )
            .unwrap();
        assert_eq!(70, version.id);
        assert_eq!(Some("Spam"), version.rejection_reason.as_deref());
        mock.assert();
    }

    #[test]
    fn parse_error_responses() {
        let mut server = Server::new();
        server
            .mock("GET", "/api/ads/pending")
            .with_status(400)
            .with_body(r#"{"statusCode":400,"message":["a","b"],"error":"Bad Request"}"#)
            .create();
        server
            .mock("GET", "/api/ads/all")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create();

        let api = api(&server);
        let err = api.pending_ads().unwrap_err();
        assert_eq!(Some(400), err.status_code());
        assert_eq!("a; b", err.to_string());

        let err = api.ads().unwrap_err();
        assert_eq!(Some(502), err.status_code());
        assert_eq!("Bad Gateway", err.to_string());
    }

    #[test]
    fn encode_user_ids() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/api/users/a%2Fb")
            .with_status(200)
            .with_body(r#"{"id":"a/b","firstName":"A","lastName":"B"}"#)
            .create();
        let user = api(&server).user("a/b").unwrap();
        assert_eq!("a/b", user.id);
        mock.assert();
    }
}
