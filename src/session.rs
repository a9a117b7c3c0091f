use anyhow::{anyhow, Result};

use classifieds_api::AdminApi;
use classifieds_core::{
    entities::User,
    usecases::{self, Credentials},
};

use crate::config::Config;

/// The authorized context of all commands.
///
/// A session can only be started by a manager.
pub struct Session {
    api: AdminApi,
    user: User,
}

impl Session {
    pub fn start(cfg: &Config) -> Result<Self> {
        let credentials = credentials(cfg)?;
        let api = AdminApi::new(&cfg.api.url, cfg.api.request_timeout)?;
        log::debug!("Connecting to {}", api.url());
        let user = usecases::login(&api, credentials)?;
        Ok(Self { api, user })
    }

    pub const fn api(&self) -> &AdminApi {
        &self.api
    }

    /// The logged in manager.
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Runs `f` and ends the session afterwards, even if `f` failed.
    pub fn run<T, F>(self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let result = f(&self);
        if let Err(err) = self.end() {
            log::warn!("Failed to end the session: {err}");
        }
        result
    }

    pub fn end(self) -> Result<()> {
        usecases::logout(&self.api)?;
        Ok(())
    }
}

fn credentials(cfg: &Config) -> Result<Credentials> {
    let email = cfg
        .credentials
        .email
        .clone()
        .ok_or_else(|| anyhow!("Missing email address of the manager account"))?;
    let password = cfg
        .credentials
        .password
        .clone()
        .ok_or_else(|| anyhow!("Missing password of the manager account"))?;
    Ok(Credentials { email, password })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::{Matcher, Mock, Server};

    use super::*;
    use crate::config;

    const MANAGER: &str = r#"{
        "id": "m1",
        "firstName": "Mia",
        "lastName": "Manager",
        "email": "mia@example.com",
        "isActive": true,
        "role": { "id": 1, "name": "manager" }
    }"#;

    fn session_config(url: String, email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            api: config::Api {
                url,
                request_timeout: Duration::from_secs(5),
            },
            credentials: config::Credentials {
                email: email.map(ToOwned::to_owned),
                password: password.map(ToOwned::to_owned),
            },
        }
    }

    fn manager_config(server: &Server) -> Config {
        session_config(server.url(), Some("mia@example.com"), Some("secret"))
    }

    fn mock_login(server: &mut Server, current_user: &str) -> Mock {
        server
            .mock("POST", "/auth/admin/login")
            .match_body(Matcher::PartialJsonString(
                r#"{"email":"mia@example.com"}"#.into(),
            ))
            .with_status(201)
            .create();
        server
            .mock("GET", "/users/me")
            .with_status(200)
            .with_body(current_user)
            .create()
    }

    fn mock_logout(server: &mut Server) -> Mock {
        server
            .mock("POST", "/auth/logout")
            .with_status(201)
            .expect(1)
            .create()
    }

    #[test]
    fn start_and_end_session_of_manager() {
        let mut server = Server::new();
        let me = mock_login(&mut server, MANAGER);
        let logout = mock_logout(&mut server);

        let session = Session::start(&manager_config(&server)).unwrap();
        assert!(session.user().is_manager());
        assert_eq!("Mia Manager", session.user().full_name());
        me.assert();

        session.end().unwrap();
        logout.assert();
    }

    #[test]
    fn end_session_after_failed_command() {
        let mut server = Server::new();
        mock_login(&mut server, MANAGER);
        let logout = mock_logout(&mut server);

        let session = Session::start(&manager_config(&server)).unwrap();
        let result: Result<()> = session.run(|_| Err(anyhow!("command failed")));
        assert_eq!("command failed", result.unwrap_err().to_string());
        logout.assert();
    }

    #[test]
    fn refuse_users_without_manager_role() {
        let mut server = Server::new();
        mock_login(
            &mut server,
            r#"{"id":"u1","firstName":"Jane","lastName":"Doe","role":{"name":"user"}}"#,
        );
        let logout = mock_logout(&mut server);

        assert!(Session::start(&manager_config(&server)).is_err());
        logout.assert();
    }

    #[test]
    fn missing_credentials_fail_without_request() {
        let mut server = Server::new();
        let login = server
            .mock("POST", "/auth/admin/login")
            .expect(0)
            .create();

        assert!(Session::start(&session_config(server.url(), None, Some("secret"))).is_err());
        assert!(Session::start(&session_config(server.url(), Some("mia@example.com"), None)).is_err());
        login.assert();
    }
}
