use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl AutoCorrect for Credentials {
    fn auto_correct(self) -> Self {
        Self {
            email: self.email.trim().to_owned(),
            ..self
        }
    }
}

/// Logs in and returns the authorized user.
pub fn login<G>(gateway: &G, credentials: Credentials) -> Result<User>
where
    G: AuthGateway,
{
    let credentials = credentials.auto_correct();
    if credentials.email.is_empty() {
        return Err(ValidationError::Email.into());
    }
    if is_blank(&credentials.password) {
        return Err(ValidationError::Password.into());
    }
    log::debug!("Logging in as {}", credentials.email);
    gateway.login(&credentials)?;
    let user = gateway.current_user()?;
    if let Err(err) = super::authorize_manager(&user) {
        // Drop the session of unauthorized users
        if let Err(err) = gateway.logout() {
            log::warn!("Failed to logout: {err}");
        }
        return Err(err);
    }
    log::info!("Logged in as {} ({})", user.full_name(), user.email);
    Ok(user)
}

pub fn logout<G>(gateway: &G) -> Result<()>
where
    G: AuthGateway,
{
    gateway.logout()?;
    log::info!("Logged out");
    Ok(())
}

pub fn current_user<G>(gateway: &G) -> Result<User>
where
    G: AuthGateway,
{
    Ok(gateway.current_user()?)
}
