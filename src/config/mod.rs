use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "classifieds-admin.toml";

const ENV_NAME_API_URL: &str = "CLASSIFIEDS_API_URL";
const ENV_NAME_ADMIN_EMAIL: &str = "CLASSIFIEDS_ADMIN_EMAIL";
const ENV_NAME_ADMIN_PASSWORD: &str = "CLASSIFIEDS_ADMIN_PASSWORD";

pub struct Config {
    pub api: Api,
    pub credentials: Credentials,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let raw_config = override_from(raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

fn override_from<F>(mut cfg: raw::Config, var: F) -> raw::Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = var(ENV_NAME_API_URL) {
        cfg.api.get_or_insert_with(Default::default).url = url;
    }
    let credentials = cfg.credentials.get_or_insert_with(Default::default);
    if let Some(email) = var(ENV_NAME_ADMIN_EMAIL) {
        credentials.email = Some(email);
    }
    if let Some(password) = var(ENV_NAME_ADMIN_PASSWORD) {
        credentials.password = Some(password);
    }
    cfg
}

pub struct Api {
    /// Base URL of the backend REST API
    pub url: String,
    pub request_timeout: Duration,
}

/// Login of the manager account.
#[derive(Default)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, credentials } = from;

        let raw::Api {
            url,
            request_timeout,
        } = api.unwrap_or_default();

        let url = url.trim().to_owned();
        if url.is_empty() {
            return Err(anyhow!("No API URL defined"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(anyhow!("Unsupported API URL '{url}'"));
        }
        if request_timeout.is_zero() {
            return Err(anyhow!("The request timeout must not be zero"));
        }
        let api = Api {
            url,
            request_timeout,
        };

        let raw::Credentials { email, password } = credentials.unwrap_or_default();
        let credentials = Credentials { email, password };

        Ok(Self { api, credentials })
    }
}
