use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

pub const LOGOUT_PATH: &str = "/auth/logout";
pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub session: SessionSettings
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub base_url: Url
}

// Cookie the client presents to the server, the way a browser holds one for the origin
#[derive(Deserialize, Debug, Clone)]
pub struct SessionSettings{
    pub cookie_name: String,
    pub token: Option<SecretString>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints{
    pub logout: Url,
    pub login: Url
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
            )
            .build()?
            .try_deserialize::<Settings>()
    }
}

impl ApplicationSettings{
    /// Resolves the fixed logout and login paths against the base url.
    ///
    /// Both paths are root-relative, so any path segment on the base url is dropped.
    pub fn endpoints(&self) -> Result<Endpoints, url::ParseError>{
        Ok(Endpoints{
            logout: self.base_url.join(LOGOUT_PATH)?,
            login: self.base_url.join(LOGIN_PATH)?
        })
    }
}
