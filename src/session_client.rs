use std::{error::Error, fmt::Debug, sync::Arc};

use reqwest::{cookie::Jar, Client, StatusCode};
use secrecy::ExposeSecret;
use thiserror::Error;
use url::Url;

use crate::{configuration::SessionSettings, utils::error_fmt_chain};

// Client that asks the server to end the current session
pub struct SessionClient {
    http_client: Client,
    logout_url: Url,
}

impl SessionClient {
    /// Builds the client around a cookie jar seeded with the configured session cookie.
    ///
    /// No timeout is set: a logout request runs until it completes or fails.
    pub fn new(logout_url: Url, session: &SessionSettings) -> Result<SessionClient, reqwest::Error> {
        let jar = Jar::default();
        if let Some(token) = &session.token {
            let cookie = format!("{}={}; Path=/", session.cookie_name, token.expose_secret());
            jar.add_cookie_str(&cookie, &logout_url);
        }

        let http_client = Client::builder()
            .cookie_provider(Arc::new(jar))
            .build()?;

        Ok(Self {
            http_client,
            logout_url,
        })
    }

    #[tracing::instrument(
        "Sending logout request",
        skip(self),
        fields(url = %self.logout_url)
    )]
    pub async fn end_session(&self) -> Result<(), LogoutError> {
        let response = self.http_client
            .post(self.logout_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogoutError::Rejected(status));
        }
        Ok(())
    }
}

#[derive(Error)]
pub enum LogoutError {
    #[error("Logout request could not be completed")]
    Transport(#[from] reqwest::Error),
    #[error("Server rejected logout with status {0}")]
    Rejected(StatusCode),
}

impl Debug for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
