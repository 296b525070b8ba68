use std::rc::Rc;

use actix_web::rt::task::JoinHandle;
use url::Url;

use crate::{
    navigation::Navigator,
    session_client::{LogoutError, SessionClient},
};

/// Handler behind the logout action of the page.
///
/// A successful logout sends the page to the login url. A rejected logout leaves the
/// page where it is without a trace. A logout that never completes is logged as
/// `Logout failed` and otherwise leaves the page alone too.
pub struct LogoutHandler<N> {
    session_client: SessionClient,
    navigator: N,
    login_url: Url,
}

impl<N: Navigator> LogoutHandler<N> {
    pub fn new(session_client: SessionClient, navigator: N, login_url: Url) -> Self {
        Self {
            session_client,
            navigator,
            login_url,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    #[tracing::instrument(
        "Logging out current session",
        skip(self)
    )]
    pub async fn logout(&self) {
        match self.session_client.end_session().await {
            Ok(()) => self.navigator.navigate(self.login_url.clone()),
            Err(LogoutError::Rejected(_)) => {}
            Err(error) => tracing::error!(error = ?error, "Logout failed"),
        }
    }
}

impl<N: Navigator + 'static> LogoutHandler<N> {
    /// Starts a logout on the current thread and returns without waiting for it.
    ///
    /// Must be called from within an actix runtime.
    pub fn dispatch(self: Rc<Self>) -> JoinHandle<()> {
        actix_web::rt::spawn(async move { self.logout().await })
    }
}
