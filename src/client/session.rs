use tokio::sync::watch;

use crate::models::SessionUser;

use super::{ClientError, PortalClient};

/// Holds the logged-in user and publishes every change.
///
/// Construct one per application and hand it to whatever needs the user;
/// there is no global instance.
#[derive(Debug)]
pub struct SessionService {
    client: PortalClient,
    user: watch::Sender<Option<SessionUser>>,
}

impl SessionService {
    pub fn new(client: PortalClient) -> Self {
        let (user, _) = watch::channel(None);
        Self { client, user }
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    /// Snapshot of the current user.
    pub fn current(&self) -> Option<SessionUser> {
        self.user.borrow().clone()
    }

    /// Receiver that observes every later login, logout and teardown.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUser>> {
        self.user.subscribe()
    }

    /// Load the session the portal already knows about, if any.
    pub async fn init(&self) -> Result<Option<SessionUser>, ClientError> {
        let user = self.client.session().await?;
        self.user.send_replace(user.clone());
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let user = self.client.login(email, password).await?;
        tracing::debug!("Logged in as '{}'", user.id);
        self.user.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Clears the user even when the portal call fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = self.client.logout().await;
        self.user.send_replace(None);
        result
    }

    /// Forget the user without contacting the portal.
    pub fn teardown(&self) {
        self.user.send_replace(None);
    }
}
