use crate::actor_framework::ResourceClient;
use crate::domain::{Identity, Session, SessionCreate};
use crate::session_actor::SessionError;
use tracing::{debug, info, instrument};

/// Client for the session table. Tokens are never recorded in spans.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl_client_new!(SessionClient, Session);

impl SessionClient {
    #[instrument(skip(self))]
    pub async fn open_session(&self, identity: Identity) -> Result<Session, SessionError> {
        debug!("Sending request");
        let session = self.inner.create(SessionCreate { identity }).await?;
        info!(%identity, "Session opened");
        Ok(session)
    }

    #[instrument(skip_all)]
    pub async fn find_session(&self, token: &str) -> Result<Option<Session>, SessionError> {
        debug!("Sending request");
        Ok(self.inner.get(token.to_string()).await?)
    }

    #[instrument(skip_all)]
    pub async fn close_session(&self, token: &str) -> Result<(), SessionError> {
        debug!("Sending request");
        let session = self.inner.delete(token.to_string()).await?;
        info!(identity = %session.identity, "Session closed");
        Ok(())
    }

    /// Closes every session held by `identity`, returning how many were closed.
    #[instrument(skip(self))]
    pub async fn revoke_identity(&self, identity: Identity) -> Result<usize, SessionError> {
        debug!("Sending request");
        let mut revoked = 0;
        for session in self.inner.list().await? {
            if session.identity == identity {
                match self.inner.delete(session.token).await {
                    Ok(_) => revoked += 1,
                    // Already closed by a concurrent logout
                    Err(crate::actor_framework::FrameworkError::NotFound(_)) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(revoked)
    }
}
