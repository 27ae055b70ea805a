use crate::actor_framework::ResourceClient;
use crate::administrator_actor::AdministratorError;
use crate::auth::PasswordHash;
use crate::domain::{validate_fields, Administrator, AdministratorCreate, NewAdministrator};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct AdministratorClient {
    inner: ResourceClient<Administrator>,
}

impl_basic_client!(AdministratorClient, Administrator, AdministratorError, administrator);

impl AdministratorClient {
    #[instrument(skip_all, fields(nickname = %new.nickname))]
    pub async fn register_administrator(&self, new: NewAdministrator) -> Result<Administrator, AdministratorError> {
        validate_fields(&new).into_result().map_err(AdministratorError::Validation)?;

        debug!("Sending request");
        let administrator = self
            .inner
            .create(AdministratorCreate {
                password_hash: PasswordHash::new(&new.password),
                nickname: new.nickname,
            })
            .await?;
        info!(administrator_id = administrator.id, "Administrator registered");
        Ok(administrator)
    }

    #[instrument(skip(self))]
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Administrator>, AdministratorError> {
        debug!("Sending request");
        Ok(self.inner.find_unique("nickname", nickname).await?)
    }
}
