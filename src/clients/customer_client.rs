use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::auth::PasswordHash;
use crate::clients::SessionClient;
use crate::customer_actor::{CustomerAction, CustomerError};
use crate::domain::{validate_fields, Customer, CustomerCreate, CustomerId, CustomerPatch, CustomerUpdate, FieldErrors, Identity, NewCustomer};
use tracing::{debug, info, instrument, warn};

/// Client for the customer directory.
///
/// Passwords are hashed here, before anything reaches the actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
    sessions: SessionClient,
}

impl_client_methods!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>, sessions: SessionClient) -> Self {
        Self { inner, sessions }
    }

    #[instrument(skip_all, fields(nickname = %new.nickname))]
    pub async fn register_customer(&self, new: NewCustomer) -> Result<Customer, CustomerError> {
        validate_fields(&new).into_result().map_err(CustomerError::Validation)?;

        debug!("Sending request");
        let customer = self
            .inner
            .create(CustomerCreate {
                password_hash: PasswordHash::new(&new.password),
                name: new.name,
                national_id: new.national_id,
                phone: new.phone,
                nickname: new.nickname,
            })
            .await?;
        info!(customer_id = customer.id, "Customer registered");
        Ok(customer)
    }

    #[instrument(skip(self, update))]
    pub async fn update_customer(&self, id: CustomerId, update: CustomerUpdate) -> Result<Customer, CustomerError> {
        validate_fields(&update).into_result().map_err(CustomerError::Validation)?;

        debug!("Sending request");
        let patch = CustomerPatch {
            name: update.name,
            national_id: update.national_id,
            phone: update.phone,
            nickname: update.nickname,
            password_hash: update.password.as_deref().map(PasswordHash::new),
            status: update.status,
        };
        Ok(self.inner.update(id, patch).await?)
    }

    /// Removes the customer and closes every session it still holds.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        let customer = self.inner.delete(id).await?;
        match self.sessions.revoke_identity(Identity::Customer(id)).await {
            Ok(revoked) => info!(customer_id = id, revoked, "Customer deleted"),
            Err(e) => {
                warn!(customer_id = id, error = %e, "Customer deleted but sessions could not be revoked");
                return Err(CustomerError::ActorCommunicationError(e.to_string()));
            }
        }
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Customer>, CustomerError> {
        debug!("Sending request");
        Ok(self.inner.find_unique("nickname", nickname).await?)
    }

    /// Marks the customer as referenced by an order or sale about to be stored, so it cannot
    /// be deleted underneath it.
    ///
    /// A missing customer is recorded as a `customer_id` problem and `false` is returned.
    #[instrument(skip(self, errors))]
    pub async fn hold_customer(&self, id: CustomerId, errors: &mut FieldErrors) -> Result<bool, CustomerError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CustomerAction::Hold).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => {
                errors.add("customer_id", format!("customer {id} does not exist"));
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Drops a hold taken for a record that was never stored.
    #[instrument(skip(self))]
    pub async fn release_customer(&self, id: CustomerId) -> Result<(), CustomerError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, CustomerAction::Release).await?)
    }
}
