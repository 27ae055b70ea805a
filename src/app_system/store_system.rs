use crate::auth::Authenticator;
use crate::clients::{AdministratorClient, CustomerClient, OrderClient, ProductClient, SaleClient};
use crate::config::{AppConfig, SeedAdministrator};
use crate::domain::NewAdministrator;
use crate::{administrator_actor, customer_actor, order_actor, product_actor, sale_actor, session_actor};
use crate::app_system::StoreError;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Every client the request handlers need, bundled for sharing. Cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub products: ProductClient,
    pub orders: OrderClient,
    pub sales: SaleClient,
    pub customers: CustomerClient,
    pub administrators: AdministratorClient,
    pub auth: Authenticator,
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StoreSystem {
    pub services: Services,
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new(config: &AppConfig) -> Self {
        let mailbox = config.mailbox_size;

        // Leaf actors first: later ones hold clients of earlier ones
        let (session_actor, sessions) = session_actor::new(mailbox);
        let (customer_actor, customers) = customer_actor::new(mailbox, sessions.clone());
        let (administrator_actor, administrators) = administrator_actor::new(mailbox);
        let (product_actor, products) = product_actor::new(mailbox);
        let (sale_actor, sales) = sale_actor::new(mailbox, customers.clone(), products.clone());
        let (order_actor, orders) =
            order_actor::new(mailbox, customers.clone(), products.clone(), sales.clone());

        let handles = vec![
            tokio::spawn(session_actor.run()),
            tokio::spawn(customer_actor.run()),
            tokio::spawn(administrator_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(sale_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let auth = Authenticator::new(customers.clone(), administrators.clone(), sessions);

        Self {
            services: Services {
                products,
                orders,
                sales,
                customers,
                administrators,
                auth,
            },
            handles,
        }
    }

    /// Creates the configured administrator unless one with that nickname already exists.
    #[instrument(skip_all, fields(nickname = %seed.nickname))]
    pub async fn seed_administrator(&self, seed: &SeedAdministrator) -> Result<(), StoreError> {
        let administrators = &self.services.administrators;
        if administrators.find_by_nickname(&seed.nickname).await?.is_some() {
            info!("Seed administrator already present");
            return Ok(());
        }
        administrators
            .register_administrator(NewAdministrator {
                nickname: seed.nickname.clone(),
                password: seed.password.clone(),
            })
            .await?;
        Ok(())
    }

    /// Drops the clients (closing every mailbox) and waits for the actors to drain.
    ///
    /// Any clone of [`Services`] still alive elsewhere keeps its actors running, so callers
    /// stop the HTTP server first.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down system...");
        drop(self.services);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StoreError::Storage(format!("Actor task failed: {e}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
