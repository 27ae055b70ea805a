use crate::actor_framework::ResourceClient;
use crate::clients::{CustomerClient, ProductClient};
use crate::domain::{
    Administrator, AdministratorId, CustomerId, FieldErrors, LineItem, NewSale, Order, Sale, SaleCreate, SaleId,
};
use crate::sale_actor::SaleError;
use tracing::{debug, error, info, instrument, warn};

/// Client for the Sale actor.
///
/// Direct sales are validated and take their stock from the product ledger; sales that
/// materialize a delivered order reuse the order's lines as they are.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
    customers: CustomerClient,
    products: ProductClient,
}

impl_client_methods!(SaleClient, Sale, SaleError, sale);

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>, customers: CustomerClient, products: ProductClient) -> Self {
        Self { inner, customers, products }
    }

    /// Records a direct sale, taking stock for every line. Like an order, the sale holds its
    /// customer and products.
    #[instrument(skip_all, fields(administrator_id = admin.id, customer_id = ?new.customer_id))]
    pub async fn create_sale(&self, admin: &Administrator, new: NewSale) -> Result<Sale, SaleError> {
        info!("Processing create_sale request (Client Side)");

        let mut errors = FieldErrors::new();
        let held_customer = match errors.require("customer_id", new.customer_id) {
            Some(id) => self.customers.hold_customer(id, &mut errors).await?.then_some(id),
            None => None,
        };
        let lines = match self.products.reserve_lines(&new.products, errors).await {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "Sale rejected");
                self.abandon(held_customer, &[]).await;
                return Err(e.into());
            }
        };
        let Some(customer_id) = held_customer else {
            self.abandon(None, &lines).await;
            return Err(SaleError::Validation(FieldErrors::single("customer_id", "is required")));
        };

        let payload = SaleCreate {
            customer_id,
            administrator_id: admin.id,
            order_id: None,
            lines: lines.clone(),
        };
        match self.inner.create(payload).await {
            Ok(sale) => {
                info!(sale_id = sale.id, "Sale recorded");
                Ok(sale)
            }
            Err(e) => {
                error!(error = %e, "Storing sale failed, releasing stock");
                self.abandon(Some(customer_id), &lines).await;
                Err(e.into())
            }
        }
    }

    /// Gives back the holds taken for a sale that was never stored.
    async fn abandon(&self, customer_id: Option<CustomerId>, lines: &[LineItem]) {
        if !lines.is_empty() {
            if let Err(e) = self.products.release_lines(lines).await {
                error!(error = %e, "Releasing stock failed");
            }
        }
        if let Some(id) = customer_id {
            if let Err(e) = self.customers.release_customer(id).await {
                error!(error = %e, customer_id = id, "Releasing customer failed");
            }
        }
    }

    /// Records the sale for a delivered order. Stock was taken when the order was created,
    /// so nothing is revalidated and the ledger is not touched.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub async fn create_sale_from_order(&self, order: &Order, administrator_id: AdministratorId) -> Result<Sale, SaleError> {
        debug!("Sending request");
        let payload = SaleCreate {
            customer_id: order.customer_id,
            administrator_id,
            order_id: Some(order.id),
            lines: order.lines.clone(),
        };
        Ok(self.inner.create(payload).await?)
    }

    /// Removes a sale that must not survive, such as one created for a delivery that lost a race.
    #[instrument(skip(self))]
    pub async fn discard_sale(&self, id: SaleId) -> Result<Sale, SaleError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }
}
