use crate::actor_framework::ResourceClient;
use crate::clients::{CustomerClient, ProductClient, SaleClient};
use crate::domain::{
    validate_fields, Administrator, CustomerId, FieldErrors, LineItem, NewOrder, Order, OrderCreate, OrderId, OrderStatus,
};
use crate::order_actor::{OrderAction, OrderError};
use chrono::Utc;
use tracing::{error, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// This client handles the orchestration: it validates customers and products, reserves stock
/// before an order is stored, and turns delivered orders into sales.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    customers: CustomerClient,
    products: ProductClient,
    sales: SaleClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        customers: CustomerClient,
        products: ProductClient,
        sales: SaleClient,
    ) -> Self {
        Self {
            inner,
            customers,
            products,
            sales,
        }
    }

    /// Validates the whole request, reserves stock for every line and stores a PENDING order.
    ///
    /// The customer and every product on the order are held until the order is gone, so
    /// neither can be deleted underneath it.
    ///
    /// # Errors
    /// `Validation` with every problem found when anything is wrong, missing fields included;
    /// nothing is stored and no stock moves in that case.
    #[instrument(skip_all, fields(administrator_id = admin.id, customer_id = ?new.customer_id))]
    pub async fn create_order(&self, admin: &Administrator, new: NewOrder) -> Result<Order, OrderError> {
        info!("Processing create_order request (Client Side)");

        // Step 1: Field checks
        let mut errors = validate_fields(&new);
        let address = errors.require("address", new.address);
        let charged_amount = errors.require("charged_amount", new.charged_amount);
        if charged_amount.is_some_and(|amount| amount.is_sign_negative()) {
            errors.add("charged_amount", "must not be negative");
        }

        // Step 2: Customer
        let held_customer = match errors.require("customer_id", new.customer_id) {
            Some(id) => self.customers.hold_customer(id, &mut errors).await?.then_some(id),
            None => None,
        };

        // Step 3: Lines, reserving stock only if nothing so far went wrong
        let lines = match self.products.reserve_lines(&new.products, errors).await {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "Order rejected");
                self.abandon(held_customer, &[]).await;
                return Err(e.into());
            }
        };
        info!("Stock reserved successfully");

        // A reservation only commits when every field was present
        let (Some(customer_id), Some(address), Some(charged_amount)) = (held_customer, address, charged_amount) else {
            self.abandon(held_customer, &lines).await;
            return Err(OrderError::Validation(FieldErrors::single("order", "is incomplete")));
        };

        // Step 4: Store the order
        let payload = OrderCreate {
            customer_id,
            administrator_id: admin.id,
            address,
            charged_amount,
            lines: lines.clone(),
        };
        match self.inner.create(payload).await {
            Ok(order) => {
                info!(order_id = order.id, "Order created");
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Storing order failed, releasing stock");
                self.abandon(Some(customer_id), &lines).await;
                Err(e.into())
            }
        }
    }

    /// Gives back the holds taken for an order that was never stored.
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

    /// Fulfills a PENDING order: records a sale for its lines, then marks it DELIVERED.
    ///
    /// If the order stops being PENDING between the check and the transition, the sale just
    /// created is discarded again and `InvalidState` is returned.
    #[instrument(skip(self, admin), fields(administrator_id = admin.id))]
    pub async fn deliver_order(&self, admin: &Administrator, id: OrderId) -> Result<Order, OrderError> {
        info!("Processing deliver_order request (Client Side)");

        let order = self.get_order(id).await?;
        if order.status != OrderStatus::Pending {
            warn!(status = %order.status, "Order is not pending");
            return Err(OrderError::InvalidState { id, status: order.status });
        }

        let sale = self.sales.create_sale_from_order(&order, admin.id).await?;

        let action = OrderAction::MarkDelivered { sale_id: sale.id, at: Utc::now() };
        match self.inner.perform_action(id, action).await {
            Ok(delivered) => {
                info!(sale_id = sale.id, "Order delivered");
                Ok(delivered)
            }
            Err(e) => {
                error!(error = %e, sale_id = sale.id, "Delivery failed, discarding sale");
                if let Err(discard) = self.sales.discard_sale(sale.id).await {
                    error!(error = %discard, "Discarding sale failed");
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{BatchFailure, BatchMode, Entity, FrameworkError, ResourceRequest};
    use crate::auth::PasswordHash;
    use crate::customer_actor::CustomerAction;
    use crate::domain::{Customer, LineInput, Product, RecordStatus, Sale};
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_batch, expect_create, expect_delete, expect_get,
    };
    use rust_decimal::Decimal;
    use tokio::sync::mpsc::Receiver;

    struct Harness {
        client: OrderClient,
        orders: Receiver<ResourceRequest<Order>>,
        sales: Receiver<ResourceRequest<Sale>>,
        customers: Receiver<ResourceRequest<Customer>>,
        products: Receiver<ResourceRequest<Product>>,
    }

    fn harness() -> Harness {
        let (orders, order_rx) = create_mock_client(8);
        let (sales, sale_rx) = create_mock_client(8);
        let (customers, customer_rx) = create_mock_client(8);
        let (sessions, _) = create_mock_client(8);
        let (products, product_rx) = create_mock_client(8);
        let customers = CustomerClient::new(customers, crate::clients::SessionClient::new(sessions));
        let products = ProductClient::new(products);
        let sale_client = SaleClient::new(sales, customers.clone(), products.clone());
        Harness {
            client: OrderClient::new(orders, customers, products, sale_client),
            orders: order_rx,
            sales: sale_rx,
            customers: customer_rx,
            products: product_rx,
        }
    }

    fn admin() -> Administrator {
        Administrator {
            id: 1,
            status: RecordStatus::Active,
            nickname: "admin".into(),
            password_hash: PasswordHash::new("admin123"),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn pending_order() -> Order {
        Order::from_create_params(
            5,
            OrderCreate {
                customer_id: 2,
                administrator_id: 1,
                address: "Harbor 1".into(),
                charged_amount: Decimal::from(15),
                lines: vec![LineItem { product_id: 3, quantity: Decimal::from(3), unit_cost: Decimal::from(5) }],
            },
        )
        .unwrap()
    }

    fn sale_for(order: &Order, id: u64) -> Sale {
        Sale {
            id,
            status: RecordStatus::Active,
            customer_id: order.customer_id,
            administrator_id: 1,
            order_id: Some(order.id),
            lines: order.lines.clone(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_deliver_creates_sale_then_marks_order() {
        let Harness { client, mut orders, mut sales, .. } = harness();
        let task = tokio::spawn(async move { client.deliver_order(&admin(), 5).await });

        let (id, respond_to) = expect_get(&mut orders).await.expect("Expected Get request");
        assert_eq!(id, 5);
        let order = pending_order();
        respond_to.send(Ok(Some(order.clone()))).unwrap();

        let (params, respond_to) = expect_create(&mut sales).await.expect("Expected sale Create");
        assert_eq!(params.order_id, Some(5));
        assert_eq!(params.lines, order.lines);
        respond_to.send(Ok(sale_for(&order, 11))).unwrap();

        let (id, action, respond_to) = expect_action(&mut orders).await.expect("Expected Action request");
        assert_eq!(id, 5);
        let mut delivered = order.clone();
        let result = delivered.handle_action(action);
        respond_to.send(result.map_err(FrameworkError::Entity)).unwrap();

        let delivered = task.await.unwrap().unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
        assert_eq!(delivered.sale_id, Some(11));
    }

    #[tokio::test]
    async fn test_deliver_discards_sale_when_transition_fails() {
        let Harness { client, mut orders, mut sales, .. } = harness();
        let task = tokio::spawn(async move { client.deliver_order(&admin(), 5).await });

        let (_, respond_to) = expect_get(&mut orders).await.expect("Expected Get request");
        let order = pending_order();
        respond_to.send(Ok(Some(order.clone()))).unwrap();

        let (_, respond_to) = expect_create(&mut sales).await.expect("Expected sale Create");
        respond_to.send(Ok(sale_for(&order, 11))).unwrap();

        // Someone else delivered it in the meantime
        let (_, _, respond_to) = expect_action(&mut orders).await.expect("Expected Action request");
        respond_to
            .send(Err(FrameworkError::Entity(OrderError::InvalidState { id: 5, status: OrderStatus::Delivered })))
            .unwrap();

        let (id, respond_to) = expect_delete(&mut sales).await.expect("Expected sale Delete");
        assert_eq!(id, 11);
        respond_to.send(Ok(sale_for(&order, 11))).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, OrderError::InvalidState { id: 5, status: OrderStatus::Delivered });
    }

    #[tokio::test]
    async fn test_deliver_rejects_delivered_order_without_a_sale() {
        let Harness { client, mut orders, mut sales, .. } = harness();
        let task = tokio::spawn(async move { client.deliver_order(&admin(), 5).await });

        let (_, respond_to) = expect_get(&mut orders).await.expect("Expected Get request");
        let mut order = pending_order();
        order.status = OrderStatus::Delivered;
        respond_to.send(Ok(Some(order))).unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, OrderError::InvalidState { .. }));
        assert!(sales.try_recv().is_err(), "no sale may be created");
    }

    #[tokio::test]
    async fn test_deliver_missing_order_is_not_found() {
        let Harness { client, mut orders, .. } = harness();
        let task = tokio::spawn(async move { client.deliver_order(&admin(), 9).await });

        let (_, respond_to) = expect_get(&mut orders).await.expect("Expected Get request");
        respond_to.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), OrderError::NotFound("9".into()));
    }

    #[tokio::test]
    async fn test_create_reports_missing_fields_with_line_problems() {
        let Harness { client, mut customers, mut products, .. } = harness();
        let new = NewOrder { products: vec![LineInput::default()], ..NewOrder::default() };

        let err = client.create_order(&admin(), new).await.unwrap_err();
        match err {
            OrderError::Validation(errors) => {
                for key in ["customer_id", "charged_amount", "address", "product_1"] {
                    assert!(errors.contains_key(key), "missing {key}");
                }
                assert_eq!(errors.get("address").unwrap(), ["is required".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(customers.try_recv().is_err(), "no customer may be held");
        assert!(products.try_recv().is_err(), "no stock may be touched");
    }

    #[tokio::test]
    async fn test_create_releases_customer_when_lines_are_rejected() {
        let Harness { client, mut customers, mut products, .. } = harness();
        let new = NewOrder {
            customer_id: Some(2),
            charged_amount: Some(Decimal::from(10)),
            address: Some("Harbor 1".into()),
            products: vec![LineInput::new(3, Decimal::ONE)],
        };
        let task = tokio::spawn(async move { client.create_order(&admin(), new).await });

        let (id, action, respond_to) = expect_action(&mut customers).await.expect("Expected customer Hold");
        assert_eq!((id, action), (2, CustomerAction::Hold));
        respond_to.send(Ok(())).unwrap();

        let (_, mode, respond_to) = expect_batch(&mut products).await.expect("Expected Batch request");
        assert_eq!(mode, BatchMode::Commit);
        respond_to
            .send(Err(FrameworkError::BatchRejected(vec![BatchFailure {
                position: 0,
                key: "3".into(),
                error: FrameworkError::NotFound("3".into()),
            }])))
            .unwrap();

        let (id, action, respond_to) = expect_action(&mut customers).await.expect("Expected customer Release");
        assert_eq!((id, action), (2, CustomerAction::Release));
        respond_to.send(Ok(())).unwrap();

        match task.await.unwrap() {
            Err(OrderError::Validation(errors)) => assert!(errors.contains_key("product_3")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
