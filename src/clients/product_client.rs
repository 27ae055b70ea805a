use crate::actor_framework::{BatchFailure, BatchMode, FrameworkError, ResourceClient};
use crate::domain::{line_key, screen_lines, FieldErrors, LineInput, LineItem, Product, ProductCreate, ProductId, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Product ledger actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<Decimal, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_stock(&self, id: ProductId, amount: Decimal) -> Result<Product, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::AddStock(amount)).await? {
            ProductActionResult::Adjusted(product) => {
                info!(product_id = %id, remaining_stock = %product.stock, "Stock added");
                Ok(product)
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_stock(&self, id: ProductId, amount: Decimal) -> Result<Product, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::RemoveStock(amount)).await? {
            ProductActionResult::Adjusted(product) => {
                info!(product_id = %id, remaining_stock = %product.stock, "Stock removed");
                Ok(product)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Checks requested lines and, if nothing at all is wrong, takes their stock in one step.
    ///
    /// `errors` carries problems the caller already found in the rest of the request. Line
    /// problems are added to it under `product_<id>` keys. When anything has been collected the
    /// ledger still evaluates every line (so the report is complete) but keeps its stock.
    ///
    /// Returns one line per product with the sell price at the moment of reservation.
    #[instrument(skip(self, lines, errors), fields(lines = lines.len()))]
    pub async fn reserve_lines(
        &self,
        lines: &[LineInput],
        mut errors: FieldErrors,
    ) -> Result<Vec<LineItem>, ProductError> {
        let (accepted, screened) = screen_lines(lines);
        errors.merge(screened);
        if accepted.is_empty() {
            return Err(ProductError::Validation(errors));
        }

        let mode = if errors.is_empty() { BatchMode::Commit } else { BatchMode::DryRun };
        let actions = accepted
            .iter()
            .map(|(id, quantity)| (*id, ProductAction::Reserve(*quantity)))
            .collect();

        debug!(?mode, "Sending request");
        match self.inner.perform_batch(actions, mode).await {
            Ok(_) if mode == BatchMode::DryRun => Err(ProductError::Validation(errors)),
            Ok(results) => {
                let reserved = accepted
                    .into_iter()
                    .zip(results)
                    .map(|((product_id, quantity), result)| match result {
                        ProductActionResult::Reserved { unit_cost } => Ok(LineItem { product_id, quantity, unit_cost }),
                        other => Err(unexpected(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                info!(lines = reserved.len(), "Stock reserved");
                Ok(reserved)
            }
            Err(FrameworkError::BatchRejected(failures)) => {
                for BatchFailure { position, error, .. } in failures {
                    if let Some((product_id, _)) = accepted.get(position) {
                        errors.add(line_key(*product_id), line_failure_message(&error));
                    }
                }
                warn!(problems = errors.len(), "Reservation rejected");
                Err(ProductError::Validation(errors))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Hands reserved stock back to the ledger for lines that were never stored.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn release_lines(&self, lines: &[LineItem]) -> Result<(), ProductError> {
        debug!("Sending request");
        let actions = lines
            .iter()
            .map(|line| (line.product_id, ProductAction::Release(line.quantity)))
            .collect();
        self.inner.perform_batch(actions, BatchMode::Commit).await?;
        info!("Stock released");
        Ok(())
    }
}

fn line_failure_message(error: &FrameworkError<ProductError>) -> String {
    match error {
        FrameworkError::NotFound(_) => "product is not registered".to_string(),
        FrameworkError::Entity(ProductError::InsufficientStock { available, .. }) => {
            format!("not enough stock available, current stock: {available}")
        }
        other => other.to_string(),
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::Entity;
    use crate::domain::Unit;
    use crate::mock_framework::{create_mock_client, expect_action, expect_batch};

    #[tokio::test]
    async fn test_remove_stock_surfaces_insufficient_stock() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.remove_stock(3, Decimal::from(5)).await });

        let (id, action, respond_to) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, 3);
        assert_eq!(action, ProductAction::RemoveStock(Decimal::from(5)));
        respond_to
            .send(Err(FrameworkError::Entity(ProductError::InsufficientStock {
                requested: Decimal::from(5),
                available: Decimal::from(2),
            })))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, ProductError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn test_reserve_lines_dry_runs_when_request_already_has_problems() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            let lines = vec![LineInput::new(1, Decimal::from(2)), LineInput::new(2, Decimal::ONE)];
            client.reserve_lines(&lines, FieldErrors::single("address", "required")).await
        });

        let (actions, mode, respond_to) = expect_batch(&mut receiver).await.expect("Expected Batch request");
        assert_eq!(mode, BatchMode::DryRun);
        assert_eq!(actions.len(), 2);
        respond_to
            .send(Err(FrameworkError::BatchRejected(vec![BatchFailure {
                position: 1,
                key: "2".into(),
                error: FrameworkError::NotFound("2".into()),
            }])))
            .unwrap();

        match task.await.unwrap() {
            Err(ProductError::Validation(errors)) => {
                assert!(errors.contains_key("address"));
                assert_eq!(errors.get("product_2").unwrap(), ["product is not registered".to_string()]);
                assert!(!errors.contains_key("product_1"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reserve_lines_snapshots_sell_price() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            client.reserve_lines(&[LineInput::new(7, Decimal::from(3))], FieldErrors::new()).await
        });

        let (_, mode, respond_to) = expect_batch(&mut receiver).await.expect("Expected Batch request");
        assert_eq!(mode, BatchMode::Commit);
        respond_to
            .send(Ok(vec![ProductActionResult::Reserved { unit_cost: Decimal::new(500, 2) }]))
            .unwrap();

        let lines = task.await.unwrap().unwrap();
        assert_eq!(
            lines,
            vec![LineItem { product_id: 7, quantity: Decimal::from(3), unit_cost: Decimal::new(500, 2) }]
        );
    }

    #[tokio::test]
    async fn test_create_forwards_params() {
        let (inner, mut receiver) = create_mock_client::<Product>(4);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .create_product(ProductCreate::new("Rope", Decimal::ONE, Decimal::ONE, Unit::Meters))
                .await
        });

        let (params, respond_to) = crate::mock_framework::expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Rope");
        let product = Product::from_create_params(1, params).unwrap();
        respond_to.send(Ok(product)).unwrap();

        assert_eq!(task.await.unwrap().unwrap().id, 1);
    }
}
