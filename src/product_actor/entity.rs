use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::actor_framework::Entity;
use crate::domain::{validate_fields, FieldErrors, Product, ProductCreate, ProductId, ProductPatch, RecordStatus};
use chrono::Utc;
use rust_decimal::Decimal;

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Registers a product with zero stock after checking its catalog fields.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let mut errors = validate_fields(&params);
        check_price(&mut errors, "sell_price", Some(params.sell_price));
        check_price(&mut errors, "base_price", Some(params.base_price));
        errors.into_result().map_err(ProductError::Validation)?;

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            sell_price: params.sell_price,
            base_price: params.base_price,
            unit: params.unit,
            stock: Decimal::ZERO,
            status: RecordStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
            references: 0,
        })
    }

    fn on_delete(&self) -> Result<(), ProductError> {
        if self.references > 0 {
            return Err(ProductError::InUse(self.id.to_string()));
        }
        Ok(())
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        let mut errors = validate_fields(&patch);
        check_price(&mut errors, "sell_price", patch.sell_price);
        check_price(&mut errors, "base_price", patch.base_price);
        errors.into_result().map_err(ProductError::Validation)?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(sell_price) = patch.sell_price {
            self.sell_price = sell_price;
        }
        if let Some(base_price) = patch.base_price {
            self.base_price = base_price;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// # Errors
    /// `InvalidQuantity` for non-positive amounts, `InsufficientStock` when a removal or
    /// reservation exceeds the stock on hand. Either way the product is left unchanged.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.stock)),
            ProductAction::AddStock(amount) => {
                ensure_positive(amount)?;
                self.stock += amount;
                self.updated_at = Some(Utc::now());
                Ok(ProductActionResult::Adjusted(self.clone()))
            }
            ProductAction::RemoveStock(amount) => {
                self.take_stock(amount)?;
                Ok(ProductActionResult::Adjusted(self.clone()))
            }
            ProductAction::Reserve(quantity) => {
                self.take_stock(quantity)?;
                self.references += 1;
                Ok(ProductActionResult::Reserved { unit_cost: self.sell_price })
            }
            ProductAction::Release(quantity) => {
                ensure_positive(quantity)?;
                self.stock += quantity;
                self.references = self.references.saturating_sub(1);
                self.updated_at = Some(Utc::now());
                Ok(ProductActionResult::Adjusted(self.clone()))
            }
        }
    }
}

impl Product {
    fn take_stock(&mut self, amount: Decimal) -> Result<(), ProductError> {
        ensure_positive(amount)?;
        if amount > self.stock {
            return Err(ProductError::InsufficientStock {
                requested: amount,
                available: self.stock,
            });
        }
        self.stock -= amount;
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), ProductError> {
    if amount <= Decimal::ZERO {
        return Err(ProductError::InvalidQuantity(amount));
    }
    Ok(())
}

fn check_price(errors: &mut FieldErrors, field: &str, price: Option<Decimal>) {
    if matches!(price, Some(price) if price.is_sign_negative()) {
        errors.add(field, "must not be negative");
    }
}
