//! Line items shared by orders and sales, and the structural checks run on requested lines.

use super::{FieldErrors, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A product, a quantity and the unit cost captured when the line was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
}

pub type OrderLine = LineItem;
pub type SaleLine = LineItem;

/// A requested line as it arrives from a caller. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
}

impl LineInput {
    pub fn new(product_id: ProductId, quantity: Decimal) -> Self {
        Self {
            product_id: Some(product_id),
            quantity: Some(quantity),
        }
    }
}

/// Key under which problems with a product's line are reported.
pub fn line_key(product_id: ProductId) -> String {
    format!("product_{product_id}")
}

/// Structural screening that needs no ledger access.
///
/// Returns the lines worth checking against the ledger, in request order, together with
/// every problem found. A line with a missing field is reported under its 1-based position
/// and skipped; the remaining lines are still screened.
pub fn screen_lines(lines: &[LineInput]) -> (Vec<(ProductId, Decimal)>, FieldErrors) {
    let mut errors = FieldErrors::new();
    let mut accepted = Vec::with_capacity(lines.len());
    let mut seen = BTreeSet::new();

    if lines.is_empty() {
        errors.add("products", "at least one product is required");
    }

    for (index, line) in lines.iter().enumerate() {
        let (product_id, quantity) = match (line.product_id, line.quantity) {
            (Some(product_id), Some(quantity)) => (product_id, quantity),
            _ => {
                errors.add(format!("product_{}", index + 1), "missing product id or quantity");
                continue;
            }
        };

        if !seen.insert(product_id) {
            errors.add(line_key(product_id), format!("product {product_id} is duplicated"));
            continue;
        }

        if quantity < Decimal::ONE {
            errors.add(line_key(product_id), "quantity must be at least 1");
            continue;
        }

        accepted.push((product_id, quantity));
    }

    (accepted, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_distinct_lines_in_order() {
        let (accepted, errors) = screen_lines(&[
            LineInput::new(3, Decimal::from(2)),
            LineInput::new(1, Decimal::ONE),
        ]);
        assert!(errors.is_empty());
        assert_eq!(accepted, vec![(3, Decimal::from(2)), (1, Decimal::ONE)]);
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let (accepted, errors) = screen_lines(&[]);
        assert!(accepted.is_empty());
        assert!(errors.contains_key("products"));
    }

    #[test]
    fn test_collects_every_problem() {
        let (accepted, errors) = screen_lines(&[
            LineInput::new(5, Decimal::ONE),
            LineInput { product_id: Some(8), quantity: None },
            LineInput::new(5, Decimal::from(4)),
            LineInput::new(6, Decimal::ZERO),
            LineInput::new(7, Decimal::from(2)),
        ]);

        assert_eq!(accepted, vec![(5, Decimal::ONE), (7, Decimal::from(2))]);
        assert!(errors.contains_key("product_2"), "missing field keyed by position");
        assert_eq!(errors.get("product_5").unwrap(), ["product 5 is duplicated".to_string()]);
        assert_eq!(errors.get("product_6").unwrap(), ["quantity must be at least 1".to_string()]);
        assert_eq!(errors.len(), 3);
    }
}
