use crate::domain::Product;
use rust_decimal::Decimal;

/// Custom actions for Product entities.
///
/// Every stock movement goes through one of these so the ledger actor applies it in a
/// single step. Amounts must be positive.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Restocks. Also used to hand back reserved stock.
    AddStock(Decimal),
    /// Takes stock out of the ledger.
    ///
    /// # Errors
    /// Fails without touching the product if the amount exceeds the stock on hand.
    RemoveStock(Decimal),
    /// Takes stock for an order or sale line and reports the sell price at that moment.
    /// The line then holds the product until released.
    Reserve(Decimal),
    /// Gives back the stock of a line that was never stored, dropping its hold.
    Release(Decimal),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(Decimal),
    /// Product after an add/remove.
    Adjusted(Product),
    Reserved { unit_cost: Decimal },
}
