/// Reference bookkeeping for records that point at a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAction {
    Hold,
    Release,
}
