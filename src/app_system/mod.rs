//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod store_system;
pub mod tracing;

pub use self::error::*;
pub use self::store_system::*;
pub use self::tracing::*;
