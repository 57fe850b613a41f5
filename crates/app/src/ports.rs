//! Port definitions — traits that adapters implement.
//!
//! The customer and product stores are owned outside the core. Declaring
//! their traits here lets both the use-case layer and any adapter depend on
//! them without a circular dependency.

pub mod storage;

pub use storage::{CustomerRepository, ProductRepository};
