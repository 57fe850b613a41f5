//! # hexashop-domain
//!
//! Pure domain model for the hexashop cart service.
//!
//! ## Responsibilities
//! - Typed identifiers for customers and products
//! - Define **Products** (immutable catalog items with an exact decimal price)
//! - Define **Customers** (a unique login plus an ordered, duplicate-permitting cart)
//! - Compute the cart total
//! - Error conventions shared with the application layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or from IO crates.
//! Store boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod customer;
pub mod product;
