//! # hexashop-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CustomerRepository` — find a customer by login, save a customer
//!   - `ProductRepository` — find a catalog product by code
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `CustomerService` — sign up, add to cart, empty cart, find
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hexashop-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
