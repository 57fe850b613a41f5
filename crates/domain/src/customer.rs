//! Customer — a signed-up shopper and the products sitting in their cart.
//!
//! A [`Customer`] is a value: every change produces a new value through one of
//! the `with_*` methods, which the caller then hands to the customer store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, ShopError};
use crate::id::CustomerId;
use crate::product::Product;

/// A customer identified by a unique login, holding an ordered cart.
///
/// The cart keeps insertion order and allows the same product more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    id: CustomerId,
    name: String,
    cart: Vec<Product>,
}

impl Customer {
    /// A new customer with a fresh id and an empty cart.
    ///
    /// The name is not checked here; use [`Customer::validate`] or
    /// [`Customer::validate_name`] before persisting.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            cart: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// The login, unique across customers.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of the prices of every product in the cart, zero when empty.
    ///
    /// Every price is at most [`MAX_PRICE`](crate::product::MAX_PRICE), so the
    /// sum stays representable for any cart that fits in memory.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart
            .iter()
            .fold(Decimal::ZERO, |total, product| total + product.price())
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_cart(self, cart: Vec<Product>) -> Self {
        Self { cart, ..self }
    }

    /// Append `product` after the existing cart content.
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.cart.push(product);
        self
    }

    /// Check that `name` can be used as a login.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::BlankCustomerName`] when `name` is empty or
    /// only whitespace.
    pub fn validate_name(name: &str) -> Result<(), ShopError> {
        if name.trim().is_empty() {
            return Err(InvalidArgument::BlankCustomerName.into());
        }
        Ok(())
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::BlankCustomerName`] when the name is blank.
    pub fn validate(&self) -> Result<(), ShopError> {
        Self::validate_name(&self.name)
    }
}

#[derive(Deserialize)]
struct CustomerRecord {
    id: CustomerId,
    name: String,
    cart: Vec<Product>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ShopError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        let customer = Customer {
            id: record.id,
            name: record.name,
            cart: record.cart,
        };
        customer.validate()?;
        Ok(customer)
    }
}
