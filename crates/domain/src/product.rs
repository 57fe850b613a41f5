//! Product — an immutable catalog item that can be placed in a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, ShopError};
use crate::id::ProductId;

/// Highest accepted unit price: 1 000 000 000 000.
///
/// Keeps any cart that fits in memory far below `Decimal::MAX`, so summing a
/// cart cannot overflow.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A catalog item. Products are created by the catalog and never mutated.
///
/// Deserialized products go through [`Product::validate`] like built ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    code: String,
    label: String,
    price: Decimal,
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Unique human-readable key used to look the product up.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::BlankProductCode`] when `code` is blank,
    /// [`InvalidArgument::NegativePrice`] when `price` is below zero and
    /// [`InvalidArgument::PriceTooHigh`] when it exceeds [`MAX_PRICE`].
    pub fn validate(&self) -> Result<(), ShopError> {
        if self.code.trim().is_empty() {
            return Err(InvalidArgument::BlankProductCode.into());
        }
        if self.price < Decimal::ZERO {
            return Err(InvalidArgument::NegativePrice.into());
        }
        if self.price > MAX_PRICE {
            return Err(InvalidArgument::PriceTooHigh.into());
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    code: String,
    label: String,
    price: Decimal,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ShopError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = Product {
            id: record.id,
            code: record.code,
            label: record.label,
            price: record.price,
        };
        product.validate()?;
        Ok(product)
    }
}

/// Step-by-step builder for [`Product`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    id: Option<ProductId>,
    code: Option<String>,
    label: Option<String>,
    price: Option<Decimal>,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder, validate, and return a [`Product`].
    ///
    /// A missing id is replaced by a fresh one and a missing price by zero.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidArgument`] if the code is missing or blank,
    /// or if the price is negative or above [`MAX_PRICE`].
    pub fn build(self) -> Result<Product, ShopError> {
        let product = Product {
            id: self.id.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
            price: self.price.unwrap_or(Decimal::ZERO),
        };
        product.validate()?;
        Ok(product)
    }
}
