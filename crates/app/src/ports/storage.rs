//! Storage ports — the customer and product stores.

use std::sync::Arc;

use hexashop_domain::customer::Customer;
use hexashop_domain::error::ShopError;
use hexashop_domain::product::Product;

/// Store of customers, keyed by login.
///
/// No atomicity is required between [`find_by_login`](Self::find_by_login)
/// and [`save`](Self::save); an implementation that wants unique logins under
/// concurrent sign-ups must enforce it inside `save`.
pub trait CustomerRepository {
    /// Find the customer whose login is exactly `login`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Storage`] when the store cannot be read.
    fn find_by_login(&self, login: &str) -> Result<Option<Customer>, ShopError>;

    /// Persist `customer` and return the stored representation.
    ///
    /// Callers treat the returned value as authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Storage`] when the write fails.
    fn save(&self, customer: Customer) -> Result<Customer, ShopError>;
}

/// Read-only access to the product catalog.
pub trait ProductRepository {
    /// Find the product whose code is exactly `code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Storage`] when the catalog cannot be read.
    fn find_product_by_code(&self, code: &str) -> Result<Option<Product>, ShopError>;
}

macro_rules! forward_repositories {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: CustomerRepository + ?Sized> CustomerRepository for $ptr {
                fn find_by_login(&self, login: &str) -> Result<Option<Customer>, ShopError> {
                    (**self).find_by_login(login)
                }

                fn save(&self, customer: Customer) -> Result<Customer, ShopError> {
                    (**self).save(customer)
                }
            }

            impl<T: ProductRepository + ?Sized> ProductRepository for $ptr {
                fn find_product_by_code(&self, code: &str) -> Result<Option<Product>, ShopError> {
                    (**self).find_product_by_code(code)
                }
            }
        )+
    };
}

forward_repositories!(&T, Box<T>, Arc<T>);
