//! Customer service — sign-up and cart use-cases.

use hexashop_domain::customer::Customer;
use hexashop_domain::error::{InvalidArgument, ShopError};

use crate::ports::{CustomerRepository, ProductRepository};

/// Application service enforcing the sign-up and cart rules.
///
/// Every mutating call validates, reads, builds an updated [`Customer`] and
/// returns whatever the customer store yields from `save`.
pub struct CustomerService<C, P> {
    customers: C,
    products: P,
}

impl<C: CustomerRepository, P: ProductRepository> CustomerService<C, P> {
    /// Create a new service backed by the given stores.
    pub fn new(customers: C, products: P) -> Self {
        Self {
            customers,
            products,
        }
    }

    /// Register a new customer with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::BlankCustomerName`] without touching the
    /// store when `name` is blank, [`InvalidArgument::CustomerAlreadyExists`]
    /// when the login is taken, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub fn sign_up(&self, name: &str) -> Result<Customer, ShopError> {
        Customer::validate_name(name)?;
        if self.customers.find_by_login(name)?.is_some() {
            tracing::debug!("login already taken");
            return Err(InvalidArgument::CustomerAlreadyExists.into());
        }
        let saved = self.customers.save(Customer::new(name))?;
        tracing::debug!(customer_id = %saved.id(), "customer signed up");
        Ok(saved)
    }

    /// Append the product identified by `product_code` to the customer's cart.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::UnknownCustomer`] when `login` is not found,
    /// [`InvalidArgument::UnknownProduct`] when `product_code` is not in the
    /// catalog, or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub fn add_product_to_cart(
        &self,
        login: &str,
        product_code: &str,
    ) -> Result<Customer, ShopError> {
        let customer = self.existing_customer(login)?;
        let product = self
            .products
            .find_product_by_code(product_code)?
            .ok_or(InvalidArgument::UnknownProduct)?;
        let saved = self.customers.save(customer.with_product(product))?;
        tracing::debug!(
            customer_id = %saved.id(),
            cart_len = saved.cart_len(),
            "product added to cart"
        );
        Ok(saved)
    }

    /// Remove every product from the customer's cart.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::UnknownCustomer`] when `login` is not found,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub fn empty_cart(&self, login: &str) -> Result<Customer, ShopError> {
        let customer = self.existing_customer(login)?;
        let saved = self.customers.save(customer.with_cart(Vec::new()))?;
        tracing::debug!(customer_id = %saved.id(), "cart emptied");
        Ok(saved)
    }

    /// Look up a customer by login.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub fn find_customer(&self, login: &str) -> Result<Option<Customer>, ShopError> {
        self.customers.find_by_login(login)
    }

    fn existing_customer(&self, login: &str) -> Result<Customer, ShopError> {
        self.customers.find_by_login(login)?.ok_or_else(|| {
            tracing::debug!("unknown customer");
            InvalidArgument::UnknownCustomer.into()
        })
    }
}
