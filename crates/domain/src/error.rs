//! Error types shared by the domain and application layers.

/// A caller-supplied argument that breaks a business rule.
///
/// The `Display` text of each variant is the message surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("Customer name should not be blank")]
    BlankCustomerName,

    #[error("Customer already exists so you can't sign in")]
    CustomerAlreadyExists,

    #[error("The customer does not exist")]
    UnknownCustomer,

    #[error("The product does not exist")]
    UnknownProduct,

    #[error("Product code should not be blank")]
    BlankProductCode,

    #[error("Product price should not be negative")]
    NegativePrice,

    #[error("Product price exceeds the maximum allowed")]
    PriceTooHigh,
}

/// Top-level error returned by domain construction and application use-cases.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// A business rule rejected the call.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// A port implementation failed; the source is opaque to the core.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ShopError {
    /// Wrap any store-level failure.
    #[must_use]
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }

    /// The rejected business rule, if this is a validation failure.
    #[must_use]
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            Self::InvalidArgument(inner) => Some(*inner),
            Self::Storage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_exact_message_through_shop_error() {
        let err = ShopError::from(InvalidArgument::CustomerAlreadyExists);
        assert_eq!(
            err.to_string(),
            "Customer already exists so you can't sign in"
        );
        assert_eq!(
            err.invalid_argument(),
            Some(InvalidArgument::CustomerAlreadyExists)
        );
    }

    #[test]
    fn should_keep_source_when_wrapping_storage_error() {
        let io = std::io::Error::other("disk full");
        let err = ShopError::storage(io);

        assert_eq!(err.to_string(), "storage error");
        assert!(err.invalid_argument().is_none());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }
}
