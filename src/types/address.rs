//! Participant addresses
//!
//! An [`Address`] is an opaque identifier. Constructing one never validates it;
//! whether a string is a well-formed address is decided by the
//! [`AddressValidator`](crate::core::traits::AddressValidator) the ledger is
//! configured with.

use std::fmt;

/// Opaque participant identifier (sender or recipient)
///
/// No case or format normalization is applied: `0xAB..` and `0xab..` are
/// different addresses as far as the ledger's balance book is concerned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    /// Wrap a raw address string without validating it
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Address::new(address)
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Address(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_kept_verbatim() {
        let address = Address::new("  0xAbC ");
        assert_eq!(address.as_str(), "  0xAbC ");
        assert_eq!(address.to_string(), "  0xAbC ");
    }

    #[test]
    fn test_addresses_are_case_sensitive() {
        assert_ne!(Address::from("0xab"), Address::from("0xAB"));
    }
}
