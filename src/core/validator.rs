//! Request validation
//!
//! [`RequestValidator`] checks a [`SplitRequest`] before it reaches the
//! ledger. Validation is a pure function of the request and the configured
//! address predicate: it never looks at ledger state, so it needs no lock and
//! can run on any number of threads at once.
//!
//! Checks run in order and stop at the first failure:
//! 1. recipients and amounts are non-empty and of equal length
//! 2. every recipient passes the address predicate
//! 3. every amount is strictly greater than zero

use crate::core::traits::AddressValidator;
use crate::types::{SplitRequest, ValidatedRequest, ValidationError};
use sha3::{Digest, Keccak256};
use std::sync::Arc;

/// EVM address predicate
///
/// Accepts 40 hex digits with an optional lowercase `0x` prefix. All-lowercase
/// and all-uppercase digits are accepted as is; mixed case must carry a valid
/// EIP-55 checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmAddressValidator;

impl AddressValidator for EvmAddressValidator {
    fn is_valid_address(&self, address: &str) -> bool {
        let digits = address.strip_prefix("0x").unwrap_or(address);
        if digits.len() != 40 || hex::decode(digits).is_err() {
            return false;
        }

        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        !(has_lower && has_upper) || has_valid_checksum(digits)
    }
}

/// EIP-55: a hex letter is uppercase iff the matching nibble of
/// `keccak256(lowercase digits)` is 8 or more
fn has_valid_checksum(digits: &str) -> bool {
    let hash = Keccak256::digest(digits.to_ascii_lowercase().as_bytes());

    digits.bytes().enumerate().all(|(i, digit)| {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        digit.is_ascii_digit() || digit.is_ascii_uppercase() == (nibble >= 8)
    })
}

/// Stateless validator for split requests
#[derive(Clone)]
pub struct RequestValidator {
    addresses: Arc<dyn AddressValidator>,
}

impl RequestValidator {
    /// Create a validator using the given address predicate
    pub fn new(addresses: impl AddressValidator + 'static) -> Self {
        RequestValidator {
            addresses: Arc::new(addresses),
        }
    }

    /// Validate a request, returning it wrapped as a [`ValidatedRequest`]
    ///
    /// # Errors
    ///
    /// - `CountMismatch` if the lists are empty or differ in length
    /// - `InvalidAddress(index)` for the first malformed recipient
    /// - `InvalidAmount(index)` for the first zero amount
    pub fn validate(&self, request: SplitRequest) -> Result<ValidatedRequest, ValidationError> {
        let recipients = request.recipients.len();
        let amounts = request.amounts.len();
        if recipients == 0 || recipients != amounts {
            return Err(ValidationError::count_mismatch(recipients, amounts));
        }

        if let Some((index, address)) = request
            .recipients
            .iter()
            .enumerate()
            .find(|(_, address)| !self.addresses.is_valid_address(address.as_str()))
        {
            return Err(ValidationError::invalid_address(index, address.as_str()));
        }

        if let Some(index) = request.amounts.iter().position(|amount| amount.is_zero()) {
            return Err(ValidationError::InvalidAmount { index });
        }

        Ok(ValidatedRequest::new(request))
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(EvmAddressValidator)
    }
}
