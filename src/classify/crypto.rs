//! Cryptocurrency address classifier.
//!
//! Donation sections list wallet addresses, which are long random-looking
//! strings. Three shapes are recognized:
//!
//! - legacy base58 addresses: `1` or `3` followed by 25–34 alphanumerics
//! - `0x` followed by 40 hex digits
//! - `4` followed by a digit or `A`/`B` and 93 more characters

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::classify::{Classifier, compile};
use crate::error::Result;

/// Legacy base58 address shape.
pub const BASE58_ADDRESS_PATTERN: &str = r"^[13][A-Za-z0-9]{25,34}$";

/// Hex address shape. Only the prefix is anchored.
pub const HEX_ADDRESS_PATTERN: &str = r"^0x[0-9a-fA-F]{40}";

/// 95-character addresses starting with `4`.
pub const EXTENDED_ADDRESS_PATTERN: &str = r"^4[0-9AB].{93}$";

static CRYPTO_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    let pattern =
        format!("{BASE58_ADDRESS_PATTERN}|{HEX_ADDRESS_PATTERN}|{EXTENDED_ADDRESS_PATTERN}");
    Arc::new(compile(&pattern).expect("crypto address pattern is valid"))
});

/// Accepts cryptocurrency wallet addresses.
#[derive(Clone, Debug)]
pub struct CryptoAddressClassifier {
    pattern: Arc<Regex>,
}

impl CryptoAddressClassifier {
    /// Create a crypto address classifier with the default pattern.
    pub fn new() -> Self {
        CryptoAddressClassifier {
            pattern: Arc::clone(&CRYPTO_REGEX),
        }
    }

    /// Create a crypto address classifier with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(CryptoAddressClassifier {
            pattern: Arc::new(compile(pattern)?),
        })
    }

    /// Get the regex pattern used by this classifier.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for CryptoAddressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for CryptoAddressClassifier {
    fn accepts(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    fn name(&self) -> &'static str {
        "crypto-address"
    }
}
