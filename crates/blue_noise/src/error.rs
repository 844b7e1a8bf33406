//! Error types and result alias for the crate.
//!
//! The core has a single failure mode: a configuration rejected before any
//! grid or active-list allocation happens. The enum stays `#[non_exhaustive]`
//! so future variants are non-breaking.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_formats_message() {
        let err = Error::InvalidConfig("k must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: k must be > 0");
    }
}
