//! Error types for the wire vocabulary.

/// Failure to parse a literal code into one of the enumerated wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown currency: {0}. Supported: RUB, USD, EUR")]
    UnknownCurrency(String),

    #[error("Unknown link type: {0}. Supported: normal, multi")]
    UnknownLinkType(String),
}
