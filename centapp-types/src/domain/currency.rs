//! Enumerated wire values and their literal codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Currencies accepted by the CentApp API.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Returns the literal code sent over the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RUB" => Ok(Currency::RUB),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(ParseError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Presentation mode of a bill's payment link.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// Link is closed after a single successful payment.
    #[default]
    Normal,
    /// Link accepts any number of payments.
    Multi,
}

impl LinkType {
    pub fn code(&self) -> &'static str {
        match self {
            LinkType::Normal => "normal",
            LinkType::Multi => "multi",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LinkType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(LinkType::Normal),
            "multi" => Ok(LinkType::Multi),
            _ => Err(ParseError::UnknownLinkType(s.to_string())),
        }
    }
}

/// Destination kind of a regular payout. The API only supports cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoutAccountType {
    #[default]
    CreditCard,
}

impl PayoutAccountType {
    pub fn code(&self) -> &'static str {
        match self {
            PayoutAccountType::CreditCard => "credit_card",
        }
    }
}

impl fmt::Display for PayoutAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::RUB.code(), "RUB");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert!(matches!(
            "GBP".parse::<Currency>(),
            Err(ParseError::UnknownCurrency(code)) if code == "GBP"
        ));
    }

    #[test]
    fn test_link_type_codes() {
        assert_eq!(LinkType::Normal.to_string(), "normal");
        assert_eq!(LinkType::Multi.to_string(), "multi");
        assert_eq!("MULTI".parse::<LinkType>().unwrap(), LinkType::Multi);
        assert!("single".parse::<LinkType>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Currency::default(), Currency::RUB);
        assert_eq!(LinkType::default(), LinkType::Normal);
        assert_eq!(PayoutAccountType::default().code(), "credit_card");
    }
}
