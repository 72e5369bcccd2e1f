//! Wire-level domain values for the CentApp API.

pub mod currency;
pub mod params;

pub use currency::{Currency, LinkType, PayoutAccountType};
pub use params::{ParamValue, Params};
