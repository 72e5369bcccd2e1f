//! Merchant section: account-level information.

use centapp_types::Params;

use crate::section::Section;
use crate::{ApiResponse, CentApp, ClientError};

/// Handle for `/merchant` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Merchant<'a> {
    section: Section<'a>,
}

impl<'a> Merchant<'a> {
    pub(crate) fn new(app: &'a CentApp) -> Self {
        Self {
            section: Section::new(app, "merchant"),
        }
    }

    /// Current balance of the merchant account, per currency.
    pub async fn balance(&self) -> Result<ApiResponse, ClientError> {
        self.section.get("balance", &Params::new()).await
    }
}
