//! Payout section: transfers of merchant funds out of the platform.

use centapp_types::{Params, RegularPayout, SearchFilter, ToParams};

use crate::section::Section;
use crate::{ApiResponse, CentApp, ClientError};

/// Handle for `/payout` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Payout<'a> {
    section: Section<'a>,
}

impl<'a> Payout<'a> {
    pub(crate) fn new(app: &'a CentApp) -> Self {
        Self {
            section: Section::new(app, "payout"),
        }
    }

    /// Pays out to an account already registered in the merchant dashboard.
    pub async fn personal_create(
        &self,
        amount: f64,
        payout_account_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let params = Params::new()
            .with("amount", &amount)
            .with("payout_account_id", payout_account_id);
        self.section.post("personal/create", &params).await
    }

    /// Pays out to a bank card.
    pub async fn regular_create(&self, req: &RegularPayout) -> Result<ApiResponse, ClientError> {
        self.section.post("regular/create", &req.to_params()).await
    }

    /// Searches payouts by date. A `shop_id` on the filter is not sent.
    pub async fn search(&self, filter: &SearchFilter) -> Result<ApiResponse, ClientError> {
        self.section.get("search", &filter.date_params()).await
    }

    /// Unlike bills and payments, the payout id is keyed as `payout_id`.
    pub async fn status(&self, payout_id: &str) -> Result<ApiResponse, ClientError> {
        let params = Params::new().with("payout_id", payout_id);
        self.section.get("status", &params).await
    }
}
