//! Bill section: invoices issued on behalf of a shop.

use centapp_types::{CreateBill, Params, SearchFilter, ToParams};

use crate::section::Section;
use crate::{ApiResponse, CentApp, ClientError};

/// Handle for `/bill` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Bill<'a> {
    section: Section<'a>,
}

impl<'a> Bill<'a> {
    pub(crate) fn new(app: &'a CentApp) -> Self {
        Self {
            section: Section::new(app, "bill"),
        }
    }

    /// Creates a bill and returns its payment link.
    pub async fn create(&self, req: &CreateBill) -> Result<ApiResponse, ClientError> {
        self.section.post("create", &req.to_params()).await
    }

    /// Enables or disables payments against a bill.
    pub async fn toggle_activity(
        &self,
        bill_id: &str,
        active: bool,
    ) -> Result<ApiResponse, ClientError> {
        let params = Params::new().with("id", bill_id).with("active", &active);
        self.section.post("toggle_activity", &params).await
    }

    /// Lists the payments made against a bill.
    pub async fn payments(&self, bill_id: &str) -> Result<ApiResponse, ClientError> {
        let params = Params::new().with("id", bill_id);
        self.section.get("payments", &params).await
    }

    pub async fn search(&self, filter: &SearchFilter) -> Result<ApiResponse, ClientError> {
        self.section.get("search", &filter.to_params()).await
    }

    pub async fn status(&self, bill_id: &str) -> Result<ApiResponse, ClientError> {
        let params = Params::new().with("id", bill_id);
        self.section.get("status", &params).await
    }
}
