//! Payment section: inbound transactions against bills.

use centapp_types::{Params, SearchFilter, ToParams};

use crate::section::Section;
use crate::{ApiResponse, CentApp, ClientError};

/// Handle for `/payment` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Payment<'a> {
    section: Section<'a>,
}

impl<'a> Payment<'a> {
    pub(crate) fn new(app: &'a CentApp) -> Self {
        Self {
            section: Section::new(app, "payment"),
        }
    }

    pub async fn search(&self, filter: &SearchFilter) -> Result<ApiResponse, ClientError> {
        self.section.get("search", &filter.to_params()).await
    }

    pub async fn status(&self, payment_id: &str) -> Result<ApiResponse, ClientError> {
        let params = Params::new().with("id", payment_id);
        self.section.get("status", &params).await
    }
}
