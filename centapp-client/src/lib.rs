//! # CentApp Client SDK
//!
//! A typed Rust client for the CentApp payment API.
//!
//! ```no_run
//! use centapp_client::{CentApp, CreateBill, Currency};
//!
//! # async fn run() -> Result<(), centapp_client::ClientError> {
//! let app = CentApp::new("my-token");
//! let resp = app
//!     .bill()
//!     .create(&CreateBill::new(100.0, "shop123").currency_in(Currency::USD))
//!     .await?;
//! println!("{}", resp.body());
//! # Ok(())
//! # }
//! ```
//!
//! Every call sends its parameters both as the query string and as a
//! form-encoded body, and returns the decoded JSON body as an
//! [`ApiResponse`]. A 4xx/5xx status with a JSON body is logged at `warn`
//! and returned as [`ApiResponse::Failure`] rather than as an error.

mod bill;
mod error;
mod merchant;
mod payment;
mod payout;
mod response;
mod section;

use std::fmt;
use std::time::Duration;

use reqwest::Client;

pub use bill::Bill;
pub use centapp_types::{
    CreateBill, Currency, LinkType, Params, PayoutAccountType, RegularPayout, SearchFilter,
};
pub use error::ClientError;
pub use merchant::Merchant;
pub use payment::Payment;
pub use payout::Payout;
pub use response::ApiResponse;

/// Production API address.
pub const DEFAULT_BASE_URL: &str = "https://cent.app/api/v1";

/// CentApp API client.
///
/// Holds the bearer token, base address and connection pool. Cloning is
/// cheap and shares the pool.
#[derive(Clone)]
pub struct CentApp {
    token: String,
    base_url: String,
    http: Client,
    timeout: Option<Duration>,
}

impl CentApp {
    /// Creates a client for the production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            timeout: None,
        }
    }

    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Uses a preconfigured HTTP client. A timeout set with
    /// [`CentApp::with_timeout`] still applies on top of it.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Applies a per-request timeout. Expiry surfaces as [`ClientError::Http`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn bill(&self) -> Bill<'_> {
        Bill::new(self)
    }

    pub fn payment(&self) -> Payment<'_> {
        Payment::new(self)
    }

    pub fn merchant(&self) -> Merchant<'_> {
        Merchant::new(self)
    }

    pub fn payout(&self) -> Payout<'_> {
        Payout::new(self)
    }
}

impl fmt::Debug for CentApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CentApp")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
