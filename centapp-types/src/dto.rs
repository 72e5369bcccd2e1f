//! Typed requests for the operations with more than a couple of fields.

use crate::domain::{Currency, LinkType, Params, PayoutAccountType};
use crate::ports::ToParams;

// ─────────────────────────────────────────────────────────────────────────────
// Bill DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a bill.
///
/// Only `amount` and `shop_id` are required. Optional text fields that are
/// left unset (or set to an empty string) are not sent at all.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBill {
    pub amount: f64,
    pub shop_id: String,
    pub order_id: Option<String>,
    pub description: Option<String>,
    pub link_type: LinkType,
    pub currency_in: Currency,
    pub custom: Option<String>,
    pub payer_pays_commission: bool,
    pub name: Option<String>,
}

impl CreateBill {
    pub fn new(amount: f64, shop_id: impl Into<String>) -> Self {
        Self {
            amount,
            shop_id: shop_id.into(),
            order_id: None,
            description: None,
            link_type: LinkType::Normal,
            currency_in: Currency::RUB,
            custom: None,
            payer_pays_commission: true,
            name: None,
        }
    }

    /// Merchant-side order reference.
    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    pub fn currency_in(mut self, currency: Currency) -> Self {
        self.currency_in = currency;
        self
    }

    /// Opaque value echoed back in the payment notification.
    pub fn custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    pub fn payer_pays_commission(mut self, payer_pays: bool) -> Self {
        self.payer_pays_commission = payer_pays;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl ToParams for CreateBill {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("amount", &self.amount);
        params.insert_opt("order_id", self.order_id.as_deref());
        params.insert_opt("description", self.description.as_deref());
        params.insert("type", &self.link_type);
        params.insert("shop_id", self.shop_id.as_str());
        params.insert("currency_in", &self.currency_in);
        params.insert_opt("custom", self.custom.as_deref());
        params.insert("payer_pays_commission", &self.payer_pays_commission);
        params.insert_opt("name", self.name.as_deref());
        params
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Optional filters shared by the `search` endpoints.
///
/// Dates are passed through verbatim in the format the API documents
/// (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
    pub shop_id: Option<String>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn finish_date(mut self, date: impl Into<String>) -> Self {
        self.finish_date = Some(date.into());
        self
    }

    pub fn shop_id(mut self, shop_id: impl Into<String>) -> Self {
        self.shop_id = Some(shop_id.into());
        self
    }

    /// Only the date range, for endpoints that have no shop filter.
    pub fn date_params(&self) -> Params {
        let mut params = Params::new();
        params.insert_opt("start_date", self.start_date.as_deref());
        params.insert_opt("finish_date", self.finish_date.as_deref());
        params
    }
}

impl ToParams for SearchFilter {
    fn to_params(&self) -> Params {
        let mut params = self.date_params();
        params.insert_opt("shop_id", self.shop_id.as_deref());
        params
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payout DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to pay out merchant funds to a bank card.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPayout {
    pub amount: f64,
    pub currency: Currency,
    /// Card number.
    pub account_identifier: String,
    pub card_holder: String,
}

impl RegularPayout {
    pub fn new(
        amount: f64,
        currency: Currency,
        account_identifier: impl Into<String>,
        card_holder: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency,
            account_identifier: account_identifier.into(),
            card_holder: card_holder.into(),
        }
    }

    pub fn account_type(&self) -> PayoutAccountType {
        PayoutAccountType::CreditCard
    }
}

impl ToParams for RegularPayout {
    fn to_params(&self) -> Params {
        Params::new()
            .with("amount", &self.amount)
            .with("currency", &self.currency)
            .with("account_type", &self.account_type())
            .with("account_identifier", self.account_identifier.as_str())
            .with("card_holder", self.card_holder.as_str())
    }
}
