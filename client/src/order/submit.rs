//! Order submission strategies.
//!
//! DESIGN
//! ======
//! The storefront has no order backend. Placing an order opens a messenger
//! conversation pre-filled with the order text ([`MessengerHandoff`]). The
//! checkout component only sees [`OrderSubmitter`], so an API-backed
//! submitter can be provided through context instead without touching the UI.
//!
//! TRADE-OFFS
//! ==========
//! The hand-off is fire-and-forget: the browser gives no signal that the
//! message was actually sent, and a blocked popup is reported but not retried.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::message::OrderSummary;

/// Page id of the merchant's messenger inbox.
pub const MESSENGER_RECIPIENT_ID: &str = "61581085479475";

const MESSENGER_BASE_URL: &str = "https://m.me";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("order has no items")]
    EmptyOrder,
    #[error("browser window unavailable")]
    NoWindow,
    #[error("new window was blocked")]
    Blocked,
}

/// What a submitter did with the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Where the customer was sent to finish the order.
    pub url: String,
}

/// A way of getting a finished order to the merchant.
pub trait OrderSubmitter: Send + Sync {
    /// Submit `order`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the order is empty or the hand-off
    /// could not be started.
    fn submit(&self, order: &OrderSummary) -> Result<SubmitReceipt, SubmitError>;
}

/// Shared submitter handle provided via Leptos context.
pub type SharedSubmitter = Arc<dyn OrderSubmitter>;

/// Percent-encode with `encodeURIComponent` semantics.
pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Opens `https://m.me/<recipient>?text=<message>` in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessengerHandoff {
    pub recipient_id: String,
}

impl Default for MessengerHandoff {
    fn default() -> Self {
        Self { recipient_id: MESSENGER_RECIPIENT_ID.to_owned() }
    }
}

impl MessengerHandoff {
    pub fn deep_link(&self, message: &str) -> String {
        format!("{MESSENGER_BASE_URL}/{}?text={}", self.recipient_id, encode_uri_component(message))
    }
}

impl OrderSubmitter for MessengerHandoff {
    fn submit(&self, order: &OrderSummary) -> Result<SubmitReceipt, SubmitError> {
        if order.lines.is_empty() {
            return Err(SubmitError::EmptyOrder);
        }
        let url = self.deep_link(&order.to_message());
        open_in_new_context(&url)?;
        Ok(SubmitReceipt { url })
    }
}

fn open_in_new_context(url: &str) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) | Err(_) => Err(SubmitError::Blocked),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Ok(())
    }
}
