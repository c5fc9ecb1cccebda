//! Two-step checkout flow: customer details, then payment.
//!
//! DESIGN
//! ======
//! The step machine only has two states. `Details -> Payment` is gated by
//! [`CheckoutState::is_details_valid`]; `Payment -> Details` always succeeds.
//! Side effects (scrolling, opening the messenger link) live in the component;
//! this model stays pure so the transitions are testable.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::types::PaymentMethod;

/// Current checkout screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutStep {
    #[default]
    Details,
    Payment,
}

/// Customer-selected transaction intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    Deposit,
    Withdraw,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [ServiceType::Deposit, ServiceType::Withdraw];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// Capitalised label used in the form and the order message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Deposit => "💰",
            Self::Withdraw => "💸",
        }
    }
}

/// Form and step state for one checkout session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutState {
    pub step: CheckoutStep,
    pub customer_name: String,
    pub contact_number: String,
    pub service_type: ServiceType,
    /// Selected payment method id; `None` until methods load.
    pub payment_method_id: Option<String>,
    pub notes: String,
}

impl CheckoutState {
    /// Both required contact fields are filled in.
    pub fn is_details_valid(&self) -> bool {
        !self.customer_name.is_empty() && !self.contact_number.is_empty()
    }

    /// Move to the payment step. Returns `false` (and stays put) when the
    /// details are incomplete.
    pub fn proceed_to_payment(&mut self) -> bool {
        if !self.is_details_valid() {
            return false;
        }
        self.step = CheckoutStep::Payment;
        true
    }

    pub fn back_to_details(&mut self) {
        self.step = CheckoutStep::Details;
    }

    /// Select the first method once the list is non-empty and nothing is
    /// chosen yet. Returns whether a default was applied.
    pub fn ensure_default_payment_method(&mut self, methods: &[PaymentMethod]) -> bool {
        if self.payment_method_id.is_some() {
            return false;
        }
        let Some(first) = methods.first() else {
            return false;
        };
        self.payment_method_id = Some(first.id.clone());
        true
    }

    pub fn selected_payment_method<'a>(&self, methods: &'a [PaymentMethod]) -> Option<&'a PaymentMethod> {
        let id = self.payment_method_id.as_deref()?;
        methods.iter().find(|m| m.id == id)
    }

    /// Name shown for the chosen method, falling back to its id when the
    /// method is not (or no longer) in the loaded list.
    pub fn payment_method_label(&self, methods: &[PaymentMethod]) -> String {
        self.selected_payment_method(methods)
            .map(|m| m.name.clone())
            .or_else(|| self.payment_method_id.clone())
            .unwrap_or_default()
    }
}
