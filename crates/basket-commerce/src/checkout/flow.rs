//! Checkout flow state machine.

use crate::checkout::AddressRecord;
use crate::ids::OrderId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Shipping address entry and per-line quantity selection.
    Address,
    /// Order review before submission.
    Review,
    /// Order placed. Terminal: no transition leads back out.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "address",
            CheckoutStep::Review => "review",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "Shipping address",
            CheckoutStep::Review => "Review your order",
            CheckoutStep::Confirmation => "Order confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::Review => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

/// Checkout flow state.
///
/// Forward transitions only happen through `complete_address` and
/// `complete_order`, which the session calls after the corresponding
/// backend submission succeeded. That makes "Review requires a stored
/// address" and "Confirmation requires a placed order" structural rather
/// than a convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    address_record: Option<AddressRecord>,
    order_id: Option<OrderId>,
    submitting: bool,
}

impl CheckoutFlow {
    /// Create a new flow at the address step.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Address,
            address_record: None,
            order_id: None,
            submitting: false,
        }
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The address record returned by the Order Source, once the address
    /// step has completed.
    pub fn address_record(&self) -> Option<&AddressRecord> {
        self.address_record.as_ref()
    }

    /// The placed order id, once the flow has completed.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    /// Check if the flow reached the terminal step.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }

    /// Check if a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Take the submission lock.
    ///
    /// Fails with `SubmissionInFlight` if a submission is already
    /// outstanding, so rapid repeated submit actions cannot send duplicate
    /// requests.
    pub fn begin_submission(&mut self) -> Result<(), CommerceError> {
        if self.submitting {
            return Err(CommerceError::SubmissionInFlight);
        }
        self.submitting = true;
        Ok(())
    }

    /// Release the submission lock after a response (success or failure).
    pub fn end_submission(&mut self) {
        self.submitting = false;
    }

    /// Record a successful address submission: `Address → Review`.
    pub fn complete_address(&mut self, record: AddressRecord) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Address {
            return Err(self.invalid_transition(CheckoutStep::Review));
        }
        self.address_record = Some(record);
        self.step = CheckoutStep::Review;
        Ok(())
    }

    /// Manual "previous" navigation: `Review → Address`.
    ///
    /// Always permitted from `Review`. Discards nothing: the stored
    /// address record and the cart are untouched.
    pub fn back_to_address(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(self.invalid_transition(CheckoutStep::Address));
        }
        self.step = CheckoutStep::Address;
        Ok(())
    }

    /// Record a successful order submission: `Review → Confirmation`.
    /// Releases the submission lock.
    pub fn complete_order(&mut self, order_id: OrderId) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(self.invalid_transition(CheckoutStep::Confirmation));
        }
        self.order_id = Some(order_id);
        self.step = CheckoutStep::Confirmation;
        self.submitting = false;
        Ok(())
    }

    fn invalid_transition(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
