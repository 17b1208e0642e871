//! Checkout session: drives the cart and flow through the Order Source.

use basket_commerce::cart::CartStore;
use basket_commerce::checkout::{
    Address, AddressRecord, CheckoutFlow, CheckoutStep, Order, PlacedOrder,
};
use basket_commerce::ids::OrderId;
use tracing::{info, warn};

use crate::auth::CurrentUser;
use crate::error::StorefrontError;
use crate::source::{AddressSubmission, OrderSource};

/// One user's checkout: the cart, the flow state, and the backend source.
///
/// The session is the only writer of the flow: forward transitions happen
/// exactly when the corresponding submission succeeded, so the flow can
/// never reach `Review` without a persisted address or `Confirmation`
/// without a placed order.
pub struct CheckoutSession<S> {
    source: S,
    cart: CartStore,
    flow: CheckoutFlow,
}

impl<S: OrderSource> CheckoutSession<S> {
    /// Start a checkout with an empty cart.
    pub fn new(source: S) -> Self {
        Self::with_cart(source, CartStore::new())
    }

    /// Start a checkout over an existing cart.
    pub fn with_cart(source: S, cart: CartStore) -> Self {
        Self {
            source,
            cart,
            flow: CheckoutFlow::new(),
        }
    }

    /// Current checkout step.
    pub fn step(&self) -> CheckoutStep {
        self.flow.step()
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart (toggle/remove/set_quantity during the
    /// address step).
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The persisted address, once the address step completed.
    pub fn address_record(&self) -> Option<&AddressRecord> {
        self.flow.address_record()
    }

    /// The placed order id, once the flow completed.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.flow.order_id()
    }

    /// Check if a submission is currently outstanding.
    pub fn is_submitting(&self) -> bool {
        self.flow.is_submitting()
    }

    /// Submit the address step.
    ///
    /// Validates client-side first; a validation failure blocks the
    /// request entirely. On success the flow advances to `Review` and the
    /// returned record's id is kept for the order. On failure the flow
    /// stays at `Address` and the error is surfaced verbatim.
    pub async fn submit_address(&mut self, address: Address) -> Result<(), StorefrontError> {
        if self.flow.step() != CheckoutStep::Address {
            return Err(StorefrontError::Commerce(
                basket_commerce::CommerceError::InvalidCheckoutTransition {
                    from: self.flow.step().as_str().to_string(),
                    to: CheckoutStep::Review.as_str().to_string(),
                },
            ));
        }

        address.validate()?;
        if self.cart.is_empty() {
            return Err(StorefrontError::Validation(
                "cart is empty; add at least one item before checkout".to_string(),
            ));
        }

        let submission = AddressSubmission::from_cart(address, &self.cart);

        self.flow.begin_submission()?;
        let result = self.source.submit_address(&submission).await;
        self.flow.end_submission();

        match result {
            Ok(record) => {
                info!(address_id = %record.id, "address accepted");
                self.flow.complete_address(record)?;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "address submission failed");
                Err(err)
            }
        }
    }

    /// Manual "previous" navigation from `Review` back to `Address`.
    /// Discards nothing: the cart and the stored address are untouched.
    pub fn back_to_address(&mut self) -> Result<(), StorefrontError> {
        self.flow.back_to_address().map_err(Into::into)
    }

    /// Place the order from the `Review` step.
    ///
    /// Takes the submission lock before sending, so a second invocation
    /// while one request is outstanding fails with `SubmissionInFlight`
    /// and sends nothing. On success the flow reaches `Confirmation` and
    /// the cart is cleared; on failure the lock is released and the step
    /// stays `Review` for retry.
    pub async fn place_order(
        &mut self,
        user: &CurrentUser,
    ) -> Result<PlacedOrder, StorefrontError> {
        if self.flow.step() != CheckoutStep::Review {
            return Err(StorefrontError::Commerce(
                basket_commerce::CommerceError::InvalidCheckoutTransition {
                    from: self.flow.step().as_str().to_string(),
                    to: CheckoutStep::Confirmation.as_str().to_string(),
                },
            ));
        }

        let user_id = user
            .user_id()
            .cloned()
            .ok_or_else(|| StorefrontError::Validation("sign in to place an order".to_string()))?;
        let address_id = self
            .flow
            .address_record()
            .map(|r| r.id.clone())
            .ok_or(StorefrontError::MissingAddress)?;

        let order = Order::from_cart(user_id, address_id, &self.cart)?;

        self.flow.begin_submission()?;
        match self.source.submit_order(&order).await {
            Ok(placed) => {
                info!(order_id = %placed.order_id, total = %order.total_amount, "order placed");
                self.flow.complete_order(placed.order_id.clone())?;
                self.cart.clear();
                Ok(placed)
            }
            Err(err) => {
                self.flow.end_submission();
                warn!(error = %err, "order submission failed");
                Err(err)
            }
        }
    }

    /// Previously saved addresses, oldest first, for prefilling the form.
    pub async fn saved_addresses(&self) -> Result<Vec<AddressRecord>, StorefrontError> {
        self.source.addresses().await
    }
}
