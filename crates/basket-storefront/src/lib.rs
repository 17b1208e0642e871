//! Backend sources and the checkout session for the FarmBasket storefront.
//!
//! Where `basket-commerce` is pure data and transitions, this crate wires
//! that core to the outside world:
//!
//! - **Sources**: [`CatalogSource`]/[`OrderSource`] traits over the
//!   backend's REST endpoints, with an HTTP implementation
//! - **Checkout session**: the Address → Review → Confirmation driver that
//!   validates, submits, and advances the flow
//! - **Auth**: the explicit current-user context and the best-effort user
//!   upsert after login
//!
//! All network operations are async; none retries automatically. Failures
//! are recoverable: the step that issued the request reports the error and
//! the user can retry by re-invoking submission.

pub mod auth;
pub mod checkout;
pub mod config;
pub mod error;
pub mod source;
pub mod users;

pub use auth::CurrentUser;
pub use checkout::CheckoutSession;
pub use config::BackendConfig;
pub use error::StorefrontError;
pub use source::{AddressSubmission, CatalogSource, HttpBackend, OrderSource, UserProfile};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::auth::CurrentUser;
    pub use crate::checkout::CheckoutSession;
    pub use crate::config::BackendConfig;
    pub use crate::error::StorefrontError;
    pub use crate::source::{
        AddressSubmission, CatalogSource, HttpBackend, OrderSource, SubmittedLine, UserProfile,
    };
    pub use crate::users::upsert_user;
}
