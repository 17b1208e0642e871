//! Explicit current-user context.
//!
//! The identity provider's session is ambient in the browser; here it is
//! reduced to a value passed explicitly into any operation that needs it,
//! so nothing in the crate reads global auth state.

use basket_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

use crate::source::UserProfile;

/// The user on whose behalf the storefront is acting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum CurrentUser {
    /// Browsing without a login session.
    #[default]
    Anonymous,
    /// Logged in through the identity provider.
    Authenticated(UserProfile),
}

impl CurrentUser {
    /// Check if there is a login session.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CurrentUser::Authenticated(_))
    }

    /// The user id, if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            CurrentUser::Anonymous => None,
            CurrentUser::Authenticated(profile) => Some(&profile.user_id),
        }
    }

    /// The full profile, if authenticated.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            CurrentUser::Anonymous => None,
            CurrentUser::Authenticated(profile) => Some(profile),
        }
    }
}
