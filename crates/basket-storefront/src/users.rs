//! Best-effort user record upsert.

use tracing::{debug, warn};

use crate::auth::CurrentUser;
use crate::source::OrderSource;

/// Push the logged-in user's record to the backend after login.
///
/// Fire-and-forget: a failure is logged and swallowed, never surfaced to
/// the user, and never retried. Anonymous users are a no-op.
pub async fn upsert_user<S: OrderSource>(source: &S, user: &CurrentUser) {
    let Some(profile) = user.profile() else {
        return;
    };

    match source.upsert_user(profile).await {
        Ok(()) => debug!(user_id = %profile.user_id, "user record upserted"),
        Err(err) => {
            warn!(user_id = %profile.user_id, error = %err, "user upsert failed; continuing");
        }
    }
}
