//! Account Identity Extractor
//!
//! Authentication is owned by the upstream gateway; it authenticates the
//! merchant and forwards the account id in the `x-account-id` header.
//! Owner-scoped handlers take [`CurrentAccount`] to receive it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::core::ServerState;
use shared::AppError;

const ACCOUNT_HEADER: &str = "x-account-id";

/// The authenticated account on owner-scoped routes
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub String);

impl FromRequestParts<ServerState> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let account = parts
            .headers
            .get(ACCOUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty());

        match account {
            Some(id) => Ok(CurrentAccount(id.to_string())),
            None => Err(AppError::forbidden("Missing account identity")),
        }
    }
}
