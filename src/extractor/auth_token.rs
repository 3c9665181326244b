use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::{error::TokenError, traits::TokenVerifier};

/// Verifies the literal `Authorization` header value against the state's
/// [`TokenVerifier`].
#[derive(Debug, Clone, Copy)]
pub struct ValidAuthToken;

#[async_trait]
impl<S> FromRequestParts<S> for ValidAuthToken
where
    S: Send + Sync + TokenVerifier,
{
    type Rejection = TokenError;

    #[tracing::instrument(name = "auth_token_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Rejection. Authorization header missing or not readable");

                TokenError
            })?;

        if !state.verify(token) {
            tracing::warn!("Rejection. Invalid token");

            return Err(TokenError);
        }

        tracing::trace!("Validated");

        Ok(ValidAuthToken)
    }
}
