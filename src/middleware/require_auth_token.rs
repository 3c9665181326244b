use axum::{extract::Request, middleware::Next, response::IntoResponse};

use crate::extractor::auth_token::ValidAuthToken;

/// Rejects the request with 401 unless the `Authorization` header matches the
/// configured secret. Runs before any body parsing, so an unauthenticated
/// request with a malformed body is still answered with 401.
pub async fn require_auth_token(
    _token: ValidAuthToken,
    req: Request,
    next: Next,
) -> impl IntoResponse {
    next.run(req).await
}
