use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::{middleware::require_auth_token::require_auth_token, state::ApiState};

/// The static route table: one unauthenticated route (list) and a group of
/// three authenticated routes (create, update, delete) sharing the
/// authorization middleware.
pub fn app(state: ApiState) -> Router<ApiState> {
    let protected = Router::<ApiState>::new()
        .route("/books", post(super::create_book::create_book))
        .route(
            "/books/:id",
            put(super::update_book::update_book).delete(super::delete_book::delete_book),
        )
        .route_layer(from_fn_with_state(state, require_auth_token));

    Router::<ApiState>::new()
        .route("/books", get(super::list_books::list_books))
        .merge(protected)
}
