use std::borrow::Cow;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use sea_orm::{DbErr, Order};
use serde::{Deserialize, Serialize};

use crate::{entity::book, error::ErrorBody, state::ApiState, traits::StorageProvider};

const DEFAULT_PAGE_SIZE: u64 = 5;

#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    message: &'static str,
    books: Vec<book::Model>,
}

impl ListBooksResponse {
    fn new(books: Vec<book::Model>) -> Self {
        ListBooksResponse {
            message: "Get Books Data",
            books,
        }
    }
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, From)]
pub enum ListBooksError {
    #[from(ignore)]
    InvalidPage { reason: String },
    #[from(ignore)]
    InvalidSize { reason: String },
    #[from(ignore)]
    InvalidOrder,
    Storage(DbErr),
}

impl ListBooksError {
    fn status_code(&self) -> StatusCode {
        match self {
            ListBooksError::InvalidPage { .. }
            | ListBooksError::InvalidSize { .. }
            | ListBooksError::InvalidOrder => StatusCode::BAD_REQUEST,
            ListBooksError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Cow<'static, str> {
        match self {
            ListBooksError::InvalidPage { .. } => Cow::Borrowed("Invalid page value"),
            ListBooksError::InvalidSize { .. } => Cow::Borrowed("Invalid size value"),
            ListBooksError::InvalidOrder => {
                Cow::Borrowed("Order must be 'asc' for ascending or 'desc' for descending.")
            }
            ListBooksError::Storage(_) => Cow::Borrowed("Could not fetch books"),
        }
    }

    fn error(self) -> Option<String> {
        match self {
            ListBooksError::InvalidPage { reason } | ListBooksError::InvalidSize { reason } => {
                Some(reason)
            }
            ListBooksError::InvalidOrder => None,
            ListBooksError::Storage(err) => {
                tracing::error!(%err, "Failed to fetch books");

                Some(err.to_string())
            }
        }
    }
}

impl IntoResponse for ListBooksError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.message();

        (
            status_code,
            Json(ErrorBody::with_optional_error(message, self.error())),
        )
            .into_response()
    }
}

/// Without a `page` query parameter the whole catalog is returned. With one,
/// a slice of `size` books (default 5) ordered by title in `order` direction
/// (default ascending).
pub async fn list_books(
    State(state): State<ApiState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ListBooksResponse, ListBooksError> {
    let page = query.page.filter(|page| !page.is_empty());

    let Some(page) = page else {
        let books = book::list_all(state.db()).await?;

        return Ok(ListBooksResponse::new(books));
    };

    let page: u64 = page.parse().map_err(|err: std::num::ParseIntError| {
        ListBooksError::InvalidPage {
            reason: err.to_string(),
        }
    })?;

    if page == 0 {
        return Err(ListBooksError::InvalidPage {
            reason: "page must be greater than 0".to_string(),
        });
    }

    let size: u64 = match query.size {
        Some(size) => size.parse().map_err(|err: std::num::ParseIntError| {
            ListBooksError::InvalidSize {
                reason: err.to_string(),
            }
        })?,
        None => DEFAULT_PAGE_SIZE,
    };

    if size == 0 {
        return Err(ListBooksError::InvalidSize {
            reason: "size must be greater than 0".to_string(),
        });
    }

    let order = match query.order.as_deref() {
        None | Some("asc") => Order::Asc,
        Some("desc") => Order::Desc,
        Some(_) => return Err(ListBooksError::InvalidOrder),
    };

    let offset = (page - 1) * size;

    let books = book::list_page(state.db(), size, offset, order).await?;

    Ok(ListBooksResponse::new(books))
}
