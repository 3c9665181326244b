use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use sea_orm::DbErr;
use serde::Serialize;

use crate::{
    entity::book,
    error::{ErrorBody, PathError},
    extractor::path::ApiPath,
    state::ApiState,
    traits::StorageProvider,
};

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    message: &'static str,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, From)]
pub enum DeleteBookError {
    #[from(ignore)]
    InvalidId { reason: String },
    #[from(ignore)]
    NotFound { reason: Option<String> },
    Storage(DbErr),
}

impl DeleteBookError {
    fn status_code(&self) -> StatusCode {
        match self {
            DeleteBookError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            DeleteBookError::NotFound { .. } => StatusCode::NOT_FOUND,
            // The delete path reports storage failures as 400, unlike the
            // other routes' 500.
            DeleteBookError::Storage(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            DeleteBookError::InvalidId { .. } => "Invalid book ID",
            DeleteBookError::NotFound { .. } => "Could not fetch book specific id",
            DeleteBookError::Storage(_) => "Could not remove the book",
        }
    }

    fn error(self) -> Option<String> {
        match self {
            DeleteBookError::InvalidId { reason } => Some(reason),
            DeleteBookError::NotFound { reason } => reason,
            DeleteBookError::Storage(err) => {
                tracing::error!(%err, "Failed to delete book");

                Some(err.to_string())
            }
        }
    }
}

impl IntoResponse for DeleteBookError {
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

pub async fn delete_book(
    State(state): State<ApiState>,
    id: Result<ApiPath<i64>, PathError>,
) -> Result<DeleteBookResponse, DeleteBookError> {
    let ApiPath(id) = id.map_err(|err| DeleteBookError::InvalidId { reason: err.reason })?;

    if id <= 0 {
        return Err(DeleteBookError::InvalidId {
            reason: "book id must be greater than 0".to_string(),
        });
    }

    let book = match book::find_by_id(state.db(), id).await {
        Ok(Some(book)) => book,
        Ok(None) => return Err(DeleteBookError::NotFound { reason: None }),
        Err(err) => {
            return Err(DeleteBookError::NotFound {
                reason: Some(err.to_string()),
            })
        }
    };

    book::delete(state.db(), book).await?;

    Ok(DeleteBookResponse {
        message: "Book removed successfully",
    })
}
