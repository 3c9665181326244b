use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    entity::book,
    error::ErrorBody,
    extractor::json::ApiJson,
    state::ApiState,
    traits::StorageProvider,
};

/// Missing fields deserialize to empty strings, so they are caught by the
/// same non-empty validation as explicitly empty ones.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    message: &'static str,
    book: book::Model,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, From)]
pub enum CreateBookError {
    #[from(ignore)]
    EmptyField,
    Storage(DbErr),
}

impl CreateBookError {
    fn status_code(&self) -> StatusCode {
        match self {
            CreateBookError::EmptyField => StatusCode::BAD_REQUEST,
            CreateBookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            CreateBookError::EmptyField => "Title, Author, and Description can't empty.",
            CreateBookError::Storage(_) => "Couldn't create the book",
        }
    }

    fn error(self) -> Option<String> {
        match self {
            CreateBookError::EmptyField => None,
            CreateBookError::Storage(err) => {
                tracing::error!(%err, "Failed to create book");

                Some(err.to_string())
            }
        }
    }
}

impl IntoResponse for CreateBookError {
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

pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<CreateBookRequest>,
) -> Result<CreateBookResponse, CreateBookError> {
    if payload.validate().is_err() {
        return Err(CreateBookError::EmptyField);
    }

    let book = book::create(
        state.db(),
        book::NewBook {
            title: payload.title,
            author: payload.author,
            description: payload.description,
        },
    )
    .await?;

    Ok(CreateBookResponse {
        message: "Book created",
        book,
    })
}
