use std::borrow::Cow;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    entity::book,
    error::{BodyError, ErrorBody, PathError},
    extractor::{json::ApiJson, path::ApiPath},
    state::ApiState,
    traits::StorageProvider,
};

const VALID_FIELDS: [&str; 3] = ["title", "author", "description"];

#[derive(Debug, Serialize)]
pub struct UpdateBookResponse {
    message: &'static str,
    book: book::Model,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, From)]
pub enum UpdateBookError {
    #[from(ignore)]
    Body { reason: String },
    #[from(ignore)]
    EmptyBody,
    #[from(ignore)]
    InvalidField { field: String },
    #[from(ignore)]
    InvalidId { reason: String },
    #[from(ignore)]
    NotFound { reason: Option<String> },
    Storage(DbErr),
}

impl UpdateBookError {
    fn status_code(&self) -> StatusCode {
        match self {
            UpdateBookError::Body { .. }
            | UpdateBookError::EmptyBody
            | UpdateBookError::InvalidField { .. }
            | UpdateBookError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            UpdateBookError::NotFound { .. } => StatusCode::NOT_FOUND,
            UpdateBookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Cow<'static, str> {
        match self {
            UpdateBookError::Body { .. } => {
                Cow::Borrowed("Invalid request body. Please provide valid JSON data.")
            }
            UpdateBookError::EmptyBody => Cow::Borrowed("Request body can't be empty"),
            UpdateBookError::InvalidField { field } => {
                Cow::Owned(format!("Invalid field in request body: {field}"))
            }
            UpdateBookError::InvalidId { .. } => {
                Cow::Borrowed("Invalid book ID, must be an positive integer")
            }
            UpdateBookError::NotFound { .. } => Cow::Borrowed("Book not found with specific id"),
            UpdateBookError::Storage(_) => Cow::Borrowed("Could not update request data"),
        }
    }

    fn error(self) -> Option<String> {
        match self {
            UpdateBookError::Body { reason } | UpdateBookError::InvalidId { reason } => {
                Some(reason)
            }
            UpdateBookError::EmptyBody | UpdateBookError::InvalidField { .. } => None,
            UpdateBookError::NotFound { reason } => reason,
            UpdateBookError::Storage(err) => {
                tracing::error!(%err, "Failed to update book");

                Some(err.to_string())
            }
        }
    }
}

impl IntoResponse for UpdateBookError {
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

/// Partial update: the body must be a non-empty JSON mapping whose keys all
/// belong to the field allow-list. Only the supplied fields are written.
/// Body checks run before the id check.
pub async fn update_book(
    State(state): State<ApiState>,
    id: Result<ApiPath<i64>, PathError>,
    payload: Result<ApiJson<Map<String, Value>>, BodyError>,
) -> Result<UpdateBookResponse, UpdateBookError> {
    let ApiJson(fields) = payload.map_err(|err| UpdateBookError::Body { reason: err.reason })?;

    if fields.is_empty() {
        return Err(UpdateBookError::EmptyBody);
    }

    if let Some(field) = fields
        .keys()
        .find(|key| !VALID_FIELDS.contains(&key.as_str()))
    {
        return Err(UpdateBookError::InvalidField {
            field: field.clone(),
        });
    }

    let update: book::BookUpdate = serde_json::from_value(Value::Object(fields))
        .map_err(|err| UpdateBookError::Body {
            reason: err.to_string(),
        })?;

    let ApiPath(id) = id.map_err(|err| UpdateBookError::InvalidId { reason: err.reason })?;

    if id <= 0 {
        return Err(UpdateBookError::InvalidId {
            reason: "book id must be greater than 0".to_string(),
        });
    }

    let book = match book::find_by_id(state.db(), id).await {
        Ok(Some(book)) => book,
        Ok(None) => return Err(UpdateBookError::NotFound { reason: None }),
        Err(err) => {
            return Err(UpdateBookError::NotFound {
                reason: Some(err.to_string()),
            })
        }
    };

    let book = book::update(state.db(), book.id, update).await?;

    Ok(UpdateBookResponse {
        message: "Book Updated Successfully",
        book,
    })
}
