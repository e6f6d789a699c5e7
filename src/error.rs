use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

/// Entity kinds surfaced in not-found messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Instructor,
    Student,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Instructor => "Instructor",
            Entity::Student => "Student",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error("Invalid request body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    PathParam(#[from] PathRejection),

    #[error("Invalid query string: {0}")]
    QueryParam(#[from] QueryRejection),

    #[error("Instructor {0} does not exist")]
    UnknownInstructor(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(DetailMessage {
                    detail: format!("{entity} not found"),
                }),
            )
                .into_response(),
            ApiError::JsonBody(rejection) => {
                let kind = match &rejection {
                    JsonRejection::JsonDataError(_) => "json_data",
                    JsonRejection::JsonSyntaxError(_) => "json_invalid",
                    JsonRejection::MissingJsonContentType(_) => "missing_content_type",
                    JsonRejection::BytesRejection(_) => "body_unreadable",
                    _ => "invalid",
                };
                validation_failure(vec!["body".to_string()], rejection.body_text(), kind)
            }
            ApiError::PathParam(rejection) => {
                validation_failure(vec!["path".to_string()], rejection.body_text(), "path_invalid")
            }
            ApiError::QueryParam(rejection) => validation_failure(
                vec!["query".to_string()],
                rejection.body_text(),
                "query_invalid",
            ),
            ApiError::UnknownInstructor(id) => validation_failure(
                vec!["body".to_string(), "instructor_id".to_string()],
                format!("Instructor {id} does not exist"),
                "foreign_key",
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DetailMessage {
                        detail: "Internal Server Error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

fn validation_failure(
    loc: Vec<String>,
    msg: String,
    kind: &'static str,
) -> axum::response::Response {
    let body = ValidationErrorResponse {
        detail: vec![FieldError { loc, msg, kind }],
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// `{"detail": "..."}` body for not-found and opaque failures.
#[derive(Serialize)]
pub struct DetailMessage {
    pub detail: String,
}

/// `{"detail": [...]}` body for rejected input.
#[derive(Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

#[derive(Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}
