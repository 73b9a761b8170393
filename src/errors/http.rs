use crate::{
    domain::response::MessageResponse,
    errors::{RepositoryError, ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(RepositoryError::NotFound) => {
                HttpError::NotFound("Product not found".to_string())
            }
            // The underlying store error is already logged; never leak it.
            ServiceError::Repo(RepositoryError::Sqlx(_)) => {
                HttpError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(MessageResponse { message: msg });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_row_maps_to_not_found() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(msg) if msg == "Product not found"));
    }

    #[test]
    fn store_failure_maps_to_internal() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolClosed,
        )));
        assert!(matches!(err, HttpError::Internal(_)));
    }

    #[test]
    fn responses_carry_expected_status() {
        let not_found = HttpError::NotFound("Product not found".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = HttpError::Internal("Internal server error".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
