//! Mapping of service failures onto HTTP responses

use axum::http::StatusCode;

use crate::application::services::ServiceError;

pub type ApiError = (StatusCode, String);

pub fn api_error(error: ServiceError) -> ApiError {
    let status = match &error {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Generation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
    }
    (status, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{StorageError, StoreName};
    use crate::domain::services::GeneratorError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            api_error(ServiceError::NotFound("Game x".into())).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            api_error(ServiceError::Validation("bad".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api_error(GeneratorError::NoVillainsAvailable.into()).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            api_error(StorageError::read(StoreName::Games, "disk").into()).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_the_error_text() {
        let (_, message) = api_error(GeneratorError::NoVillainsAvailable.into());
        assert_eq!(
            message,
            "No villains available. Please add some products to your collection."
        );
    }
}
