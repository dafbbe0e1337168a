use actix_web::HttpResponse;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::Entity;
use crate::shared::api::ApiResponse;

/// Maps a use-case failure onto the response envelope, naming the entity
/// in codes and messages (`PROJECT_NOT_FOUND`, "Project not found").
pub fn content_error_response<T: Entity>(err: ContentError) -> HttpResponse {
    match err {
        ContentError::InvalidId(raw) => ApiResponse::bad_request(
            "INVALID_ID",
            &format!("Invalid {} ID: {}", T::LABEL.to_lowercase(), raw),
        ),

        ContentError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        e @ ContentError::InvalidLimit { .. } => {
            ApiResponse::bad_request("INVALID_LIMIT", &e.to_string())
        }

        ContentError::NotFound => ApiResponse::not_found(
            &format!("{}_NOT_FOUND", T::CODE),
            &format!("{} not found", T::LABEL),
        ),

        ContentError::SlugAlreadyExists(slug) => ApiResponse::conflict(
            "SLUG_ALREADY_EXISTS",
            &format!("Slug '{}' is already in use", slug),
        ),

        ContentError::Duplicate(msg) => {
            error!("Duplicate key writing {}: {}", T::COLLECTION, msg);
            ApiResponse::conflict("DUPLICATE_RECORD", &format!("{} already exists", T::LABEL))
        }

        ContentError::RepositoryError(msg) => {
            error!("Repository error on {}: {}", T::COLLECTION, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::ValidationError;
    use crate::tests::support::content_fixtures::Note;
    use actix_web::http::StatusCode;

    #[test]
    fn statuses_follow_the_error_kind() {
        let cases = vec![
            (ContentError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (
                ContentError::Validation(ValidationError::Empty { field: "title" }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ContentError::InvalidLimit {
                    value: 0,
                    min: 1,
                    max: 100,
                },
                StatusCode::BAD_REQUEST,
            ),
            (ContentError::NotFound, StatusCode::NOT_FOUND),
            (
                ContentError::SlugAlreadyExists("hello".into()),
                StatusCode::CONFLICT,
            ),
            (ContentError::Duplicate("E11000".into()), StatusCode::CONFLICT),
            (
                ContentError::RepositoryError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(content_error_response::<Note>(err).status(), expected);
        }
    }
}
