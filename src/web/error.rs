//! HTML rendering of [`AppError`] for dashboard pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: &'static str,
    message: String,
}

/// Dashboard error: the same [`AppError`] the API returns, rendered as an
/// error page with the matching status code.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        WebError(err)
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        WebError(AppError::bad_request(
            "Invalid form submission",
            json!({ "reason": rejection.body_text() }),
        ))
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        WebError(rejection.into())
    }
}

/// Shows the field messages on the page instead of a generic heading.
impl From<validator::ValidationErrors> for WebError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        messages.sort();

        let err = AppError::from(errors);
        if messages.is_empty() {
            return WebError(err);
        }

        let details = match err {
            AppError::Validation { details, .. } => details,
            _ => json!({}),
        };
        WebError(AppError::bad_request(messages.join(". "), details))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status();

        if matches!(self.0, AppError::Internal { .. }) {
            tracing::error!(error = %self.0, "dashboard request failed");
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: self.0.message().to_string(),
        };

        (status, page).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_follows_app_error() {
        let response = WebError(AppError::not_found("Club not found", json!({}))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            WebError(AppError::conflict("Username already taken", json!({}))).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_messages_become_page_message() {
        use validator::Validate;

        #[derive(Validate)]
        struct Form {
            #[validate(length(min = 1, message = "Must provide club name"))]
            name: String,
        }

        let errors = Form {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let WebError(err) = WebError::from(errors);
        assert_eq!(err.message(), "Must provide club name");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_page_shows_message() {
        let page = ErrorTemplate {
            status: 400,
            reason: "Bad Request",
            message: "Passwords do not match".to_string(),
        };
        let html = page.render().unwrap();

        assert!(html.contains("400"));
        assert!(html.contains("Passwords do not match"));
    }
}
