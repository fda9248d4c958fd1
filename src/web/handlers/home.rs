//! Home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State};

use crate::domain::entities::CurrentUser;
use crate::state::AppState;
use crate::web::error::WebError;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    username: String,
    clubs: usize,
    shots: usize,
}

/// `GET /`
///
/// Greets the user with club and shot totals.
pub async fn index(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<IndexTemplate, WebError> {
    let account = state.auth_service.user(user).await?;
    let summary = state.stats_service.summary(user).await?;

    Ok(IndexTemplate {
        username: account.username,
        clubs: summary.clubs,
        shots: summary.shots,
    })
}
