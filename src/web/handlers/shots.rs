//! Shot log pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::Redirect,
};
use validator::Validate;

use crate::api::dto::filters::DateFilterParams;
use crate::domain::entities::CurrentUser;
use crate::state::AppState;
use crate::utils::dates::today;
use crate::web::error::WebError;
use crate::web::forms::ShotForm;
use crate::web::views::{ClubOption, ShotView, club_options};

#[derive(Template, WebTemplate)]
#[template(path = "shots.html")]
pub struct ShotsTemplate {
    shots: Vec<ShotView>,
    clubs: Vec<ClubOption>,
    /// Current `?date=` filter, empty when showing every day.
    date: String,
    today: String,
}

/// `GET /shots`
///
/// Shots ordered by bag position, then newest first. `?date=YYYY-MM-DD`
/// limits the list to one day.
pub async fn shots_page(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    params: Result<Query<DateFilterParams>, QueryRejection>,
) -> Result<ShotsTemplate, WebError> {
    let Query(params) = params?;
    let range = params.to_range()?;

    let clubs = state.club_service.list(user).await?;
    let shots = state.shot_service.list(user, range).await?;

    Ok(ShotsTemplate {
        shots: shots.iter().map(ShotView::from).collect(),
        clubs: club_options(&clubs),
        date: params
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        today: today().format("%Y-%m-%d").to_string(),
    })
}

/// `POST /shots`
///
/// # Errors
///
/// 400 Bad Request for a negative or non-numeric distance, a malformed
/// date, or a club that is not the user's.
pub async fn log_shot(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    form: Result<Form<ShotForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form?;
    form.validate()?;

    state.shot_service.log(user, form.into()).await?;

    Ok(Redirect::to("/shots"))
}

/// `POST /shots/{id}/delete`
pub async fn delete_shot(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(shot_id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.shot_service.delete(user, shot_id).await?;

    Ok(Redirect::to("/shots"))
}
