//! Club list, add, edit and delete pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{Path, State, rejection::FormRejection},
    response::Redirect,
};
use validator::Validate;

use crate::domain::entities::CurrentUser;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::forms::ClubForm;
use crate::web::views::{CategoryOption, ClubFormView, ClubView, category_options, club_views};

#[derive(Template, WebTemplate)]
#[template(path = "clubs.html")]
pub struct ClubsTemplate {
    clubs: Vec<ClubView>,
    categories: Vec<CategoryOption>,
}

#[derive(Template, WebTemplate)]
#[template(path = "edit_club.html")]
pub struct EditClubTemplate {
    club: ClubFormView,
}

/// `GET /clubs`
///
/// Lists the bag in bag order with the add-club form.
pub async fn clubs_page(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<ClubsTemplate, WebError> {
    let clubs = state.club_service.list(user).await?;

    Ok(ClubsTemplate {
        clubs: club_views(&clubs),
        categories: category_options(None),
    })
}

/// `POST /clubs`
///
/// # Errors
///
/// 400 Bad Request without a name or with a loft that is not a number.
pub async fn create_club(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    form: Result<Form<ClubForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form?;
    form.validate()?;

    state.club_service.create(user, form.into()).await?;

    Ok(Redirect::to("/clubs"))
}

/// `GET /clubs/{id}/edit`
///
/// # Errors
///
/// 404 Not Found for a missing club or one owned by someone else.
pub async fn edit_club_page(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(club_id): Path<i64>,
) -> Result<EditClubTemplate, WebError> {
    let club = state.club_service.get(user, club_id).await?;

    Ok(EditClubTemplate {
        club: ClubFormView::from(&club),
    })
}

/// `POST /clubs/{id}/edit`
pub async fn update_club(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(club_id): Path<i64>,
    form: Result<Form<ClubForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let Form(form) = form?;
    form.validate()?;

    state.club_service.update(user, club_id, form.into()).await?;

    Ok(Redirect::to("/clubs"))
}

/// `POST /clubs/{id}/delete`
///
/// Removes the club and every shot logged with it.
pub async fn delete_club(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(club_id): Path<i64>,
) -> Result<Redirect, WebError> {
    state.club_service.delete(user, club_id).await?;

    Ok(Redirect::to("/clubs"))
}
