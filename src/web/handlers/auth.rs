//! Login, registration and logout pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::forms::{LoginForm, RegisterForm};
use crate::web::middleware::web_auth::{expired_cookie, session_cookie, session_token};

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
struct RegisterTemplate {}

/// Redirects home with a fresh session cookie.
fn signed_in(state: &AppState, token: &str) -> Response {
    let cookie = session_cookie(token, state.session_ttl.num_seconds(), state.cookie_secure);
    ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

/// `GET /login`
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {}
}

/// `POST /login`
///
/// # Errors
///
/// 400 Bad Request when a field is missing or the credentials are wrong.
pub async fn login_submit(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;

    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(signed_in(&state, &token))
}

/// `GET /register`
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate {}
}

/// `POST /register`
///
/// Creates the account and logs the new user in.
///
/// # Errors
///
/// 400 Bad Request for missing fields or a mismatched confirmation,
/// 409 Conflict when the username is taken.
pub async fn register_submit(
    State(state): State<AppState>,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;

    let user = state
        .auth_service
        .register(&form.username, &form.password, &form.confirmation)
        .await?;
    let token = state.auth_service.open_session(user.id).await?;

    Ok(signed_in(&state, &token))
}

/// `GET /logout`
///
/// Revokes the session when one is presented and always clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, WebError> {
    if let Some(token) = session_token(&headers) {
        state.auth_service.logout(&token).await?;
    }

    Ok(([(SET_COOKIE, expired_cookie())], Redirect::to("/login")).into_response())
}
