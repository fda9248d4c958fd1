//! Cookie-based session authentication for the dashboard pages.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the cookie holding the raw session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Extracts the session token from the `Cookie` header.
///
/// Handles several cookies in one header by splitting on semicolons and
/// ignoring everything except [`SESSION_COOKIE`].
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// `Set-Cookie` value that stores a new session token.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the session cookie.
pub fn expired_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Authenticates dashboard requests from the session cookie.
///
/// On success the resolved [`crate::domain::entities::CurrentUser`] is
/// inserted into request extensions.
///
/// Unlike the API middleware, which answers `401 Unauthorized`, a missing,
/// unknown or expired session redirects the browser to `/login`.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = session_token(req.headers()) else {
        return Err(Redirect::to("/login"));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(current_user) => {
            req.extensions_mut().insert(current_user);
            Ok(next.run(req).await)
        }
        Err(_) => Err(Redirect::to("/login")),
    }
}
