//! Handler for the club list.

use axum::{Extension, Json, extract::State};

use crate::api::dto::clubs::{ClubListResponse, ClubResponse};
use crate::domain::entities::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's clubs in bag order.
///
/// # Endpoint
///
/// `GET /api/clubs`
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "items": [
///     { "id": 3, "name": "Driver", "category": "driver", "declared_category": null,
///       "loft": 10.5, "notes": null, "label": "Driver", "position": 0 },
///     { "id": 1, "name": "SW", "category": "wedge", "declared_category": null,
///       "loft": 56.0, "notes": "bounce 12", "label": "SW – bounce 12", "position": 1 }
///   ]
/// }
/// ```
pub async fn clubs_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ClubListResponse>, AppError> {
    let clubs = state.club_service.list(user).await?;

    let items: Vec<ClubResponse> = clubs
        .into_iter()
        .enumerate()
        .map(|(position, club)| ClubResponse::from_club(club, position))
        .collect();

    Ok(Json(ClubListResponse {
        total: items.len(),
        items,
    }))
}
