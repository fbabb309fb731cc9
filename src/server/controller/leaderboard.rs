use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, UpstreamErrorDto},
        pilot::{LeaderboardDto, LeaderboardEntryDto},
    },
    server::{error::Error, model::app::AppState, service::leaderboard::LeaderboardService},
};

pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the pilot leaderboard
///
/// Ranks every pilot with any progress in the fetched batch by XP, highest first.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Ranked pilots", body = LeaderboardDto),
        (status = 502, description = "Customer store request failed", body = UpstreamErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let leaderboard_service = LeaderboardService::new(&state.store, &state.config);

    let entries = leaderboard_service.get_leaderboard().await?;

    let leaderboard: Vec<LeaderboardEntryDto> = entries.into_iter().map(Into::into).collect();

    Ok((
        StatusCode::OK,
        Json(LeaderboardDto {
            total: leaderboard.len(),
            leaderboard,
        }),
    ))
}
