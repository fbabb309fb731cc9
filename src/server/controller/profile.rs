use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UpstreamErrorDto},
        pilot::{ProfileDto, ProfileQuery},
    },
    server::{
        error::{request::RequestError, Error},
        model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get one pilot's profile
///
/// Accepts either the numeric customer ID or the full `gid://shopify/Customer/` ID.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    params(ProfileQuery),
    responses(
        (status = 200, description = "Pilot profile", body = ProfileDto),
        (status = 400, description = "Customer ID missing or malformed", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 502, description = "Customer store request failed", body = UpstreamErrorDto),
        (status = 500, description = "Stored profile data is corrupted", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<impl IntoResponse, Error> {
    let Some(customer_id) = query.customer_id else {
        return Err(RequestError::MissingCustomerId.into());
    };

    let profile_service = ProfileService::new(&state.store, &state.config);

    let profile = profile_service.get_profile(&customer_id).await?;

    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}
