use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto, UpstreamErrorDto},
        metafield::{
            BulkInitializeDto, BulkInitializeRequestDto, UpdateMetafieldsDto,
            UpdateMetafieldsResultDto,
        },
    },
    server::{
        controller::util::{
            body::{body_secret, parse_body, JsonBody},
            secret::verify_secret,
        },
        error::{request::RequestError, Error},
        model::app::AppState,
        service::metafield::MetafieldService,
    },
};

pub static METAFIELD_TAG: &str = "metafield";

/// Set metafields on one customer
///
/// Requires the shared API secret. Numbers are stored as numeric metafields and strings
/// as text. If the store rejects any field the whole request fails and every rejected
/// field is listed; fields the store accepted may still have been written.
#[utoipa::path(
    post,
    path = "/api/metafields/update",
    tag = METAFIELD_TAG,
    request_body = UpdateMetafieldsDto,
    responses(
        (status = 200, description = "All metafields written", body = UpdateMetafieldsResultDto),
        (status = 400, description = "Body malformed, customer ID or updates missing, or fields rejected by the store", body = FieldErrorsDto),
        (status = 401, description = "Secret missing or wrong", body = ErrorDto),
        (status = 502, description = "Customer store request failed", body = UpstreamErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_metafields(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, Error> {
    verify_secret(&state.config, body_secret(&body))?;

    let payload: UpdateMetafieldsDto = parse_body(body)?;

    let Some(customer_id) = payload.customer_id else {
        return Err(RequestError::MissingCustomerId.into());
    };
    let updates = payload
        .updates
        .filter(|updates| !updates.is_empty())
        .ok_or(RequestError::MissingUpdates)?;

    let metafield_service = MetafieldService::new(&state.store, &state.config);

    let customer_id = metafield_service
        .apply_updates(&customer_id, &updates)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateMetafieldsResultDto {
            success: true,
            customer_id,
            updates,
        }),
    ))
}

/// Initialize progression metafields for a batch of customers
///
/// Requires the shared API secret. Customers that already have a level are skipped and
/// left out of `results`; the others get level 1, no XP and the Recruit tier.
#[utoipa::path(
    post,
    path = "/api/metafields/bulk-initialize",
    tag = METAFIELD_TAG,
    request_body = BulkInitializeRequestDto,
    responses(
        (status = 200, description = "Per-customer outcomes in fetch order", body = BulkInitializeDto),
        (status = 401, description = "Secret missing or wrong", body = ErrorDto),
        (status = 502, description = "Customer store request failed", body = UpstreamErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_initialize(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, Error> {
    verify_secret(&state.config, body_secret(&body))?;

    let metafield_service = MetafieldService::new(&state.store, &state.config);

    let report = metafield_service.bulk_initialize().await?;

    Ok((
        StatusCode::OK,
        Json(BulkInitializeDto {
            processed: report.processed,
            skipped: report.skipped,
            succeeded: report.succeeded(),
            failed: report.failed(),
            results: report.results.into_iter().map(Into::into).collect(),
        }),
    ))
}
