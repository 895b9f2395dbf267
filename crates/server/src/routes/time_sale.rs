use crate::{
    dtos::{
        hotel::{HotelResponse, HotelSummaryPageResponse},
        page::PageParams,
        time_sale::{CreateTimeSaleRequest, TimeSaleResponse},
    },
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use database::services::time_sale::TimeSaleService;

/// Put a room on sale for a time window
#[utoipa::path(
    post,
    path = "/timesales",
    request_body = CreateTimeSaleRequest,
    responses(
        (status = 201, description = "Time sale created", body = TimeSaleResponse),
        (status = 400, description = "Invalid price or window", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Time sales"
)]
pub async fn create_time_sale(
    State(state): State<AppState>,
    Json(request): Json<CreateTimeSaleRequest>,
) -> Result<(StatusCode, Json<TimeSaleResponse>), ApiError> {
    let sale = TimeSaleService::create(&state.db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(sale.into())))
}

#[utoipa::path(
    delete,
    path = "/timesales/{id}",
    params(
        ("id" = i32, Path, description = "Time sale ID")
    ),
    responses(
        (status = 204, description = "Time sale deleted"),
        (status = 404, description = "Time sale not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Time sales"
)]
pub async fn delete_time_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    TimeSaleService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Hotels with a room on sale right now
#[utoipa::path(
    get,
    path = "/timesales/hotels",
    params(PageParams),
    responses(
        (status = 200, description = "One page of hotels on sale", body = HotelSummaryPageResponse),
        (status = 400, description = "Invalid page size", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Time sales"
)]
pub async fn get_now_time_sale_hotels(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<HotelSummaryPageResponse>, ApiError> {
    let slice = TimeSaleService::find_now_time_sale_hotels(
        &state.db,
        page.request(&state.search),
        &state.search,
        Utc::now().naive_utc(),
    )
    .await?;

    Ok(Json(slice.into()))
}

#[utoipa::path(
    get,
    path = "/timesales/{id}/hotel",
    params(
        ("id" = i32, Path, description = "Time sale ID")
    ),
    responses(
        (status = 200, description = "Hotel owning the sale's room", body = HotelResponse),
        (status = 404, description = "Time sale not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Time sales"
)]
pub async fn get_hotel_by_time_sale_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HotelResponse>, ApiError> {
    let view = TimeSaleService::find_hotel_by_time_sale_id(&state.db, id, &state.search).await?;
    Ok(Json(view.into()))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}/hotel",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Hotel owning the room", body = HotelResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn get_hotel_by_room_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HotelResponse>, ApiError> {
    let view = TimeSaleService::find_hotel_by_room_id(&state.db, id, &state.search).await?;
    Ok(Json(view.into()))
}
