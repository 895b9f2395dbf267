use crate::{
    dtos::{
        page::PageParams,
        room::{CreateRoomRequest, RoomPageResponse, RoomResponse, RoomSearchParams},
    },
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::room::RoomService;
use models::search::RoomSearchRequest;

/// Add a room to a hotel
#[utoipa::path(
    post,
    path = "/hotels/{id}/rooms",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Invalid capacity or price", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let room = RoomService::create(&state.db, hotel_id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Search rooms by keyword, price, capacity, amenities and timestamps
#[utoipa::path(
    get,
    path = "/rooms/search",
    params(RoomSearchParams, PageParams),
    responses(
        (status = 200, description = "One page of matching rooms", body = RoomPageResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Query(params): Query<RoomSearchParams>,
    Query(page): Query<PageParams>,
) -> Result<Json<RoomPageResponse>, ApiError> {
    let request = RoomSearchRequest::from(params);
    let slice = RoomService::search(
        &state.db,
        &request,
        page.request(&state.search),
        &state.search,
    )
    .await?;

    Ok(Json(slice.into()))
}
