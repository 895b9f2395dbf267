use crate::{
    dtos::{
        hotel::{
            CreateHotelRequest, GradeResponse, HotelPageResponse, HotelResponse, HotelSearchParams,
        },
        page::PageParams,
    },
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::hotel::HotelService;
use models::search::HotelSearchRequest;

/// Search hotels by text fields, category and amenity flags
#[utoipa::path(
    get,
    path = "/hotels/search",
    params(HotelSearchParams, PageParams),
    responses(
        (status = 200, description = "One page of matching hotels", body = HotelPageResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn search_hotels(
    State(state): State<AppState>,
    Query(params): Query<HotelSearchParams>,
    Query(page): Query<PageParams>,
) -> Result<Json<HotelPageResponse>, ApiError> {
    let request = HotelSearchRequest::from(params);
    let slice = HotelService::search(
        &state.db,
        &request,
        page.request(&state.search),
        &state.search,
    )
    .await?;

    Ok(Json(slice.into()))
}

/// List every hotel with its grade and prices
#[utoipa::path(
    get,
    path = "/hotels",
    params(PageParams),
    responses(
        (status = 200, description = "One page of hotels", body = HotelPageResponse),
        (status = 400, description = "Invalid page size", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<HotelPageResponse>, ApiError> {
    let slice = HotelService::find_all_with_grade_and_price(
        &state.db,
        page.request(&state.search),
        &state.search,
    )
    .await?;

    Ok(Json(slice.into()))
}

/// Register a hotel along with its images
#[utoipa::path(
    post,
    path = "/hotels",
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = HotelResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(request): Json<CreateHotelRequest>,
) -> Result<(StatusCode, Json<HotelResponse>), ApiError> {
    let hotel = HotelService::create(&state.db, request.into()).await?;
    let view = HotelService::find_hotel(&state.db, hotel.id, &state.search).await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// Get a specific hotel by ID
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel found", body = HotelResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HotelResponse>, ApiError> {
    let view = HotelService::find_hotel(&state.db, id, &state.search).await?;
    Ok(Json(view.into()))
}

/// Get the average review grade of a hotel
#[utoipa::path(
    get,
    path = "/hotels/{id}/grade",
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Average grade", body = GradeResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Hotels"
)]
pub async fn get_hotel_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GradeResponse>, ApiError> {
    let grade_average = HotelService::find_grade(&state.db, id).await?;

    Ok(Json(GradeResponse {
        hotel_id: id,
        grade_average,
    }))
}
