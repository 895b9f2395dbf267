use crate::{
    dtos::reservation::{CreateReservationRequest, ReservationResponse},
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use database::services::reservation::ReservationService;

/// Book a room. The reservation starts out awaiting payment.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Capacities or dates are inconsistent", body = ErrorResponse),
        (status = 404, description = "Room or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    let reservation = ReservationService::create(&state.db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(reservation.into())))
}
