use chrono::{NaiveDate, NaiveDateTime};
use database::{entities::reservation, services::reservation::NewReservation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    pub user_id: i32,
    pub room_id: i32,
    pub price: i32,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    /// Must equal adult_capacity + child_capacity
    pub reservation_capacity: i32,
    pub adult_capacity: i32,
    pub child_capacity: i32,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(request: CreateReservationRequest) -> Self {
        Self {
            user_id: request.user_id,
            room_id: request.room_id,
            price: request.price,
            start_at: request.start_at,
            end_at: request.end_at,
            reservation_capacity: request.reservation_capacity,
            adult_capacity: request.adult_capacity,
            child_capacity: request.child_capacity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub price: i32,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub reservation_capacity: i32,
    pub adult_capacity: i32,
    pub child_capacity: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(reservation: reservation::Model) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            room_id: reservation.room_id,
            price: reservation.price,
            start_at: reservation.start_at,
            end_at: reservation.end_at,
            reservation_capacity: reservation.reservation_capacity,
            adult_capacity: reservation.adult_capacity,
            child_capacity: reservation.child_capacity,
            status: reservation.status.to_string(),
            created_at: reservation.created_at,
        }
    }
}
