pub mod health;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod root;
pub mod time_sale;

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/hotels", get(hotel::get_hotels).post(hotel::create_hotel))
        .route("/hotels/search", get(hotel::search_hotels))
        .route("/hotels/{id}", get(hotel::get_hotel_by_id))
        .route("/hotels/{id}/grade", get(hotel::get_hotel_grade))
        .route("/hotels/{id}/rooms", post(room::create_room))
        .route("/rooms/search", get(room::search_rooms))
        .route("/rooms/{id}/hotel", get(time_sale::get_hotel_by_room_id))
        .route("/reservations", post(reservation::create_reservation))
        .route("/timesales", post(time_sale::create_time_sale))
        .route("/timesales/hotels", get(time_sale::get_now_time_sale_hotels))
        .route("/timesales/{id}", delete(time_sale::delete_time_sale))
        .route(
            "/timesales/{id}/hotel",
            get(time_sale::get_hotel_by_time_sale_id),
        )
        .with_state(state)
}
