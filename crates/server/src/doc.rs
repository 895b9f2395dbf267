use crate::routes::{health, hotel, reservation, room, root, time_sale};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        hotel::search_hotels,
        hotel::get_hotels,
        hotel::create_hotel,
        hotel::get_hotel_by_id,
        hotel::get_hotel_grade,
        room::create_room,
        room::search_rooms,
        reservation::create_reservation,
        time_sale::create_time_sale,
        time_sale::delete_time_sale,
        time_sale::get_now_time_sale_hotels,
        time_sale::get_hotel_by_time_sale_id,
        time_sale::get_hotel_by_room_id
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Hotels", description = "Hotel search, listing and registration"),
        (name = "Rooms", description = "Room registration and search"),
        (name = "Reservations", description = "Room bookings"),
        (name = "Time sales", description = "Time-limited room discounts"),
    ),
    info(
        title = "Hotel Search API",
        version = "1.0.0",
        description = "Hotel search and aggregation backend",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
