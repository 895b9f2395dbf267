#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, Utc};
use database::{
    entities::{hotel, review, user},
    services::{
        hotel::{HotelService, NewHotel},
        reservation::{NewReservation, ReservationService},
        room::{NewRoom, RoomService},
    },
};
use migration::{Migrator, MigratorTrait};
use models::{
    amenity::{HotelFacilities, RoomFacilities},
    grade::Grade,
    hotel_category::HotelCategory,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

/// A migrated in-memory database. One connection, since every SQLite
/// in-memory connection gets its own database.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn user(db: &DatabaseConnection, email: &str) -> user::Model {
    let now = Utc::now().naive_utc();
    user::ActiveModel {
        email: Set(email.to_string()),
        name: Set("Owner".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub fn new_hotel(user_id: i32, name: &str, city: &str) -> NewHotel {
    NewHotel {
        user_id,
        name: name.to_string(),
        category: HotelCategory::Hotel,
        description: "Rooms with a view".to_string(),
        notice: String::new(),
        province: "Gangwon".to_string(),
        city: city.to_string(),
        district: "Central".to_string(),
        detailed_address: "1 Beach Road".to_string(),
        latitude: 38.2,
        longitude: 128.6,
        main_image: "https://img.example.com/main.jpg".to_string(),
        business_number: "123-45-67890".to_string(),
        cert_url: "https://img.example.com/cert.jpg".to_string(),
        visit_guidance: "Check in at the front desk".to_string(),
        facilities: HotelFacilities::default(),
        image_urls: Vec::new(),
    }
}

pub async fn hotel(db: &DatabaseConnection, new_hotel: NewHotel) -> hotel::Model {
    HotelService::create(db, new_hotel).await.unwrap()
}

pub fn new_room(name: &str, price: i32) -> NewRoom {
    NewRoom {
        name: name.to_string(),
        description: "Double bed".to_string(),
        precaution: "No smoking".to_string(),
        price,
        check_in: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        check_out: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        standard_capacity: 2,
        max_capacity: 4,
        total_rooms: 5,
        facilities: RoomFacilities::default(),
    }
}

pub fn new_reservation(user_id: i32, room_id: i32) -> NewReservation {
    NewReservation {
        user_id,
        room_id,
        price: 100_000,
        start_at: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        end_at: NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
        reservation_capacity: 2,
        adult_capacity: 2,
        child_capacity: 0,
    }
}

/// Books the room and leaves a review on the stay
pub async fn review(db: &DatabaseConnection, user_id: i32, room_id: i32, grade: Grade) {
    let reservation = ReservationService::create(db, new_reservation(user_id, room_id))
        .await
        .unwrap();

    let now = Utc::now().naive_utc();
    review::ActiveModel {
        reservation_id: Set(reservation.id),
        grade: Set(grade),
        detail: Set("Stayed one night".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn room(db: &DatabaseConnection, hotel_id: i32, name: &str, price: i32) -> i32 {
    RoomService::create(db, hotel_id, new_room(name, price))
        .await
        .unwrap()
        .id
}
