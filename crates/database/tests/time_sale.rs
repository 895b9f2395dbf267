mod common;

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use common::{hotel, new_hotel, room, setup, user};
use database::{
    config::SearchConfig,
    error::ServiceError,
    services::{
        hotel::HotelService,
        time_sale::{NewTimeSale, TimeSaleService},
    },
};
use models::{page::PageRequest, sale_price::SalePriceWindow, validation::ValidationError};
use sea_orm::DatabaseConnection;

fn year(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

async fn sale(
    db: &DatabaseConnection,
    room_id: i32,
    price: i32,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
) -> i32 {
    TimeSaleService::create(
        db,
        NewTimeSale {
            room_id,
            price,
            start_at,
            end_at,
        },
    )
    .await
    .unwrap()
    .id
}

fn active_only() -> SearchConfig {
    SearchConfig {
        sale_price_window: SalePriceWindow::ActiveOnly,
        ..SearchConfig::default()
    }
}

#[tokio::test]
async fn test_sale_price_window() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let seaside = hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let room_id = room(&db, seaside.id, "Standard", 100_000).await;

    let now = Utc::now().naive_utc();
    sale(&db, room_id, 50_000, year(2000), year(2001)).await;
    sale(&db, room_id, 60_000, year(2998), year(2999)).await;
    sale(
        &db,
        room_id,
        70_000,
        now - Duration::days(1),
        now + Duration::days(1),
    )
    .await;

    let all = HotelService::find_hotel(&db, seaside.id, &SearchConfig::default())
        .await
        .unwrap();
    assert_eq!(all.sale_price, 50_000);
    assert_eq!(all.previous_price, 100_000);

    let active = HotelService::find_hotel(&db, seaside.id, &active_only())
        .await
        .unwrap();
    assert_eq!(active.sale_price, 70_000);

    assert_eq!(
        HotelService::sale_price(&db, seaside.id, SalePriceWindow::ActiveOnly, now)
            .await
            .unwrap(),
        70_000
    );
    assert_eq!(
        HotelService::sale_price(&db, seaside.id, SalePriceWindow::ActiveOnly, year(2500))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_now_on_sale_hotels() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let on_sale = hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let expired = hotel(&db, new_hotel(owner.id, "Pine Lodge", "Gangneung")).await;
    let without_sales = hotel(&db, new_hotel(owner.id, "Harbor Inn", "Busan")).await;

    let now = Utc::now().naive_utc();
    let first = room(&db, on_sale.id, "Standard", 100_000).await;
    let second = room(&db, on_sale.id, "Deluxe", 150_000).await;
    sale(&db, first, 90_000, now - Duration::hours(1), now + Duration::hours(1)).await;
    sale(&db, second, 80_000, now - Duration::hours(2), now + Duration::hours(2)).await;
    sale(&db, first, 10_000, year(2000), year(2001)).await;

    let old = room(&db, expired.id, "Standard", 70_000).await;
    sale(&db, old, 30_000, year(2000), year(2001)).await;
    room(&db, without_sales.id, "Standard", 60_000).await;

    let slice = TimeSaleService::find_now_time_sale_hotels(
        &db,
        PageRequest::new(0, 10),
        &SearchConfig::default(),
        now,
    )
    .await
    .unwrap();

    assert_eq!(slice.content.len(), 1);
    assert!(!slice.has_next);
    let view = &slice.content[0];
    assert_eq!(view.hotel.id, on_sale.id);
    assert_eq!(view.sale_price, 80_000);
    assert_eq!(view.previous_price, 100_000);

    let later = TimeSaleService::find_now_time_sale_hotels(
        &db,
        PageRequest::new(0, 10),
        &SearchConfig::default(),
        now + Duration::days(1),
    )
    .await
    .unwrap();
    assert!(later.content.is_empty());
}

#[tokio::test]
async fn test_now_on_sale_hotels_are_paged_once_each() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let now = Utc::now().naive_utc();

    let mut on_sale = Vec::new();
    for name in ["Sea Breeze", "Pine Lodge", "Harbor Inn"] {
        let listed = hotel(&db, new_hotel(owner.id, name, "Sokcho")).await;
        for room_name in ["Standard", "Deluxe"] {
            let room_id = room(&db, listed.id, room_name, 100_000).await;
            sale(&db, room_id, 80_000, now - Duration::hours(1), now + Duration::hours(1)).await;
            sale(&db, room_id, 85_000, now - Duration::hours(2), now + Duration::hours(2)).await;
        }
        on_sale.push(listed.id);
    }
    hotel(&db, new_hotel(owner.id, "Quiet Stay", "Sokcho")).await;

    let config = SearchConfig::default();
    let first = TimeSaleService::find_now_time_sale_hotels(&db, PageRequest::new(0, 2), &config, now)
        .await
        .unwrap();
    let second = TimeSaleService::find_now_time_sale_hotels(&db, PageRequest::new(1, 2), &config, now)
        .await
        .unwrap();

    let first_ids: Vec<i32> = first.content.iter().map(|view| view.hotel.id).collect();
    let second_ids: Vec<i32> = second.content.iter().map(|view| view.hotel.id).collect();
    assert_eq!(first_ids, on_sale[..2].to_vec());
    assert!(first.has_next);
    assert_eq!(second_ids, on_sale[2..].to_vec());
    assert!(!second.has_next);
    assert!(second.content.iter().all(|view| view.sale_price == 80_000));
}

#[tokio::test]
async fn test_find_hotel_through_room_and_sale() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let seaside = hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let room_id = room(&db, seaside.id, "Standard", 100_000).await;
    let sale_id = sale(&db, room_id, 80_000, year(2000), year(2999)).await;
    let config = SearchConfig::default();

    let by_room = TimeSaleService::find_hotel_by_room_id(&db, room_id, &config)
        .await
        .unwrap();
    assert_eq!(by_room.hotel, seaside);

    let by_sale = TimeSaleService::find_hotel_by_time_sale_id(&db, sale_id, &config)
        .await
        .unwrap();
    assert_eq!(by_sale.hotel, seaside);
    assert_eq!(by_sale.sale_price, 80_000);

    assert!(matches!(
        TimeSaleService::find_hotel_by_room_id(&db, room_id + 100, &config).await,
        Err(ServiceError::NotFound { entity: "room", .. })
    ));
}

#[tokio::test]
async fn test_delete_time_sale() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let seaside = hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let room_id = room(&db, seaside.id, "Standard", 100_000).await;
    let sale_id = sale(&db, room_id, 80_000, year(2000), year(2999)).await;

    TimeSaleService::delete(&db, sale_id).await.unwrap();

    assert!(matches!(
        TimeSaleService::delete(&db, sale_id).await,
        Err(ServiceError::NotFound {
            entity: "time sale",
            ..
        })
    ));
    assert!(matches!(
        TimeSaleService::find_hotel_by_time_sale_id(&db, sale_id, &SearchConfig::default()).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert_eq!(
        HotelService::sale_price(&db, seaside.id, SalePriceWindow::AllTimeSales, year(2500))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_time_sale_validation() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let seaside = hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let room_id = room(&db, seaside.id, "Standard", 100_000).await;

    let backwards = TimeSaleService::create(
        &db,
        NewTimeSale {
            room_id,
            price: 80_000,
            start_at: year(2001),
            end_at: year(2000),
        },
    )
    .await;
    assert!(matches!(
        backwards,
        Err(ServiceError::Validation(ValidationError::InvalidPeriod { .. }))
    ));

    let negative = TimeSaleService::create(
        &db,
        NewTimeSale {
            room_id,
            price: -1,
            start_at: year(2000),
            end_at: year(2001),
        },
    )
    .await;
    assert!(matches!(
        negative,
        Err(ServiceError::Validation(ValidationError::Negative { .. }))
    ));

    let missing_room = TimeSaleService::create(
        &db,
        NewTimeSale {
            room_id: room_id + 100,
            price: 80_000,
            start_at: year(2000),
            end_at: year(2001),
        },
    )
    .await;
    assert!(matches!(missing_room, Err(ServiceError::NotFound { .. })));
}
