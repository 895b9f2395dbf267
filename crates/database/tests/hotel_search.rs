mod common;

use chrono::{Duration, Utc};
use common::{hotel, new_hotel, review, room, setup, user};
use database::{
    config::SearchConfig,
    entities::hotel as hotel_entity,
    error::ServiceError,
    services::{
        hotel::HotelService,
        time_sale::{NewTimeSale, TimeSaleService},
    },
};
use models::{
    grade::Grade,
    hotel_category::HotelCategory,
    page::PageRequest,
    sale_price::SalePriceWindow,
    search::{HotelSearchRequest, matches_all},
    validation::ValidationError,
};
use sea_orm::{DatabaseConnection, EntityTrait};

fn ids<T>(content: &[T], id: impl Fn(&T) -> i32) -> Vec<i32> {
    content.iter().map(id).collect()
}

async fn search_ids(db: &DatabaseConnection, request: &HotelSearchRequest) -> Vec<i32> {
    let slice = HotelService::search(
        db,
        request,
        PageRequest::new(0, 100),
        &SearchConfig::default(),
    )
    .await
    .unwrap();
    ids(&slice.content, |view| view.hotel.id)
}

/// Three hotels that differ in city, amenities and category
async fn seed(db: &DatabaseConnection) -> Vec<i32> {
    let owner = user(db, "owner@example.com").await;

    let mut sokcho = new_hotel(owner.id, "Sea Breeze", "Sokcho");
    sokcho.facilities.wifi = true;
    sokcho.facilities.parking_lot = true;

    let mut gangneung = new_hotel(owner.id, "Pine Lodge", "Gangneung");
    gangneung.facilities.wifi = true;
    gangneung.category = HotelCategory::Pension;

    let mut busan = new_hotel(owner.id, "Harbor Inn", "Busan");
    busan.province = "Gyeongsang".to_string();
    busan.category = HotelCategory::GuestHouse;

    let mut ids = Vec::new();
    for new_hotel in [sokcho, gangneung, busan] {
        ids.push(hotel(db, new_hotel).await.id);
    }
    ids
}

#[tokio::test]
async fn test_empty_request_matches_every_hotel() {
    let db = setup().await;
    let seeded = seed(&db).await;

    assert_eq!(search_ids(&db, &HotelSearchRequest::default()).await, seeded);

    let blank = HotelSearchRequest {
        keyword: Some("   ".to_string()),
        city: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(search_ids(&db, &blank).await, seeded);
}

#[tokio::test]
async fn test_results_agree_with_in_memory_filters() {
    let db = setup().await;
    seed(&db).await;
    let all = hotel_entity::Entity::find().all(&db).await.unwrap();

    let requests = [
        HotelSearchRequest {
            wifi: Some(true),
            ..Default::default()
        },
        HotelSearchRequest {
            wifi: Some(true),
            parking_lot: Some(false),
            ..Default::default()
        },
        HotelSearchRequest {
            province: Some("Gangwon".to_string()),
            category: Some(HotelCategory::Pension),
            ..Default::default()
        },
        HotelSearchRequest {
            keyword: Some("Inn".to_string()),
            ..Default::default()
        },
        HotelSearchRequest {
            name: Some("Lodge".to_string()),
            city: Some("Busan".to_string()),
            ..Default::default()
        },
    ];

    for request in &requests {
        let expected: Vec<i32> = all
            .iter()
            .filter(|model| matches_all(&request.filters(), *model))
            .map(|model| model.id)
            .collect();
        assert_eq!(search_ids(&db, request).await, expected, "{request:?}");
    }
}

#[tokio::test]
async fn test_adding_a_filter_never_widens_results() {
    let db = setup().await;
    seed(&db).await;

    let mut request = HotelSearchRequest::default();
    let mut previous = search_ids(&db, &request).await;

    request.province = Some("Gangwon".to_string());
    let by_province = search_ids(&db, &request).await;
    assert!(by_province.iter().all(|id| previous.contains(id)));
    assert_eq!(by_province.len(), 2);
    previous = by_province;

    request.wifi = Some(true);
    let with_wifi = search_ids(&db, &request).await;
    assert!(with_wifi.iter().all(|id| previous.contains(id)));
    previous = with_wifi;

    request.parking_lot = Some(true);
    let with_parking = search_ids(&db, &request).await;
    assert!(with_parking.iter().all(|id| previous.contains(id)));
    assert_eq!(with_parking.len(), 1);
}

#[tokio::test]
async fn test_keyword_matches_any_text_field() {
    let db = setup().await;
    let seeded = seed(&db).await;

    let by_city = HotelSearchRequest {
        keyword: Some("Gangneung".to_string()),
        ..Default::default()
    };
    assert_eq!(search_ids(&db, &by_city).await, vec![seeded[1]]);

    let nothing = HotelSearchRequest {
        keyword: Some("Jeju".to_string()),
        ..Default::default()
    };
    assert!(search_ids(&db, &nothing).await.is_empty());
}

#[tokio::test]
async fn test_wildcards_are_matched_literally() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    hotel(&db, new_hotel(owner.id, "Sea Breeze", "Sokcho")).await;
    let discounted = hotel(&db, new_hotel(owner.id, "100% Ocean", "Sokcho")).await;

    let request = HotelSearchRequest {
        name: Some("%".to_string()),
        ..Default::default()
    };
    assert_eq!(search_ids(&db, &request).await, vec![discounted.id]);
}

#[tokio::test]
async fn test_hotel_without_rooms_or_reviews_reports_zero() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let bare = hotel(&db, new_hotel(owner.id, "Empty Hotel", "Sokcho")).await;

    let view = HotelService::find_hotel(&db, bare.id, &SearchConfig::default())
        .await
        .unwrap();
    assert_eq!(view.grade_average, 0.0);
    assert_eq!(view.sale_price, 0);
    assert_eq!(view.previous_price, 0);
    assert!(view.image_urls.is_empty());
}

#[tokio::test]
async fn test_grade_and_prices_match_direct_lookups() {
    let db = setup().await;
    let owner = user(&db, "owner@example.com").await;
    let guest = user(&db, "guest@example.com").await;

    let mut new = new_hotel(owner.id, "Sea Breeze", "Sokcho");
    new.image_urls = vec![
        "https://img.example.com/1.jpg".to_string(),
        "https://img.example.com/2.jpg".to_string(),
    ];
    let graded = hotel(&db, new).await;
    let standard = room(&db, graded.id, "Standard", 100_000).await;
    let deluxe = room(&db, graded.id, "Deluxe", 80_000).await;

    review(&db, guest.id, standard, Grade::Excellent).await;
    review(&db, guest.id, deluxe, Grade::Good).await;

    let now = Utc::now().naive_utc();
    let sales = [
        (standard, 70_000, now - Duration::days(30), now - Duration::days(20)),
        (deluxe, 75_000, now - Duration::hours(1), now + Duration::hours(1)),
        (standard, 90_000, now + Duration::days(5), now + Duration::days(6)),
    ];
    for (room_id, price, start_at, end_at) in sales {
        TimeSaleService::create(
            &db,
            NewTimeSale {
                room_id,
                price,
                start_at,
                end_at,
            },
        )
        .await
        .unwrap();
    }
    let lowest_sale = |window: SalePriceWindow| {
        sales
            .iter()
            .filter(|(_, _, start, end)| window.includes(*start, *end, now))
            .map(|(_, price, _, _)| *price)
            .min()
            .unwrap_or(0)
    };

    // another hotel's review must not leak into the average
    let other = hotel(&db, new_hotel(owner.id, "Pine Lodge", "Gangneung")).await;
    let other_room = room(&db, other.id, "Single", 50_000).await;
    review(&db, guest.id, other_room, Grade::Terrible).await;

    let slice = HotelService::find_all_with_grade_and_price(
        &db,
        PageRequest::new(0, 10),
        &SearchConfig::default(),
    )
    .await
    .unwrap();
    let view = slice
        .content
        .iter()
        .find(|view| view.hotel.id == graded.id)
        .unwrap();

    assert_eq!(view.grade_average, 4.5);
    assert_eq!(view.previous_price, 80_000);
    assert_eq!(view.sale_price, lowest_sale(SalePriceWindow::AllTimeSales));
    assert_eq!(view.sale_price, 70_000);
    assert_eq!(
        view.image_urls,
        vec![
            "https://img.example.com/1.jpg".to_string(),
            "https://img.example.com/2.jpg".to_string(),
        ]
    );

    assert_eq!(
        HotelService::hotel_grade(&db, graded.id).await.unwrap(),
        view.grade_average
    );
    assert_eq!(
        HotelService::previous_price(&db, graded.id).await.unwrap(),
        view.previous_price
    );
    assert_eq!(
        HotelService::sale_price(
            &db,
            graded.id,
            SalePriceWindow::AllTimeSales,
            now
        )
        .await
        .unwrap(),
        view.sale_price
    );
    assert_eq!(
        HotelService::sale_price(&db, graded.id, SalePriceWindow::ActiveOnly, now)
            .await
            .unwrap(),
        lowest_sale(SalePriceWindow::ActiveOnly)
    );
    assert_eq!(HotelService::find_grade(&db, other.id).await.unwrap(), 1.0);
}

#[tokio::test]
async fn test_page_boundaries() {
    let db = setup().await;
    let seeded = seed(&db).await;
    let config = SearchConfig::default();
    let request = HotelSearchRequest::default();

    let exact = HotelService::search(&db, &request, PageRequest::new(0, 3), &config)
        .await
        .unwrap();
    assert_eq!(exact.content.len(), 3);
    assert!(!exact.has_next);

    let first = HotelService::search(&db, &request, PageRequest::new(0, 2), &config)
        .await
        .unwrap();
    assert_eq!(ids(&first.content, |view| view.hotel.id), seeded[..2].to_vec());
    assert!(first.has_next);

    let second = HotelService::search(&db, &request, PageRequest::new(1, 2), &config)
        .await
        .unwrap();
    assert_eq!(ids(&second.content, |view| view.hotel.id), seeded[2..].to_vec());
    assert!(!second.has_next);

    let past_end = HotelService::search(&db, &request, PageRequest::new(5, 2), &config)
        .await
        .unwrap();
    assert!(past_end.content.is_empty());
    assert!(!past_end.has_next);
}

#[tokio::test]
async fn test_page_size_is_validated() {
    let db = setup().await;
    let config = SearchConfig::default();

    let result = HotelService::search(
        &db,
        &HotelSearchRequest::default(),
        PageRequest::new(0, 0),
        &config,
    )
    .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::InvalidPageSize { .. }))
    ));

    let result = HotelService::search(
        &db,
        &HotelSearchRequest::default(),
        PageRequest::new(0, config.max_page_size + 1),
        &config,
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));

    let result = HotelService::search(
        &db,
        &HotelSearchRequest::default(),
        PageRequest::new(u64::MAX / 2, 100),
        &config,
    )
    .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::PageOutOfRange { .. }))
    ));
}

#[tokio::test]
async fn test_missing_hotel_is_not_found() {
    let db = setup().await;

    assert!(matches!(
        HotelService::find_hotel(&db, 42, &SearchConfig::default()).await,
        Err(ServiceError::NotFound {
            entity: "hotel",
            id: 42
        })
    ));
    assert!(matches!(
        HotelService::find_grade(&db, 42).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_hotel_requires_existing_owner() {
    let db = setup().await;

    let result = HotelService::create(&db, new_hotel(7, "Ghost Hotel", "Sokcho")).await;
    assert!(matches!(
        result,
        Err(ServiceError::NotFound {
            entity: "user",
            id: 7
        })
    ));
}
