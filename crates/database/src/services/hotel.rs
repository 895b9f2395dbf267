use crate::{
    config::SearchConfig,
    entities::{hotel, hotel_image, reservation, review, room, time_sale, user},
    error::ServiceError,
    filter::hotel_condition,
    services::enrichment::{Enrichment, HotelView},
};
use chrono::{NaiveDateTime, Utc};
use log::{debug, info};
use models::{
    amenity::HotelFacilities,
    grade::{Grade, average_grade},
    hotel_category::HotelCategory,
    page::{PageRequest, Slice},
    sale_price::SalePriceWindow,
    search::HotelSearchRequest,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

/// Everything needed to register a hotel, images included
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub user_id: i32,
    pub name: String,
    pub category: HotelCategory,
    pub description: String,
    pub notice: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detailed_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub main_image: String,
    pub business_number: String,
    pub cert_url: String,
    pub visit_guidance: String,
    pub facilities: HotelFacilities,
    pub image_urls: Vec<String>,
}

pub struct HotelService;

impl HotelService {
    pub async fn create(
        db: &DatabaseConnection,
        new_hotel: NewHotel,
    ) -> Result<hotel::Model, ServiceError> {
        if user::Entity::find_by_id(new_hotel.user_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("user", new_hotel.user_id));
        }

        let now = Utc::now().naive_utc();
        let NewHotel {
            user_id,
            name,
            category,
            description,
            notice,
            province,
            city,
            district,
            detailed_address,
            latitude,
            longitude,
            main_image,
            business_number,
            cert_url,
            visit_guidance,
            facilities,
            image_urls,
        } = new_hotel;

        let txn = db.begin().await?;

        let hotel = hotel::ActiveModel {
            user_id: Set(user_id),
            name: Set(name),
            category: Set(category),
            description: Set(description),
            notice: Set(notice),
            province: Set(province),
            city: Set(city),
            district: Set(district),
            detailed_address: Set(detailed_address),
            latitude: Set(latitude),
            longitude: Set(longitude),
            main_image: Set(main_image),
            business_number: Set(business_number),
            cert_url: Set(cert_url),
            visit_guidance: Set(visit_guidance),
            parking_lot: Set(facilities.parking_lot),
            wifi: Set(facilities.wifi),
            barbecue: Set(facilities.barbecue),
            sauna: Set(facilities.sauna),
            swimming_pool: Set(facilities.swimming_pool),
            restaurant: Set(facilities.restaurant),
            roof_top: Set(facilities.roof_top),
            fitness: Set(facilities.fitness),
            dryer: Set(facilities.dryer),
            breakfast: Set(facilities.breakfast),
            smoking_area: Set(facilities.smoking_area),
            all_time_desk: Set(facilities.all_time_desk),
            luggage_storage: Set(facilities.luggage_storage),
            snack_bar: Set(facilities.snack_bar),
            pet_friendly: Set(facilities.pet_friendly),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !image_urls.is_empty() {
            let images = image_urls.into_iter().map(|url| hotel_image::ActiveModel {
                hotel_id: Set(hotel.id),
                image_url: Set(url),
                created_at: Set(now),
                ..Default::default()
            });
            hotel_image::Entity::insert_many(images).exec(&txn).await?;
        }

        txn.commit().await?;

        info!("Registered hotel {} ({})", hotel.id, hotel.name);
        Ok(hotel)
    }

    /// Filtered, paged hotel search with grade and prices attached to each hit
    pub async fn search(
        db: &DatabaseConnection,
        request: &HotelSearchRequest,
        page: PageRequest,
        config: &SearchConfig,
    ) -> Result<Slice<HotelView>, ServiceError> {
        page.validate(config.max_page_size)?;

        let filters = request.filters();
        debug!(
            "Searching hotels with {} filters, page {} size {}",
            filters.len(),
            page.page,
            page.size
        );

        let slice = Self::fetch_page(db, hotel_condition(&filters), page).await?;
        Self::enrich(db, slice, config.sale_price_window, Utc::now().naive_utc()).await
    }

    pub async fn find_all_with_grade_and_price(
        db: &DatabaseConnection,
        page: PageRequest,
        config: &SearchConfig,
    ) -> Result<Slice<HotelView>, ServiceError> {
        Self::search(db, &HotelSearchRequest::default(), page, config).await
    }

    pub async fn find_hotel(
        db: &DatabaseConnection,
        hotel_id: i32,
        config: &SearchConfig,
    ) -> Result<HotelView, ServiceError> {
        let hotel = hotel::Entity::find_by_id(hotel_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("hotel", hotel_id))?;

        let mut enrichment = Enrichment::load(
            db,
            &[hotel.id],
            config.sale_price_window,
            Utc::now().naive_utc(),
        )
        .await?;

        Ok(enrichment.attach(hotel))
    }

    /// Average review grade of an existing hotel
    pub async fn find_grade(db: &DatabaseConnection, hotel_id: i32) -> Result<f64, ServiceError> {
        if hotel::Entity::find_by_id(hotel_id).one(db).await?.is_none() {
            return Err(ServiceError::not_found("hotel", hotel_id));
        }

        Ok(Self::hotel_grade(db, hotel_id).await?)
    }

    /// Mean weight of every review left on any of the hotel's rooms, 0.0 without reviews
    pub async fn hotel_grade(db: &DatabaseConnection, hotel_id: i32) -> Result<f64, DbErr> {
        let grades = review::Entity::find()
            .select_only()
            .column(review::Column::Grade)
            .join(JoinType::InnerJoin, review::Relation::Reservation.def())
            .join(JoinType::InnerJoin, reservation::Relation::Room.def())
            .filter(room::Column::HotelId.eq(hotel_id))
            .into_tuple::<Grade>()
            .all(db)
            .await?;

        Ok(average_grade(grades))
    }

    pub async fn sale_price(
        db: &DatabaseConnection,
        hotel_id: i32,
        window: SalePriceWindow,
        now: NaiveDateTime,
    ) -> Result<i32, DbErr> {
        let mut query = time_sale::Entity::find()
            .select_only()
            .column_as(time_sale::Column::Price.min(), "min_price")
            .join(JoinType::InnerJoin, time_sale::Relation::Room.def())
            .filter(room::Column::HotelId.eq(hotel_id));

        if window == SalePriceWindow::ActiveOnly {
            query = query
                .filter(time_sale::Column::StartAt.lte(now))
                .filter(time_sale::Column::EndAt.gt(now));
        }

        let price = query.into_tuple::<Option<i32>>().one(db).await?;
        Ok(price.flatten().unwrap_or(0))
    }

    pub async fn previous_price(db: &DatabaseConnection, hotel_id: i32) -> Result<i32, DbErr> {
        let price = room::Entity::find()
            .select_only()
            .column_as(room::Column::Price.min(), "min_price")
            .filter(room::Column::HotelId.eq(hotel_id))
            .into_tuple::<Option<i32>>()
            .one(db)
            .await?;

        Ok(price.flatten().unwrap_or(0))
    }

    /// One page of hotels in id order, fetching a single extra row to detect a next page
    pub(crate) async fn fetch_page(
        db: &DatabaseConnection,
        condition: Condition,
        page: PageRequest,
    ) -> Result<Slice<hotel::Model>, DbErr> {
        let rows = hotel::Entity::find()
            .filter(condition)
            .order_by_asc(hotel::Column::Id)
            .offset(page.offset())
            .limit(page.fetch_limit())
            .all(db)
            .await?;

        Ok(Slice::from_overfetch(rows, page))
    }

    /// Attach derived facts to the rows that made it into the page
    pub(crate) async fn enrich(
        db: &DatabaseConnection,
        slice: Slice<hotel::Model>,
        window: SalePriceWindow,
        now: NaiveDateTime,
    ) -> Result<Slice<HotelView>, ServiceError> {
        let ids: Vec<i32> = slice.content.iter().map(|hotel| hotel.id).collect();
        let mut enrichment = Enrichment::load(db, &ids, window, now).await?;

        Ok(slice.map(|hotel| enrichment.attach(hotel)))
    }
}
