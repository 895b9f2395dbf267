use crate::entities::{hotel, hotel_image, reservation, review, room, time_sale};
use chrono::NaiveDateTime;
use futures::try_join;
use models::{
    grade::{Grade, average_grade},
    sale_price::SalePriceWindow,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::HashMap;

/// A hotel row plus the facts derived for it at read time
#[derive(Debug, Clone, PartialEq)]
pub struct HotelView {
    pub hotel: hotel::Model,
    pub image_urls: Vec<String>,
    pub grade_average: f64,
    /// Lowest time-sale price over the hotel's rooms, 0 if there is none
    pub sale_price: i32,
    /// Lowest base room price, 0 if the hotel has no rooms
    pub previous_price: i32,
}

/// Derived facts for one page of hotels, loaded with one query per fact
#[derive(Debug, Default)]
pub struct Enrichment {
    image_urls: HashMap<i32, Vec<String>>,
    grades: HashMap<i32, Vec<Grade>>,
    sale_prices: HashMap<i32, i32>,
    previous_prices: HashMap<i32, i32>,
}

impl Enrichment {
    pub async fn load(
        db: &DatabaseConnection,
        hotel_ids: &[i32],
        window: SalePriceWindow,
        now: NaiveDateTime,
    ) -> Result<Self, DbErr> {
        if hotel_ids.is_empty() {
            return Ok(Self::default());
        }

        let (image_urls, grades, sale_prices, previous_prices) = try_join!(
            Self::image_urls(db, hotel_ids),
            Self::grades(db, hotel_ids),
            Self::sale_prices(db, hotel_ids, window, now),
            Self::previous_prices(db, hotel_ids)
        )?;

        Ok(Self {
            image_urls,
            grades,
            sale_prices,
            previous_prices,
        })
    }

    /// Combine a hotel with its derived facts, consuming them from the cache
    pub fn attach(&mut self, hotel: hotel::Model) -> HotelView {
        let id = hotel.id;

        HotelView {
            image_urls: self.image_urls.remove(&id).unwrap_or_default(),
            grade_average: average_grade(self.grades.remove(&id).unwrap_or_default()),
            sale_price: self.sale_prices.get(&id).copied().unwrap_or(0),
            previous_price: self.previous_prices.get(&id).copied().unwrap_or(0),
            hotel,
        }
    }

    async fn image_urls(
        db: &DatabaseConnection,
        hotel_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        let rows = hotel_image::Entity::find()
            .select_only()
            .column(hotel_image::Column::HotelId)
            .column(hotel_image::Column::ImageUrl)
            .filter(hotel_image::Column::HotelId.is_in(hotel_ids.to_vec()))
            .order_by_asc(hotel_image::Column::Id)
            .into_tuple::<(i32, String)>()
            .all(db)
            .await?;

        let mut by_hotel: HashMap<i32, Vec<String>> = HashMap::new();
        for (hotel_id, url) in rows {
            by_hotel.entry(hotel_id).or_default().push(url);
        }

        Ok(by_hotel)
    }

    /// Grades of every review reachable through reservation -> room -> hotel
    async fn grades(
        db: &DatabaseConnection,
        hotel_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Grade>>, DbErr> {
        let rows = review::Entity::find()
            .select_only()
            .column(room::Column::HotelId)
            .column(review::Column::Grade)
            .join(JoinType::InnerJoin, review::Relation::Reservation.def())
            .join(JoinType::InnerJoin, reservation::Relation::Room.def())
            .filter(room::Column::HotelId.is_in(hotel_ids.to_vec()))
            .into_tuple::<(i32, Grade)>()
            .all(db)
            .await?;

        let mut by_hotel: HashMap<i32, Vec<Grade>> = HashMap::new();
        for (hotel_id, grade) in rows {
            by_hotel.entry(hotel_id).or_default().push(grade);
        }

        Ok(by_hotel)
    }

    async fn sale_prices(
        db: &DatabaseConnection,
        hotel_ids: &[i32],
        window: SalePriceWindow,
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, i32>, DbErr> {
        let mut query = time_sale::Entity::find()
            .select_only()
            .column(room::Column::HotelId)
            .column_as(time_sale::Column::Price.min(), "min_price")
            .join(JoinType::InnerJoin, time_sale::Relation::Room.def())
            .filter(room::Column::HotelId.is_in(hotel_ids.to_vec()))
            .group_by(room::Column::HotelId);

        if window == SalePriceWindow::ActiveOnly {
            query = query
                .filter(time_sale::Column::StartAt.lte(now))
                .filter(time_sale::Column::EndAt.gt(now));
        }

        let rows = query.into_tuple::<(i32, i32)>().all(db).await?;
        Ok(rows.into_iter().collect())
    }

    async fn previous_prices(
        db: &DatabaseConnection,
        hotel_ids: &[i32],
    ) -> Result<HashMap<i32, i32>, DbErr> {
        let rows = room::Entity::find()
            .select_only()
            .column(room::Column::HotelId)
            .column_as(room::Column::Price.min(), "min_price")
            .filter(room::Column::HotelId.is_in(hotel_ids.to_vec()))
            .group_by(room::Column::HotelId)
            .into_tuple::<(i32, i32)>()
            .all(db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
