use crate::{
    config::SearchConfig,
    entities::{hotel, room, time_sale},
    error::ServiceError,
    services::{enrichment::HotelView, hotel::HotelService},
};
use chrono::{NaiveDateTime, Utc};
use log::info;
use models::{
    page::{PageRequest, Slice},
    sale_price::SalePriceWindow,
    validation::{non_negative, validate_period},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, ModelTrait, QueryFilter, QuerySelect, QueryTrait, RelationTrait,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeSale {
    pub room_id: i32,
    pub price: i32,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

pub struct TimeSaleService;

impl TimeSaleService {
    pub async fn create(
        db: &DatabaseConnection,
        new_sale: NewTimeSale,
    ) -> Result<time_sale::Model, ServiceError> {
        non_negative("price", new_sale.price)?;
        validate_period(new_sale.start_at, new_sale.end_at)?;

        if room::Entity::find_by_id(new_sale.room_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("room", new_sale.room_id));
        }

        let now = Utc::now().naive_utc();
        let sale = time_sale::ActiveModel {
            room_id: Set(new_sale.room_id),
            price: Set(new_sale.price),
            start_at: Set(new_sale.start_at),
            end_at: Set(new_sale.end_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Created time sale {} for room {} at {}",
            sale.id, sale.room_id, sale.price
        );
        Ok(sale)
    }

    pub async fn delete(db: &DatabaseConnection, time_sale_id: i32) -> Result<(), ServiceError> {
        let sale = time_sale::Entity::find_by_id(time_sale_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("time sale", time_sale_id))?;

        sale.delete(db).await?;

        info!("Deleted time sale {time_sale_id}");
        Ok(())
    }

    pub async fn find_hotel_by_room_id(
        db: &DatabaseConnection,
        room_id: i32,
        config: &SearchConfig,
    ) -> Result<HotelView, ServiceError> {
        let room = room::Entity::find_by_id(room_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("room", room_id))?;

        HotelService::find_hotel(db, room.hotel_id, config).await
    }

    pub async fn find_hotel_by_time_sale_id(
        db: &DatabaseConnection,
        time_sale_id: i32,
        config: &SearchConfig,
    ) -> Result<HotelView, ServiceError> {
        let (_, room) = time_sale::Entity::find_by_id(time_sale_id)
            .find_also_related(room::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("time sale", time_sale_id))?;

        // the foreign key guarantees the room while the sale exists
        let room = room.ok_or_else(|| ServiceError::not_found("time sale", time_sale_id))?;

        HotelService::find_hotel(db, room.hotel_id, config).await
    }

    /// Hotels with at least one room on sale at `now`, priced by their running sales only
    pub async fn find_now_time_sale_hotels(
        db: &DatabaseConnection,
        page: PageRequest,
        config: &SearchConfig,
        now: NaiveDateTime,
    ) -> Result<Slice<HotelView>, ServiceError> {
        page.validate(config.max_page_size)?;

        let on_sale = room::Entity::find()
            .select_only()
            .column(room::Column::HotelId)
            .join(JoinType::InnerJoin, room::Relation::TimeSales.def())
            .filter(time_sale::Column::StartAt.lte(now))
            .filter(time_sale::Column::EndAt.gt(now))
            .into_query();

        let condition = Condition::all().add(hotel::Column::Id.in_subquery(on_sale));
        let slice = HotelService::fetch_page(db, condition, page).await?;
        HotelService::enrich(db, slice, SalePriceWindow::ActiveOnly, now).await
    }
}
