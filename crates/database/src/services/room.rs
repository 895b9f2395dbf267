use crate::{
    config::SearchConfig,
    entities::{hotel, room},
    error::ServiceError,
    filter::room_condition,
};
use chrono::{NaiveTime, Utc};
use log::{debug, info};
use models::{
    amenity::RoomFacilities,
    page::{PageRequest, Slice},
    search::RoomSearchRequest,
    validation::{non_negative, validate_room_capacity},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub name: String,
    pub description: String,
    pub precaution: String,
    pub price: i32,
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
    pub standard_capacity: i32,
    pub max_capacity: i32,
    pub total_rooms: i32,
    pub facilities: RoomFacilities,
}

pub struct RoomService;

impl RoomService {
    pub async fn create(
        db: &DatabaseConnection,
        hotel_id: i32,
        new_room: NewRoom,
    ) -> Result<room::Model, ServiceError> {
        non_negative("price", new_room.price)?;
        non_negative("total rooms", new_room.total_rooms)?;
        validate_room_capacity(new_room.standard_capacity, new_room.max_capacity)?;

        if hotel::Entity::find_by_id(hotel_id).one(db).await?.is_none() {
            return Err(ServiceError::not_found("hotel", hotel_id));
        }

        let now = Utc::now().naive_utc();
        let facilities = new_room.facilities;
        let room = room::ActiveModel {
            hotel_id: Set(hotel_id),
            name: Set(new_room.name),
            description: Set(new_room.description),
            precaution: Set(new_room.precaution),
            price: Set(new_room.price),
            check_in: Set(new_room.check_in),
            check_out: Set(new_room.check_out),
            standard_capacity: Set(new_room.standard_capacity),
            max_capacity: Set(new_room.max_capacity),
            total_rooms: Set(new_room.total_rooms),
            heating_system: Set(facilities.heating_system),
            tv: Set(facilities.tv),
            refrigerator: Set(facilities.refrigerator),
            air_conditioner: Set(facilities.air_conditioner),
            washer: Set(facilities.washer),
            terrace: Set(facilities.terrace),
            coffee_machine: Set(facilities.coffee_machine),
            internet: Set(facilities.internet),
            kitchen: Set(facilities.kitchen),
            bathtub: Set(facilities.bathtub),
            iron: Set(facilities.iron),
            pool: Set(facilities.pool),
            pet: Set(facilities.pet),
            in_annex: Set(facilities.in_annex),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Added room {} to hotel {hotel_id}", room.id);
        Ok(room)
    }

    pub async fn search(
        db: &DatabaseConnection,
        request: &RoomSearchRequest,
        page: PageRequest,
        config: &SearchConfig,
    ) -> Result<Slice<room::Model>, ServiceError> {
        page.validate(config.max_page_size)?;

        let filters = request.filters();
        debug!(
            "Searching rooms with {} filters, page {} size {}",
            filters.len(),
            page.page,
            page.size
        );

        let rows = room::Entity::find()
            .filter(room_condition(&filters))
            .order_by_asc(room::Column::Id)
            .offset(page.offset())
            .limit(page.fetch_limit())
            .all(db)
            .await?;

        Ok(Slice::from_overfetch(rows, page))
    }
}
