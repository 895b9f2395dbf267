use chrono::{NaiveDateTime, NaiveTime};
use database::{entities::room, services::room::NewRoom};
use models::{amenity::RoomFacilities, page::Slice, search::RoomSearchRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomSearchParams {
    /// Matched against room name and description
    pub keyword: Option<String>,
    /// Rooms created at or after this instant
    pub created_after: Option<NaiveDateTime>,
    /// Rooms created strictly before this instant
    pub created_before: Option<NaiveDateTime>,
    pub updated_after: Option<NaiveDateTime>,
    pub updated_before: Option<NaiveDateTime>,
    /// Upper bound on the base price
    pub price: Option<i32>,
    /// Lower bound on the standard capacity
    pub standard_capacity: Option<i32>,
    /// Lower bound on the max capacity
    pub max_capacity: Option<i32>,
    pub heating_system: Option<bool>,
    pub tv: Option<bool>,
    pub refrigerator: Option<bool>,
    pub air_conditioner: Option<bool>,
    pub washer: Option<bool>,
    pub terrace: Option<bool>,
    pub coffee_machine: Option<bool>,
    pub internet: Option<bool>,
    pub kitchen: Option<bool>,
    pub bathtub: Option<bool>,
    pub iron: Option<bool>,
    pub pool: Option<bool>,
    pub pet: Option<bool>,
    pub in_annex: Option<bool>,
}

impl From<RoomSearchParams> for RoomSearchRequest {
    fn from(params: RoomSearchParams) -> Self {
        Self {
            keyword: params.keyword,
            created_after: params.created_after,
            created_before: params.created_before,
            updated_after: params.updated_after,
            updated_before: params.updated_before,
            price: params.price,
            standard_capacity: params.standard_capacity,
            max_capacity: params.max_capacity,
            heating_system: params.heating_system,
            tv: params.tv,
            refrigerator: params.refrigerator,
            air_conditioner: params.air_conditioner,
            washer: params.washer,
            terrace: params.terrace,
            coffee_machine: params.coffee_machine,
            internet: params.internet,
            kitchen: params.kitchen,
            bathtub: params.bathtub,
            iron: params.iron,
            pool: params.pool,
            pet: params.pet,
            in_annex: params.in_annex,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RoomFacilitiesBody {
    pub heating_system: bool,
    pub tv: bool,
    pub refrigerator: bool,
    pub air_conditioner: bool,
    pub washer: bool,
    pub terrace: bool,
    pub coffee_machine: bool,
    pub internet: bool,
    pub kitchen: bool,
    pub bathtub: bool,
    pub iron: bool,
    pub pool: bool,
    pub pet: bool,
    pub in_annex: bool,
}

impl From<RoomFacilities> for RoomFacilitiesBody {
    fn from(f: RoomFacilities) -> Self {
        Self {
            heating_system: f.heating_system,
            tv: f.tv,
            refrigerator: f.refrigerator,
            air_conditioner: f.air_conditioner,
            washer: f.washer,
            terrace: f.terrace,
            coffee_machine: f.coffee_machine,
            internet: f.internet,
            kitchen: f.kitchen,
            bathtub: f.bathtub,
            iron: f.iron,
            pool: f.pool,
            pet: f.pet,
            in_annex: f.in_annex,
        }
    }
}

impl From<RoomFacilitiesBody> for RoomFacilities {
    fn from(f: RoomFacilitiesBody) -> Self {
        Self {
            heating_system: f.heating_system,
            tv: f.tv,
            refrigerator: f.refrigerator,
            air_conditioner: f.air_conditioner,
            washer: f.washer,
            terrace: f.terrace,
            coffee_machine: f.coffee_machine,
            internet: f.internet,
            kitchen: f.kitchen,
            bathtub: f.bathtub,
            iron: f.iron,
            pool: f.pool,
            pet: f.pet,
            in_annex: f.in_annex,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub precaution: String,
    pub price: i32,
    #[schema(value_type = String, example = "15:00:00")]
    pub check_in: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub check_out: NaiveTime,
    pub standard_capacity: i32,
    pub max_capacity: i32,
    pub total_rooms: i32,
    #[serde(default)]
    pub facilities: RoomFacilitiesBody,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(request: CreateRoomRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            precaution: request.precaution,
            price: request.price,
            check_in: request.check_in,
            check_out: request.check_out,
            standard_capacity: request.standard_capacity,
            max_capacity: request.max_capacity,
            total_rooms: request.total_rooms,
            facilities: request.facilities.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: String,
    pub precaution: String,
    pub price: i32,
    #[schema(value_type = String)]
    pub check_in: NaiveTime,
    #[schema(value_type = String)]
    pub check_out: NaiveTime,
    pub standard_capacity: i32,
    pub max_capacity: i32,
    pub total_rooms: i32,
    pub facilities: RoomFacilitiesBody,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<room::Model> for RoomResponse {
    fn from(room: room::Model) -> Self {
        Self {
            facilities: room.facilities().into(),
            id: room.id,
            hotel_id: room.hotel_id,
            name: room.name,
            description: room.description,
            precaution: room.precaution,
            price: room.price,
            check_in: room.check_in,
            check_out: room.check_out,
            standard_capacity: room.standard_capacity,
            max_capacity: room.max_capacity,
            total_rooms: room.total_rooms,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomPageResponse {
    pub content: Vec<RoomResponse>,
    pub page: u64,
    pub size: u64,
    pub has_next: bool,
}

impl From<Slice<room::Model>> for RoomPageResponse {
    fn from(slice: Slice<room::Model>) -> Self {
        let slice = slice.map(RoomResponse::from);
        Self {
            content: slice.content,
            page: slice.page,
            size: slice.size,
            has_next: slice.has_next,
        }
    }
}
