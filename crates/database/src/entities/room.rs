use models::{
    amenity::{RoomAmenity, RoomFacilities},
    search::{RoomRecord, RoomTextField},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: String,
    pub precaution: String,
    pub price: i32, // base price per night
    pub check_in: Time,
    pub check_out: Time,
    pub standard_capacity: i32,
    pub max_capacity: i32,
    pub total_rooms: i32,
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
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
    #[sea_orm(has_many = "super::time_sale::Entity")]
    TimeSales,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl Related<super::time_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Column {
    pub fn text(field: RoomTextField) -> Self {
        match field {
            RoomTextField::Name => Self::Name,
            RoomTextField::Description => Self::Description,
        }
    }

    pub fn amenity(amenity: RoomAmenity) -> Self {
        match amenity {
            RoomAmenity::HeatingSystem => Self::HeatingSystem,
            RoomAmenity::Tv => Self::Tv,
            RoomAmenity::Refrigerator => Self::Refrigerator,
            RoomAmenity::AirConditioner => Self::AirConditioner,
            RoomAmenity::Washer => Self::Washer,
            RoomAmenity::Terrace => Self::Terrace,
            RoomAmenity::CoffeeMachine => Self::CoffeeMachine,
            RoomAmenity::Internet => Self::Internet,
            RoomAmenity::Kitchen => Self::Kitchen,
            RoomAmenity::Bathtub => Self::Bathtub,
            RoomAmenity::Iron => Self::Iron,
            RoomAmenity::Pool => Self::Pool,
            RoomAmenity::Pet => Self::Pet,
            RoomAmenity::InAnnex => Self::InAnnex,
        }
    }
}

impl Model {
    pub fn facilities(&self) -> RoomFacilities {
        RoomFacilities {
            heating_system: self.heating_system,
            tv: self.tv,
            refrigerator: self.refrigerator,
            air_conditioner: self.air_conditioner,
            washer: self.washer,
            terrace: self.terrace,
            coffee_machine: self.coffee_machine,
            internet: self.internet,
            kitchen: self.kitchen,
            bathtub: self.bathtub,
            iron: self.iron,
            pool: self.pool,
            pet: self.pet,
            in_annex: self.in_annex,
        }
    }
}

impl RoomRecord for Model {
    fn text(&self, field: RoomTextField) -> &str {
        match field {
            RoomTextField::Name => &self.name,
            RoomTextField::Description => &self.description,
        }
    }

    fn amenity(&self, amenity: RoomAmenity) -> bool {
        self.facilities().has(amenity)
    }

    fn price(&self) -> i32 {
        self.price
    }

    fn standard_capacity(&self) -> i32 {
        self.standard_capacity
    }

    fn max_capacity(&self) -> i32 {
        self.max_capacity
    }

    fn created_at(&self) -> DateTime {
        self.created_at
    }

    fn updated_at(&self) -> DateTime {
        self.updated_at
    }
}
