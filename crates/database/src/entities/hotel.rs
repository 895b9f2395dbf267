use models::{
    amenity::{HotelAmenity, HotelFacilities},
    hotel_category::HotelCategory,
    search::{HotelRecord, HotelTextField},
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32, // owner
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
    pub parking_lot: bool,
    pub wifi: bool,
    pub barbecue: bool,
    pub sauna: bool,
    pub swimming_pool: bool,
    pub restaurant: bool,
    pub roof_top: bool,
    pub fitness: bool,
    pub dryer: bool,
    pub breakfast: bool,
    pub smoking_area: bool,
    pub all_time_desk: bool,
    pub luggage_storage: bool,
    pub snack_bar: bool,
    pub pet_friendly: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::hotel_image::Entity")]
    Images,
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::hotel_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Column {
    pub fn text(field: HotelTextField) -> Self {
        match field {
            HotelTextField::Name => Self::Name,
            HotelTextField::Province => Self::Province,
            HotelTextField::City => Self::City,
            HotelTextField::District => Self::District,
            HotelTextField::DetailedAddress => Self::DetailedAddress,
        }
    }

    pub fn amenity(amenity: HotelAmenity) -> Self {
        match amenity {
            HotelAmenity::ParkingLot => Self::ParkingLot,
            HotelAmenity::Wifi => Self::Wifi,
            HotelAmenity::Barbecue => Self::Barbecue,
            HotelAmenity::Sauna => Self::Sauna,
            HotelAmenity::SwimmingPool => Self::SwimmingPool,
            HotelAmenity::Restaurant => Self::Restaurant,
            HotelAmenity::RoofTop => Self::RoofTop,
            HotelAmenity::Fitness => Self::Fitness,
            HotelAmenity::Dryer => Self::Dryer,
            HotelAmenity::Breakfast => Self::Breakfast,
            HotelAmenity::SmokingArea => Self::SmokingArea,
            HotelAmenity::AllTimeDesk => Self::AllTimeDesk,
            HotelAmenity::LuggageStorage => Self::LuggageStorage,
            HotelAmenity::SnackBar => Self::SnackBar,
            HotelAmenity::PetFriendly => Self::PetFriendly,
        }
    }
}

impl Model {
    pub fn facilities(&self) -> HotelFacilities {
        HotelFacilities {
            parking_lot: self.parking_lot,
            wifi: self.wifi,
            barbecue: self.barbecue,
            sauna: self.sauna,
            swimming_pool: self.swimming_pool,
            restaurant: self.restaurant,
            roof_top: self.roof_top,
            fitness: self.fitness,
            dryer: self.dryer,
            breakfast: self.breakfast,
            smoking_area: self.smoking_area,
            all_time_desk: self.all_time_desk,
            luggage_storage: self.luggage_storage,
            snack_bar: self.snack_bar,
            pet_friendly: self.pet_friendly,
        }
    }
}

impl HotelRecord for Model {
    fn text(&self, field: HotelTextField) -> &str {
        match field {
            HotelTextField::Name => &self.name,
            HotelTextField::Province => &self.province,
            HotelTextField::City => &self.city,
            HotelTextField::District => &self.district,
            HotelTextField::DetailedAddress => &self.detailed_address,
        }
    }

    fn amenity(&self, amenity: HotelAmenity) -> bool {
        self.facilities().has(amenity)
    }

    fn category(&self) -> HotelCategory {
        self.category
    }
}
