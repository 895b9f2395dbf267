use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Facilities a hotel may offer, each stored as its own boolean column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum HotelAmenity {
    ParkingLot,
    Wifi,
    Barbecue,
    Sauna,
    SwimmingPool,
    Restaurant,
    RoofTop,
    Fitness,
    Dryer,
    Breakfast,
    SmokingArea,
    AllTimeDesk,
    LuggageStorage,
    SnackBar,
    PetFriendly,
}

/// Facilities a single room may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RoomAmenity {
    HeatingSystem,
    Tv,
    Refrigerator,
    AirConditioner,
    Washer,
    Terrace,
    CoffeeMachine,
    Internet,
    Kitchen,
    Bathtub,
    Iron,
    Pool,
    Pet,
    InAnnex,
}

/// The full set of hotel amenity flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelFacilities {
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
}

impl HotelFacilities {
    pub fn has(&self, amenity: HotelAmenity) -> bool {
        match amenity {
            HotelAmenity::ParkingLot => self.parking_lot,
            HotelAmenity::Wifi => self.wifi,
            HotelAmenity::Barbecue => self.barbecue,
            HotelAmenity::Sauna => self.sauna,
            HotelAmenity::SwimmingPool => self.swimming_pool,
            HotelAmenity::Restaurant => self.restaurant,
            HotelAmenity::RoofTop => self.roof_top,
            HotelAmenity::Fitness => self.fitness,
            HotelAmenity::Dryer => self.dryer,
            HotelAmenity::Breakfast => self.breakfast,
            HotelAmenity::SmokingArea => self.smoking_area,
            HotelAmenity::AllTimeDesk => self.all_time_desk,
            HotelAmenity::LuggageStorage => self.luggage_storage,
            HotelAmenity::SnackBar => self.snack_bar,
            HotelAmenity::PetFriendly => self.pet_friendly,
        }
    }

    pub fn set(&mut self, amenity: HotelAmenity, value: bool) {
        let flag = match amenity {
            HotelAmenity::ParkingLot => &mut self.parking_lot,
            HotelAmenity::Wifi => &mut self.wifi,
            HotelAmenity::Barbecue => &mut self.barbecue,
            HotelAmenity::Sauna => &mut self.sauna,
            HotelAmenity::SwimmingPool => &mut self.swimming_pool,
            HotelAmenity::Restaurant => &mut self.restaurant,
            HotelAmenity::RoofTop => &mut self.roof_top,
            HotelAmenity::Fitness => &mut self.fitness,
            HotelAmenity::Dryer => &mut self.dryer,
            HotelAmenity::Breakfast => &mut self.breakfast,
            HotelAmenity::SmokingArea => &mut self.smoking_area,
            HotelAmenity::AllTimeDesk => &mut self.all_time_desk,
            HotelAmenity::LuggageStorage => &mut self.luggage_storage,
            HotelAmenity::SnackBar => &mut self.snack_bar,
            HotelAmenity::PetFriendly => &mut self.pet_friendly,
        };
        *flag = value;
    }
}

/// The full set of room amenity flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFacilities {
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

impl RoomFacilities {
    pub fn has(&self, amenity: RoomAmenity) -> bool {
        match amenity {
            RoomAmenity::HeatingSystem => self.heating_system,
            RoomAmenity::Tv => self.tv,
            RoomAmenity::Refrigerator => self.refrigerator,
            RoomAmenity::AirConditioner => self.air_conditioner,
            RoomAmenity::Washer => self.washer,
            RoomAmenity::Terrace => self.terrace,
            RoomAmenity::CoffeeMachine => self.coffee_machine,
            RoomAmenity::Internet => self.internet,
            RoomAmenity::Kitchen => self.kitchen,
            RoomAmenity::Bathtub => self.bathtub,
            RoomAmenity::Iron => self.iron,
            RoomAmenity::Pool => self.pool,
            RoomAmenity::Pet => self.pet,
            RoomAmenity::InAnnex => self.in_annex,
        }
    }
}
