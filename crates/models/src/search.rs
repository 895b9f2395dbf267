//! Search requests and the filter specifications they compile to.
//!
//! A request is a flat bag of optional values. [`HotelSearchRequest::filters`]
//! turns it into a list of tagged predicates containing only the fields that
//! were actually supplied; the database layer lowers that list into a query
//! condition and [`HotelFilter::matches`] evaluates it against loaded rows.

use crate::{
    amenity::{HotelAmenity, RoomAmenity},
    hotel_category::HotelCategory,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Text columns of a hotel that can be searched by substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum HotelTextField {
    Name,
    Province,
    City,
    District,
    DetailedAddress,
}

/// One condition on a hotel row
#[derive(Debug, Clone, PartialEq)]
pub enum HotelFilter {
    /// Case-sensitive substring match on a single text column
    Contains(HotelTextField, String),
    /// Exact match on an amenity flag
    Amenity(HotelAmenity, bool),
    /// Exact match on the category's canonical code
    Category(HotelCategory),
    /// Substring match on any of the text columns
    Keyword(String),
}

/// Read access to the hotel columns that filters look at
pub trait HotelRecord {
    fn text(&self, field: HotelTextField) -> &str;
    fn amenity(&self, amenity: HotelAmenity) -> bool;
    fn category(&self) -> HotelCategory;
}

impl HotelFilter {
    pub fn matches<R: HotelRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Contains(field, needle) => record.text(*field).contains(needle.as_str()),
            Self::Amenity(amenity, expected) => record.amenity(*amenity) == *expected,
            Self::Category(category) => record.category().code() == category.code(),
            Self::Keyword(keyword) => HotelTextField::iter()
                .any(|field| record.text(field).contains(keyword.as_str())),
        }
    }
}

/// Conjunction of every filter; an empty list matches everything
pub fn matches_all<R: HotelRecord + ?Sized>(filters: &[HotelFilter], record: &R) -> bool {
    filters.iter().all(|filter| filter.matches(record))
}

/// Returns the value only if it contains something other than whitespace
fn has_text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelSearchRequest {
    pub keyword: Option<String>,
    pub name: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub detailed_address: Option<String>,
    pub category: Option<HotelCategory>,
    pub parking_lot: Option<bool>,
    pub wifi: Option<bool>,
    pub barbecue: Option<bool>,
    pub sauna: Option<bool>,
    pub swimming_pool: Option<bool>,
    pub restaurant: Option<bool>,
    pub roof_top: Option<bool>,
    pub fitness: Option<bool>,
    pub dryer: Option<bool>,
    pub breakfast: Option<bool>,
    pub smoking_area: Option<bool>,
    pub all_time_desk: Option<bool>,
    pub luggage_storage: Option<bool>,
    pub snack_bar: Option<bool>,
    pub pet_friendly: Option<bool>,
}

impl HotelSearchRequest {
    pub fn text(&self, field: HotelTextField) -> Option<&str> {
        let value = match field {
            HotelTextField::Name => &self.name,
            HotelTextField::Province => &self.province,
            HotelTextField::City => &self.city,
            HotelTextField::District => &self.district,
            HotelTextField::DetailedAddress => &self.detailed_address,
        };
        has_text(value.as_ref())
    }

    pub fn amenity(&self, amenity: HotelAmenity) -> Option<bool> {
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

    /// Compile the supplied fields into filters, skipping absent and blank ones
    pub fn filters(&self) -> Vec<HotelFilter> {
        let mut filters = Vec::new();

        for field in HotelTextField::iter() {
            if let Some(value) = self.text(field) {
                filters.push(HotelFilter::Contains(field, value.to_owned()));
            }
        }

        for amenity in HotelAmenity::iter() {
            if let Some(expected) = self.amenity(amenity) {
                filters.push(HotelFilter::Amenity(amenity, expected));
            }
        }

        if let Some(category) = self.category {
            filters.push(HotelFilter::Category(category));
        }

        if let Some(keyword) = has_text(self.keyword.as_ref()) {
            filters.push(HotelFilter::Keyword(keyword.to_owned()));
        }

        filters
    }
}

/// Text columns of a room covered by the keyword search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum RoomTextField {
    Name,
    Description,
}

/// One condition on a room row
#[derive(Debug, Clone, PartialEq)]
pub enum RoomFilter {
    Keyword(String),
    /// Base price at most this value
    MaxPrice(i32),
    /// Standard capacity at least this value
    MinStandardCapacity(i32),
    /// Max capacity at least this value
    MinMaxCapacity(i32),
    Amenity(RoomAmenity, bool),
    /// Created at or after
    CreatedAfter(NaiveDateTime),
    /// Created strictly before
    CreatedBefore(NaiveDateTime),
    UpdatedAfter(NaiveDateTime),
    UpdatedBefore(NaiveDateTime),
}

pub trait RoomRecord {
    fn text(&self, field: RoomTextField) -> &str;
    fn amenity(&self, amenity: RoomAmenity) -> bool;
    fn price(&self) -> i32;
    fn standard_capacity(&self) -> i32;
    fn max_capacity(&self) -> i32;
    fn created_at(&self) -> NaiveDateTime;
    fn updated_at(&self) -> NaiveDateTime;
}

impl RoomFilter {
    pub fn matches<R: RoomRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Keyword(keyword) => RoomTextField::iter()
                .any(|field| record.text(field).contains(keyword.as_str())),
            Self::MaxPrice(price) => record.price() <= *price,
            Self::MinStandardCapacity(capacity) => record.standard_capacity() >= *capacity,
            Self::MinMaxCapacity(capacity) => record.max_capacity() >= *capacity,
            Self::Amenity(amenity, expected) => record.amenity(*amenity) == *expected,
            Self::CreatedAfter(at) => record.created_at() >= *at,
            Self::CreatedBefore(at) => record.created_at() < *at,
            Self::UpdatedAfter(at) => record.updated_at() >= *at,
            Self::UpdatedBefore(at) => record.updated_at() < *at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSearchRequest {
    pub keyword: Option<String>,
    pub created_after: Option<NaiveDateTime>,
    pub created_before: Option<NaiveDateTime>,
    pub updated_after: Option<NaiveDateTime>,
    pub updated_before: Option<NaiveDateTime>,
    pub price: Option<i32>,
    pub standard_capacity: Option<i32>,
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

impl RoomSearchRequest {
    /// Whether a room passes every filter this request compiles to
    pub fn matches<R: RoomRecord + ?Sized>(&self, record: &R) -> bool {
        self.filters().iter().all(|filter| filter.matches(record))
    }

    pub fn amenity(&self, amenity: RoomAmenity) -> Option<bool> {
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

    pub fn filters(&self) -> Vec<RoomFilter> {
        let mut filters = Vec::new();

        if let Some(keyword) = has_text(self.keyword.as_ref()) {
            filters.push(RoomFilter::Keyword(keyword.to_owned()));
        }

        filters.extend(self.price.map(RoomFilter::MaxPrice));
        filters.extend(self.standard_capacity.map(RoomFilter::MinStandardCapacity));
        filters.extend(self.max_capacity.map(RoomFilter::MinMaxCapacity));

        for amenity in RoomAmenity::iter() {
            if let Some(expected) = self.amenity(amenity) {
                filters.push(RoomFilter::Amenity(amenity, expected));
            }
        }

        filters.extend(self.created_after.map(RoomFilter::CreatedAfter));
        filters.extend(self.created_before.map(RoomFilter::CreatedBefore));
        filters.extend(self.updated_after.map(RoomFilter::UpdatedAfter));
        filters.extend(self.updated_before.map(RoomFilter::UpdatedBefore));

        filters
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::amenity::HotelFacilities;

    struct TestHotel {
        name: &'static str,
        province: &'static str,
        city: &'static str,
        district: &'static str,
        detailed_address: &'static str,
        category: HotelCategory,
        facilities: HotelFacilities,
    }

    impl HotelRecord for TestHotel {
        fn text(&self, field: HotelTextField) -> &str {
            match field {
                HotelTextField::Name => self.name,
                HotelTextField::Province => self.province,
                HotelTextField::City => self.city,
                HotelTextField::District => self.district,
                HotelTextField::DetailedAddress => self.detailed_address,
            }
        }

        fn amenity(&self, amenity: HotelAmenity) -> bool {
            self.facilities.has(amenity)
        }

        fn category(&self) -> HotelCategory {
            self.category
        }
    }

    fn seaside_inn() -> TestHotel {
        let mut facilities = HotelFacilities::default();
        facilities.set(HotelAmenity::Wifi, true);
        facilities.set(HotelAmenity::Breakfast, true);

        TestHotel {
            name: "Seaside Inn",
            province: "Gangwon",
            city: "Sokcho",
            district: "Joyang",
            detailed_address: "12 Beach Road",
            category: HotelCategory::Pension,
            facilities,
        }
    }

    #[test]
    fn test_empty_request_compiles_to_no_filters() {
        let request = HotelSearchRequest::default();
        assert!(request.filters().is_empty());
        assert!(matches_all(&request.filters(), &seaside_inn()));
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let request = HotelSearchRequest {
            name: Some(String::new()),
            city: Some("   ".to_string()),
            keyword: Some("\t".to_string()),
            ..Default::default()
        };
        assert!(request.filters().is_empty());
    }

    #[test]
    fn test_present_fields_compile_in_order() {
        let request = HotelSearchRequest {
            keyword: Some("Beach".to_string()),
            city: Some("Sok".to_string()),
            wifi: Some(false),
            category: Some(HotelCategory::Hotel),
            ..Default::default()
        };

        assert_eq!(
            request.filters(),
            vec![
                HotelFilter::Contains(HotelTextField::City, "Sok".to_string()),
                HotelFilter::Amenity(HotelAmenity::Wifi, false),
                HotelFilter::Category(HotelCategory::Hotel),
                HotelFilter::Keyword("Beach".to_string()),
            ]
        );
    }

    #[test]
    fn test_false_flag_is_a_constraint() {
        let hotel = seaside_inn();
        assert!(HotelFilter::Amenity(HotelAmenity::Sauna, false).matches(&hotel));
        assert!(!HotelFilter::Amenity(HotelAmenity::Wifi, false).matches(&hotel));
        assert!(HotelFilter::Amenity(HotelAmenity::Wifi, true).matches(&hotel));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let hotel = seaside_inn();
        assert!(HotelFilter::Contains(HotelTextField::Name, "Inn".to_string()).matches(&hotel));
        assert!(!HotelFilter::Contains(HotelTextField::Name, "inn".to_string()).matches(&hotel));
    }

    #[test]
    fn test_keyword_searches_every_text_field() {
        let hotel = seaside_inn();
        assert!(HotelFilter::Keyword("Sokcho".to_string()).matches(&hotel));
        assert!(HotelFilter::Keyword("Beach Road".to_string()).matches(&hotel));
        assert!(HotelFilter::Keyword("Gangwon".to_string()).matches(&hotel));
        assert!(!HotelFilter::Keyword("Busan".to_string()).matches(&hotel));
    }

    #[test]
    fn test_adding_a_field_never_widens_the_match() {
        let hotel = seaside_inn();
        let base = HotelSearchRequest {
            keyword: Some("Sea".to_string()),
            ..Default::default()
        };
        let narrowed = HotelSearchRequest {
            sauna: Some(true),
            ..base.clone()
        };

        assert!(matches_all(&base.filters(), &hotel));
        assert!(!matches_all(&narrowed.filters(), &hotel));
    }

    #[test]
    fn test_room_request_filters() {
        let after = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let request = RoomSearchRequest {
            keyword: Some("Ocean".to_string()),
            price: Some(100_000),
            max_capacity: Some(4),
            tv: Some(true),
            created_after: Some(after),
            ..Default::default()
        };

        assert_eq!(
            request.filters(),
            vec![
                RoomFilter::Keyword("Ocean".to_string()),
                RoomFilter::MaxPrice(100_000),
                RoomFilter::MinMaxCapacity(4),
                RoomFilter::Amenity(RoomAmenity::Tv, true),
                RoomFilter::CreatedAfter(after),
            ]
        );
    }
}
