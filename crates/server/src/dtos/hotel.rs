use database::services::{HotelView, hotel::NewHotel};
use models::{
    amenity::HotelFacilities, hotel_category::HotelCategory, page::Slice,
    search::HotelSearchRequest,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the hotel search. Every field is optional and blank
/// strings are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelSearchParams {
    /// Matched against name, province, city, district and detailed address
    pub keyword: Option<String>,
    pub name: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub detailed_address: Option<String>,

    /// One of HOTEL, MOTEL, PENSION, GUEST_HOUSE, CAMPING, RESORT
    #[param(value_type = Option<String>)]
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

impl From<HotelSearchParams> for HotelSearchRequest {
    fn from(params: HotelSearchParams) -> Self {
        Self {
            keyword: params.keyword,
            name: params.name,
            province: params.province,
            city: params.city,
            district: params.district,
            detailed_address: params.detailed_address,
            category: params.category,
            parking_lot: params.parking_lot,
            wifi: params.wifi,
            barbecue: params.barbecue,
            sauna: params.sauna,
            swimming_pool: params.swimming_pool,
            restaurant: params.restaurant,
            roof_top: params.roof_top,
            fitness: params.fitness,
            dryer: params.dryer,
            breakfast: params.breakfast,
            smoking_area: params.smoking_area,
            all_time_desk: params.all_time_desk,
            luggage_storage: params.luggage_storage,
            snack_bar: params.snack_bar,
            pet_friendly: params.pet_friendly,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HotelFacilitiesBody {
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

impl From<HotelFacilities> for HotelFacilitiesBody {
    fn from(f: HotelFacilities) -> Self {
        Self {
            parking_lot: f.parking_lot,
            wifi: f.wifi,
            barbecue: f.barbecue,
            sauna: f.sauna,
            swimming_pool: f.swimming_pool,
            restaurant: f.restaurant,
            roof_top: f.roof_top,
            fitness: f.fitness,
            dryer: f.dryer,
            breakfast: f.breakfast,
            smoking_area: f.smoking_area,
            all_time_desk: f.all_time_desk,
            luggage_storage: f.luggage_storage,
            snack_bar: f.snack_bar,
            pet_friendly: f.pet_friendly,
        }
    }
}

impl From<HotelFacilitiesBody> for HotelFacilities {
    fn from(f: HotelFacilitiesBody) -> Self {
        Self {
            parking_lot: f.parking_lot,
            wifi: f.wifi,
            barbecue: f.barbecue,
            sauna: f.sauna,
            swimming_pool: f.swimming_pool,
            restaurant: f.restaurant,
            roof_top: f.roof_top,
            fitness: f.fitness,
            dryer: f.dryer,
            breakfast: f.breakfast,
            smoking_area: f.smoking_area,
            all_time_desk: f.all_time_desk,
            luggage_storage: f.luggage_storage,
            snack_bar: f.snack_bar,
            pet_friendly: f.pet_friendly,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelResponse {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub category: String,
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
    pub facilities: HotelFacilitiesBody,
    pub hotel_image_urls: Vec<String>,
    pub grade_average: f64,
    /// Lowest time-sale price, 0 when the hotel has none
    pub sale_price: i32,
    /// Lowest room price, 0 when the hotel has no rooms
    pub previous_price: i32,
}

impl From<HotelView> for HotelResponse {
    fn from(view: HotelView) -> Self {
        let facilities = view.hotel.facilities().into();
        let hotel = view.hotel;

        Self {
            id: hotel.id,
            user_id: hotel.user_id,
            name: hotel.name,
            category: hotel.category.code().to_string(),
            description: hotel.description,
            notice: hotel.notice,
            province: hotel.province,
            city: hotel.city,
            district: hotel.district,
            detailed_address: hotel.detailed_address,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
            main_image: hotel.main_image,
            business_number: hotel.business_number,
            cert_url: hotel.cert_url,
            visit_guidance: hotel.visit_guidance,
            facilities,
            hotel_image_urls: view.image_urls,
            grade_average: view.grade_average,
            sale_price: view.sale_price,
            previous_price: view.previous_price,
        }
    }
}

/// The short form used when listing hotels that are on sale
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelSummaryResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub main_image: String,
    pub grade_average: f64,
    pub sale_price: i32,
    pub previous_price: i32,
}

impl From<HotelView> for HotelSummaryResponse {
    fn from(view: HotelView) -> Self {
        Self {
            id: view.hotel.id,
            name: view.hotel.name,
            category: view.hotel.category.code().to_string(),
            description: view.hotel.description,
            main_image: view.hotel.main_image,
            grade_average: view.grade_average,
            sale_price: view.sale_price,
            previous_price: view.previous_price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelPageResponse {
    pub content: Vec<HotelResponse>,
    pub page: u64,
    pub size: u64,
    pub has_next: bool,
}

impl From<Slice<HotelView>> for HotelPageResponse {
    fn from(slice: Slice<HotelView>) -> Self {
        let slice = slice.map(HotelResponse::from);
        Self {
            content: slice.content,
            page: slice.page,
            size: slice.size,
            has_next: slice.has_next,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelSummaryPageResponse {
    pub content: Vec<HotelSummaryResponse>,
    pub page: u64,
    pub size: u64,
    pub has_next: bool,
}

impl From<Slice<HotelView>> for HotelSummaryPageResponse {
    fn from(slice: Slice<HotelView>) -> Self {
        let slice = slice.map(HotelSummaryResponse::from);
        Self {
            content: slice.content,
            page: slice.page,
            size: slice.size,
            has_next: slice.has_next,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeResponse {
    pub hotel_id: i32,
    /// Mean review weight from 1 (terrible) to 5 (excellent), 0 without reviews
    pub grade_average: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHotelRequest {
    pub user_id: i32,
    pub name: String,
    #[schema(value_type = String, example = "HOTEL")]
    pub category: HotelCategory,
    pub description: String,
    #[serde(default)]
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
    #[serde(default)]
    pub visit_guidance: String,
    #[serde(default)]
    pub facilities: HotelFacilitiesBody,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl From<CreateHotelRequest> for NewHotel {
    fn from(request: CreateHotelRequest) -> Self {
        Self {
            user_id: request.user_id,
            name: request.name,
            category: request.category,
            description: request.description,
            notice: request.notice,
            province: request.province,
            city: request.city,
            district: request.district,
            detailed_address: request.detailed_address,
            latitude: request.latitude,
            longitude: request.longitude,
            main_image: request.main_image,
            business_number: request.business_number,
            cert_url: request.cert_url,
            visit_guidance: request.visit_guidance,
            facilities: request.facilities.into(),
            image_urls: request.image_urls,
        }
    }
}
