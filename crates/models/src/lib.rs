pub mod amenity;
pub mod grade;
pub mod hotel_category;
pub mod page;
pub mod reservation_status;
pub mod sale_price;
pub mod search;
pub mod validation;
