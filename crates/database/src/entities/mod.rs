pub mod hotel;
pub mod hotel_image;
pub mod reservation;
pub mod review;
pub mod room;
pub mod time_sale;
pub mod user;
