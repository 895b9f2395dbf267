pub mod hotel;
pub mod page;
pub mod reservation;
pub mod room;
pub mod time_sale;
