pub mod enrichment;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod time_sale;

pub use enrichment::HotelView;
