use chrono::NaiveDateTime;
use database::{entities::time_sale, services::time_sale::NewTimeSale};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTimeSaleRequest {
    pub room_id: i32,
    pub price: i32,
    /// Inclusive start of the sale
    pub start_at: NaiveDateTime,
    /// Exclusive end of the sale
    pub end_at: NaiveDateTime,
}

impl From<CreateTimeSaleRequest> for NewTimeSale {
    fn from(request: CreateTimeSaleRequest) -> Self {
        Self {
            room_id: request.room_id,
            price: request.price,
            start_at: request.start_at,
            end_at: request.end_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeSaleResponse {
    pub id: i32,
    pub room_id: i32,
    pub price: i32,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

impl From<time_sale::Model> for TimeSaleResponse {
    fn from(sale: time_sale::Model) -> Self {
        Self {
            id: sale.id,
            room_id: sale.room_id,
            price: sale.price,
            start_at: sale.start_at,
            end_at: sale.end_at,
        }
    }
}
