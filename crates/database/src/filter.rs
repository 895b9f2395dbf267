//! Lowers filter specifications into sea-orm conditions.

use crate::entities::{hotel, room};
use models::search::{HotelFilter, HotelTextField, RoomFilter, RoomTextField};
use sea_orm::{ColumnTrait, Condition, sea_query::LikeExpr};
use strum::IntoEnumIterator;

const LIKE_ESCAPE: char = '\\';

/// Pattern matching `needle` anywhere, with `LIKE` wildcards in the input escaped
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub fn contains_pattern(needle: &str) -> LikeExpr {
    LikeExpr::new(like_pattern(needle)).escape(LIKE_ESCAPE)
}

/// AND of every filter. An empty slice yields a condition that matches all rows.
pub fn hotel_condition(filters: &[HotelFilter]) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, filter| match filter {
            HotelFilter::Contains(field, value) => {
                condition.add(hotel::Column::text(*field).like(contains_pattern(value)))
            }
            HotelFilter::Amenity(amenity, expected) => {
                condition.add(hotel::Column::amenity(*amenity).eq(*expected))
            }
            HotelFilter::Category(category) => {
                condition.add(hotel::Column::Category.eq(category.code()))
            }
            HotelFilter::Keyword(keyword) => {
                let any_field = HotelTextField::iter().fold(Condition::any(), |any, field| {
                    any.add(hotel::Column::text(field).like(contains_pattern(keyword)))
                });
                condition.add(any_field)
            }
        })
}

pub fn room_condition(filters: &[RoomFilter]) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, filter| match filter {
            RoomFilter::Keyword(keyword) => {
                let any_field = RoomTextField::iter().fold(Condition::any(), |any, field| {
                    any.add(room::Column::text(field).like(contains_pattern(keyword)))
                });
                condition.add(any_field)
            }
            RoomFilter::MaxPrice(price) => condition.add(room::Column::Price.lte(*price)),
            RoomFilter::MinStandardCapacity(capacity) => {
                condition.add(room::Column::StandardCapacity.gte(*capacity))
            }
            RoomFilter::MinMaxCapacity(capacity) => {
                condition.add(room::Column::MaxCapacity.gte(*capacity))
            }
            RoomFilter::Amenity(amenity, expected) => {
                condition.add(room::Column::amenity(*amenity).eq(*expected))
            }
            RoomFilter::CreatedAfter(at) => condition.add(room::Column::CreatedAt.gte(*at)),
            RoomFilter::CreatedBefore(at) => condition.add(room::Column::CreatedAt.lt(*at)),
            RoomFilter::UpdatedAfter(at) => condition.add(room::Column::UpdatedAt.gte(*at)),
            RoomFilter::UpdatedBefore(at) => condition.add(room::Column::UpdatedAt.lt(*at)),
        })
}
