use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::Value;

/// The kind of lodging a hotel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotelCategory {
    Hotel,
    Motel,
    Pension,
    GuestHouse,
    Camping,
    Resort,
}

impl HotelCategory {
    /// Canonical string encoding, used for storage and for category filters
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hotel => "HOTEL",
            Self::Motel => "MOTEL",
            Self::Pension => "PENSION",
            Self::GuestHouse => "GUEST_HOUSE",
            Self::Camping => "CAMPING",
            Self::Resort => "RESORT",
        }
    }
}

impl FromStr for HotelCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOTEL" => Ok(Self::Hotel),
            "MOTEL" => Ok(Self::Motel),
            "PENSION" => Ok(Self::Pension),
            "GUEST_HOUSE" => Ok(Self::GuestHouse),
            "CAMPING" => Ok(Self::Camping),
            "RESORT" => Ok(Self::Resort),
            _ => Err(format!("Unknown hotel category: {s}")),
        }
    }
}

impl Display for HotelCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for HotelCategory {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "HotelCategory".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<HotelCategory> for Value {
    fn from(category: HotelCategory) -> Self {
        Value::String(Some(Box::new(category.code().to_owned())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for HotelCategory {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        val.parse()
            .map_err(|e: String| sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(e)))
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for HotelCategory {
    fn null() -> Value {
        Value::String(None)
    }
}
