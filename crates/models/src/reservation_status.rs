use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Where a reservation is in its payment and stay lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    BeforePaid,
    Paid,
    Refunded,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::BeforePaid => "BEFORE_PAID",
            Self::Paid => "PAID",
            Self::Refunded => "REFUNDED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEFORE_PAID" => Ok(Self::BeforePaid),
            "PAID" => Ok(Self::Paid),
            "REFUNDED" => Ok(Self::Refunded),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("Unknown reservation status: {s}")),
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for ReservationStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "ReservationStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<ReservationStatus> for Value {
    fn from(status: ReservationStatus) -> Self {
        Value::String(Some(Box::new(status.code().to_owned())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for ReservationStatus {
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
impl sea_orm::sea_query::Nullable for ReservationStatus {
    fn null() -> Value {
        Value::String(None)
    }
}
