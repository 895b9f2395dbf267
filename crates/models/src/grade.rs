use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::Value;

/// Categorical rating left in a review, ordered from worst to best
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Terrible,
    Bad,
    Normal,
    Good,
    Excellent,
}

impl Grade {
    /// Integer weight used when averaging grades
    pub const fn weight(self) -> i32 {
        match self {
            Self::Terrible => 1,
            Self::Bad => 2,
            Self::Normal => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }

    pub const fn from_weight(weight: i32) -> Option<Self> {
        match weight {
            1 => Some(Self::Terrible),
            2 => Some(Self::Bad),
            3 => Some(Self::Normal),
            4 => Some(Self::Good),
            5 => Some(Self::Excellent),
            _ => None,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Terrible => write!(f, "Terrible"),
            Self::Bad => write!(f, "Bad"),
            Self::Normal => write!(f, "Normal"),
            Self::Good => write!(f, "Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Arithmetic mean of the grades' weights, or 0.0 when there are none
pub fn average_grade<I>(grades: I) -> f64
where
    I: IntoIterator<Item = Grade>,
{
    let (sum, count) = grades
        .into_iter()
        .fold((0i64, 0u64), |(sum, count), grade| {
            (sum + i64::from(grade.weight()), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Grade {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::Int(Some(weight)) => {
                Self::from_weight(weight).ok_or(sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Grade".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::Int
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Integer
    }
}

// Stored as the weight so that the database can aggregate it directly
#[cfg(feature = "database")]
impl From<Grade> for Value {
    fn from(grade: Grade) -> Self {
        Value::Int(Some(grade.weight()))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Grade {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let weight: i32 = res.try_get_by(index)?;

        Self::from_weight(weight).ok_or_else(|| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Invalid grade weight: {weight}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Grade {
    fn null() -> Value {
        Value::Int(None)
    }
}
