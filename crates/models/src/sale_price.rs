use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Which time sales count towards a hotel's displayed sale price
///
/// `AllTimeSales` takes the minimum over every time sale attached to the
/// hotel's rooms, including ones that have already ended or not yet started.
/// `ActiveOnly` restricts that to sales whose window contains the current time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalePriceWindow {
    #[default]
    AllTimeSales,
    ActiveOnly,
}

impl SalePriceWindow {
    /// Whether a sale running over `[start, end)` counts at `now`
    pub fn includes(self, start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            Self::AllTimeSales => true,
            Self::ActiveOnly => start <= now && now < end,
        }
    }
}

impl FromStr for SalePriceWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::AllTimeSales),
            "active" => Ok(Self::ActiveOnly),
            _ => Err(format!("Unknown sale price window: {s}")),
        }
    }
}

impl Display for SalePriceWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::AllTimeSales => write!(f, "all"),
            Self::ActiveOnly => write!(f, "active"),
        }
    }
}
