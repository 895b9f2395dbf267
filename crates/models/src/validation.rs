use thiserror::Error;

/// Input that is rejected before it reaches the database
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "reservation capacity {reservation} must equal adult capacity {adult} plus child capacity {child}"
    )]
    CapacityMismatch {
        reservation: i32,
        adult: i32,
        child: i32,
    },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("standard capacity {standard} exceeds max capacity {max}")]
    StandardExceedsMax { standard: i32, max: i32 },

    #[error("period must start before it ends ({start} >= {end})")]
    InvalidPeriod { start: String, end: String },

    #[error("page size must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: u64, max: u64 },

    #[error("page {page} of size {size} is out of range")]
    PageOutOfRange { page: u64, size: u64 },
}

pub fn non_negative(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        Err(ValidationError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// A reservation's total head count must be exactly adults plus children
pub fn validate_reservation_capacity(
    reservation: i32,
    adult: i32,
    child: i32,
) -> Result<(), ValidationError> {
    non_negative("reservation capacity", reservation)?;
    non_negative("adult capacity", adult)?;
    non_negative("child capacity", child)?;

    if adult.checked_add(child) != Some(reservation) {
        return Err(ValidationError::CapacityMismatch {
            reservation,
            adult,
            child,
        });
    }

    Ok(())
}

pub fn validate_room_capacity(standard: i32, max: i32) -> Result<(), ValidationError> {
    non_negative("standard capacity", standard)?;
    non_negative("max capacity", max)?;

    if standard > max {
        return Err(ValidationError::StandardExceedsMax { standard, max });
    }

    Ok(())
}

pub fn validate_period<T>(start: T, end: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display,
{
    if start >= end {
        return Err(ValidationError::InvalidPeriod {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}
