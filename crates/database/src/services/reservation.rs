use crate::{
    entities::{reservation, room, user},
    error::ServiceError,
};
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use models::{
    reservation_status::ReservationStatus,
    validation::{ValidationError, non_negative, validate_period, validate_reservation_capacity},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};

#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub user_id: i32,
    pub room_id: i32,
    pub price: i32,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub reservation_capacity: i32,
    pub adult_capacity: i32,
    pub child_capacity: i32,
}

impl NewReservation {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_reservation_capacity(
            self.reservation_capacity,
            self.adult_capacity,
            self.child_capacity,
        )?;
        non_negative("price", self.price)?;
        validate_period(self.start_at, self.end_at)
    }
}

pub struct ReservationService;

impl ReservationService {
    /// Persist a reservation awaiting payment. Nothing is written when validation fails.
    pub async fn create(
        db: &DatabaseConnection,
        new_reservation: NewReservation,
    ) -> Result<reservation::Model, ServiceError> {
        if let Err(e) = new_reservation.validate() {
            warn!(
                "Rejected reservation for room {}: {e}",
                new_reservation.room_id
            );
            return Err(e.into());
        }

        if room::Entity::find_by_id(new_reservation.room_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("room", new_reservation.room_id));
        }
        if user::Entity::find_by_id(new_reservation.user_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("user", new_reservation.user_id));
        }

        let now = Utc::now().naive_utc();
        let reservation = reservation::ActiveModel {
            user_id: Set(new_reservation.user_id),
            room_id: Set(new_reservation.room_id),
            price: Set(new_reservation.price),
            start_at: Set(new_reservation.start_at),
            end_at: Set(new_reservation.end_at),
            reservation_capacity: Set(new_reservation.reservation_capacity),
            adult_capacity: Set(new_reservation.adult_capacity),
            child_capacity: Set(new_reservation.child_capacity),
            status: Set(ReservationStatus::default()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(
            "Created reservation {} for room {}",
            reservation.id, reservation.room_id
        );
        Ok(reservation)
    }
}
