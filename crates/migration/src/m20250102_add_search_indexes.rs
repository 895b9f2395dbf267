use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys walked when grading and pricing a page of hotels
        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_images_hotel_id")
                    .table(HotelImages::Table)
                    .col(HotelImages::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel_id")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room_id")
                    .table(Reservations::Table)
                    .col(Reservations::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_reservation_id")
                    .table(Reviews::Table)
                    .col(Reviews::ReservationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_sales_room_id_window")
                    .table(TimeSales::Table)
                    .col(TimeSales::RoomId)
                    .col(TimeSales::StartAt)
                    .col(TimeSales::EndAt)
                    .to_owned(),
            )
            .await?;

        // Common exact-match search filters
        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_city")
                    .table(Hotels::Table)
                    .col(Hotels::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_category")
                    .table(Hotels::Table)
                    .col(Hotels::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        for name in [
            "idx_hotels_category",
            "idx_hotels_city",
            "idx_time_sales_room_id_window",
            "idx_reviews_reservation_id",
            "idx_reservations_room_id",
            "idx_rooms_hotel_id",
            "idx_hotel_images_hotel_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Hotels {
    Table,
    City,
    Category,
}

#[derive(DeriveIden)]
enum HotelImages {
    Table,
    HotelId,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    HotelId,
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    RoomId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    ReservationId,
}

#[derive(DeriveIden)]
enum TimeSales {
    Table,
    RoomId,
    StartAt,
    EndAt,
}
