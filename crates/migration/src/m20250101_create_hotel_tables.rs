use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Amenity flags default to false so partially filled rows stay searchable
fn flag<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

fn id<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).timestamp().not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id(Users::Id))
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(id(Hotels::Id))
                    .col(ColumnDef::new(Hotels::UserId).integer().not_null())
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::Category).string().not_null())
                    .col(ColumnDef::new(Hotels::Description).text().not_null())
                    .col(ColumnDef::new(Hotels::Notice).text().not_null())
                    .col(ColumnDef::new(Hotels::Province).string().not_null())
                    .col(ColumnDef::new(Hotels::City).string().not_null())
                    .col(ColumnDef::new(Hotels::District).string().not_null())
                    .col(ColumnDef::new(Hotels::DetailedAddress).string().not_null())
                    .col(ColumnDef::new(Hotels::Latitude).double().not_null())
                    .col(ColumnDef::new(Hotels::Longitude).double().not_null())
                    .col(ColumnDef::new(Hotels::MainImage).string().not_null())
                    .col(ColumnDef::new(Hotels::BusinessNumber).string().not_null())
                    .col(ColumnDef::new(Hotels::CertUrl).string().not_null())
                    .col(ColumnDef::new(Hotels::VisitGuidance).text().not_null())
                    .col(flag(Hotels::ParkingLot))
                    .col(flag(Hotels::Wifi))
                    .col(flag(Hotels::Barbecue))
                    .col(flag(Hotels::Sauna))
                    .col(flag(Hotels::SwimmingPool))
                    .col(flag(Hotels::Restaurant))
                    .col(flag(Hotels::RoofTop))
                    .col(flag(Hotels::Fitness))
                    .col(flag(Hotels::Dryer))
                    .col(flag(Hotels::Breakfast))
                    .col(flag(Hotels::SmokingArea))
                    .col(flag(Hotels::AllTimeDesk))
                    .col(flag(Hotels::LuggageStorage))
                    .col(flag(Hotels::SnackBar))
                    .col(flag(Hotels::PetFriendly))
                    .col(timestamp(Hotels::CreatedAt))
                    .col(timestamp(Hotels::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_user_id")
                            .from(Hotels::Table, Hotels::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HotelImages::Table)
                    .if_not_exists()
                    .col(id(HotelImages::Id))
                    .col(ColumnDef::new(HotelImages::HotelId).integer().not_null())
                    .col(ColumnDef::new(HotelImages::ImageUrl).string().not_null())
                    .col(timestamp(HotelImages::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_images_hotel_id")
                            .from(HotelImages::Table, HotelImages::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(id(Rooms::Id))
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Description).text().not_null())
                    .col(ColumnDef::new(Rooms::Precaution).text().not_null())
                    .col(ColumnDef::new(Rooms::Price).integer().not_null())
                    .col(ColumnDef::new(Rooms::CheckIn).time().not_null())
                    .col(ColumnDef::new(Rooms::CheckOut).time().not_null())
                    .col(ColumnDef::new(Rooms::StandardCapacity).integer().not_null())
                    .col(ColumnDef::new(Rooms::MaxCapacity).integer().not_null())
                    .col(ColumnDef::new(Rooms::TotalRooms).integer().not_null())
                    .col(flag(Rooms::HeatingSystem))
                    .col(flag(Rooms::Tv))
                    .col(flag(Rooms::Refrigerator))
                    .col(flag(Rooms::AirConditioner))
                    .col(flag(Rooms::Washer))
                    .col(flag(Rooms::Terrace))
                    .col(flag(Rooms::CoffeeMachine))
                    .col(flag(Rooms::Internet))
                    .col(flag(Rooms::Kitchen))
                    .col(flag(Rooms::Bathtub))
                    .col(flag(Rooms::Iron))
                    .col(flag(Rooms::Pool))
                    .col(flag(Rooms::Pet))
                    .col(flag(Rooms::InAnnex))
                    .col(timestamp(Rooms::CreatedAt))
                    .col(timestamp(Rooms::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_hotel_id")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(id(Reservations::Id))
                    .col(ColumnDef::new(Reservations::UserId).integer().not_null())
                    .col(ColumnDef::new(Reservations::RoomId).integer().not_null())
                    .col(ColumnDef::new(Reservations::Price).integer().not_null())
                    .col(ColumnDef::new(Reservations::StartAt).date().not_null())
                    .col(ColumnDef::new(Reservations::EndAt).date().not_null())
                    .col(
                        ColumnDef::new(Reservations::ReservationCapacity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::AdultCapacity).integer().not_null())
                    .col(ColumnDef::new(Reservations::ChildCapacity).integer().not_null())
                    .col(ColumnDef::new(Reservations::Status).string().not_null())
                    .col(timestamp(Reservations::CreatedAt))
                    .col(timestamp(Reservations::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user_id")
                            .from(Reservations::Table, Reservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_room_id")
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(id(Reviews::Id))
                    .col(ColumnDef::new(Reviews::ReservationId).integer().not_null())
                    // 1 (terrible) to 5 (excellent)
                    .col(ColumnDef::new(Reviews::Grade).integer().not_null())
                    .col(ColumnDef::new(Reviews::Detail).text().not_null())
                    .col(timestamp(Reviews::CreatedAt))
                    .col(timestamp(Reviews::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_reservation_id")
                            .from(Reviews::Table, Reviews::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimeSales::Table)
                    .if_not_exists()
                    .col(id(TimeSales::Id))
                    .col(ColumnDef::new(TimeSales::RoomId).integer().not_null())
                    .col(ColumnDef::new(TimeSales::Price).integer().not_null())
                    .col(timestamp(TimeSales::StartAt))
                    .col(timestamp(TimeSales::EndAt))
                    .col(timestamp(TimeSales::CreatedAt))
                    .col(timestamp(TimeSales::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_sales_room_id")
                            .from(TimeSales::Table, TimeSales::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeSales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HotelImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Hotels {
    Table,
    Id,
    UserId,
    Name,
    Category,
    Description,
    Notice,
    Province,
    City,
    District,
    DetailedAddress,
    Latitude,
    Longitude,
    MainImage,
    BusinessNumber,
    CertUrl,
    VisitGuidance,
    ParkingLot,
    Wifi,
    Barbecue,
    Sauna,
    SwimmingPool,
    Restaurant,
    RoofTop,
    Fitness,
    Dryer,
    Breakfast,
    SmokingArea,
    AllTimeDesk,
    LuggageStorage,
    SnackBar,
    PetFriendly,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum HotelImages {
    Table,
    Id,
    HotelId,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Rooms {
    Table,
    Id,
    HotelId,
    Name,
    Description,
    Precaution,
    Price,
    CheckIn,
    CheckOut,
    StandardCapacity,
    MaxCapacity,
    TotalRooms,
    HeatingSystem,
    Tv,
    Refrigerator,
    AirConditioner,
    Washer,
    Terrace,
    CoffeeMachine,
    Internet,
    Kitchen,
    Bathtub,
    Iron,
    Pool,
    Pet,
    InAnnex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Id,
    UserId,
    RoomId,
    Price,
    StartAt,
    EndAt,
    ReservationCapacity,
    AdultCapacity,
    ChildCapacity,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    Id,
    ReservationId,
    Grade,
    Detail,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum TimeSales {
    Table,
    Id,
    RoomId,
    Price,
    StartAt,
    EndAt,
    CreatedAt,
    UpdatedAt,
}
