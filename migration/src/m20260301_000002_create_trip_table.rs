use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(integer(Trip::DriverId))
                    .col(string(Trip::Origin))
                    .col(string(Trip::Destination))
                    .col(timestamp_with_time_zone(Trip::DepartureAt))
                    .col(integer(Trip::SeatsDeclared))
                    .col(double(Trip::Price))
                    .col(text_null(Trip::Conditions))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_driver_id")
                            .from(Trip::Table, Trip::DriverId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_departure_at")
                    .table(Trip::Table)
                    .col(Trip::DepartureAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    DriverId,
    Origin,
    Destination,
    DepartureAt,
    SeatsDeclared,
    Price,
    Conditions,
    CreatedAt,
}
