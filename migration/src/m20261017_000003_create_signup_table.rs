use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261017_000001_create_camper_table::Camper,
    m20261017_000002_create_activity_table::Activity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signup::Table)
                    .if_not_exists()
                    .col(pk_auto(Signup::Id))
                    .col(integer(Signup::Time))
                    .col(integer(Signup::CamperId))
                    .col(integer(Signup::ActivityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_camper_id")
                            .from(Signup::Table, Signup::CamperId)
                            .to(Camper::Table, Camper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signup_activity_id")
                            .from(Signup::Table, Signup::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_signup_camper_id")
                    .table(Signup::Table)
                    .col(Signup::CamperId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_signup_activity_id")
                    .table(Signup::Table)
                    .col(Signup::ActivityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Signup {
    Table,
    Id,
    Time,
    CamperId,
    ActivityId,
}
