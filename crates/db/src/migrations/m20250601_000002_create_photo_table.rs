//! Create photo table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photo::UserId).integer().not_null())
                    .col(ColumnDef::new(Photo::Url).text().not_null())
                    .col(
                        ColumnDef::new(Photo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_user")
                            .from(Photo::Table, Photo::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: (user_id, created_at) - profile listing and stream
        manager
            .create_index(
                Index::create()
                    .name("idx_photo_user_id_created_at")
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(Photo::UserId)
                    .col(Photo::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Photo {
    Table,
    Id,
    UserId,
    Url,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
