//! Create ban table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ban::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ban::BannerId).integer().not_null())
                    .col(ColumnDef::new(Ban::BannedId).integer().not_null())
                    .col(
                        ColumnDef::new(Ban::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite key (banner_id, banned_id) - one edge per pair
                    .primary_key(
                        Index::create()
                            .name("pk_ban")
                            .col(Ban::BannerId)
                            .col(Ban::BannedId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ban_banner")
                            .from(Ban::Table, Ban::BannerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ban_banned")
                            .from(Ban::Table, Ban::BannedId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: banned_id (visibility lookups filter on the banned user)
        manager
            .create_index(
                Index::create()
                    .name("idx_ban_banned_id")
                    .table(Ban::Table)
                    .if_not_exists()
                    .col(Ban::BannedId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ban::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Ban {
    Table,
    BannerId,
    BannedId,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
