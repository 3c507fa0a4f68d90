//! Create follow table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Follow::FollowerId).integer().not_null())
                    .col(ColumnDef::new(Follow::FollowedId).integer().not_null())
                    .col(
                        ColumnDef::new(Follow::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite key (follower_id, followed_id) - one edge per pair
                    .primary_key(
                        Index::create()
                            .name("pk_follow")
                            .col(Follow::FollowerId)
                            .col(Follow::FollowedId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_follower")
                            .from(Follow::Table, Follow::FollowerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_followed")
                            .from(Follow::Table, Follow::FollowedId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: followed_id (for listing followers)
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_followed_id")
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(Follow::FollowedId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Follow {
    Table,
    FollowerId,
    FollowedId,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
