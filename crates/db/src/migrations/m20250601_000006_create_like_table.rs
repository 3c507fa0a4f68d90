//! Create like table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Like::UserId).integer().not_null())
                    .col(ColumnDef::new(Like::PhotoId).integer().not_null())
                    .col(
                        ColumnDef::new(Like::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite key (user_id, photo_id) - a photo is liked at most once per user
                    .primary_key(
                        Index::create()
                            .name("pk_like")
                            .col(Like::UserId)
                            .col(Like::PhotoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_user")
                            .from(Like::Table, Like::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_photo")
                            .from(Like::Table, Like::PhotoId)
                            .to(Photo::Table, Photo::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: photo_id (for counting and listing likers)
        manager
            .create_index(
                Index::create()
                    .name("idx_like_photo_id")
                    .table(Like::Table)
                    .if_not_exists()
                    .col(Like::PhotoId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Like {
    Table,
    UserId,
    PhotoId,
    CreatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Photo {
    Table,
    Id,
}
