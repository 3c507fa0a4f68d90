//! Photo repository.

use std::sync::Arc;

use crate::entities::{Comment, Follow, Like, Photo, comment, follow, like, photo};
use crate::error::{classify, db_err};
use crate::visibility::visible_to;
use chrono::Utc;
use photogram_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::Query,
};

/// Photo repository for database operations.
#[derive(Clone)]
pub struct PhotoRepository {
    db: Arc<DatabaseConnection>,
}

impl PhotoRepository {
    /// Create a new photo repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a photo owned by `owner_id`.
    pub async fn create(&self, owner_id: i32, url: &str) -> AppResult<photo::Model> {
        let model = photo::ActiveModel {
            user_id: Set(owner_id),
            url: Set(url.to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let created = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(e, "photo"))?;

        tracing::debug!(photo_id = created.id, owner = owner_id, "Created photo");
        Ok(created)
    }

    /// Find a photo by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<photo::Model>> {
        Photo::find_by_id(id).one(self.db.as_ref()).await.map_err(db_err)
    }

    /// Find a photo by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<photo::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::PhotoNotFound(id.to_string()))
    }

    /// Delete a photo together with its likes and comments.
    ///
    /// All three deletes run in one transaction; any failure (including the
    /// photo not existing) rolls the whole cascade back.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let likes = Like::delete_many()
            .filter(like::Column::PhotoId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let comments = Comment::delete_many()
            .filter(comment::Column::PhotoId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let photos = Photo::delete_many()
            .filter(photo::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if photos.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(AppError::PhotoNotFound(id.to_string()));
        }

        txn.commit().await.map_err(db_err)?;

        tracing::debug!(
            photo_id = id,
            likes = likes.rows_affected,
            comments = comments.rows_affected,
            "Deleted photo"
        );
        Ok(())
    }

    /// Photos owned by `owner_id`, newest first.
    ///
    /// Empty when the owner has banned the viewer.
    pub async fn find_by_owner(
        &self,
        owner_id: i32,
        viewer_id: i32,
    ) -> AppResult<Vec<photo::Model>> {
        Photo::find()
            .filter(photo::Column::UserId.eq(owner_id))
            .filter(visible_to(photo::Column::UserId, viewer_id))
            .order_by_desc(photo::Column::CreatedAt)
            .order_by_desc(photo::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Photos posted by users the viewer follows, newest first.
    pub async fn find_stream(&self, viewer_id: i32) -> AppResult<Vec<photo::Model>> {
        Photo::find()
            .filter(
                photo::Column::UserId.in_subquery(
                    Query::select()
                        .column(follow::Column::FollowedId)
                        .from(Follow)
                        .and_where(follow::Column::FollowerId.eq(viewer_id))
                        .to_owned(),
                ),
            )
            .filter(visible_to(photo::Column::UserId, viewer_id))
            .order_by_desc(photo::Column::CreatedAt)
            .order_by_desc(photo::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }
}
