//! Like repository.

use std::sync::Arc;

use crate::entities::{Like, User, like, user};
use crate::error::{classify, db_err};
use crate::visibility::visible_to;
use chrono::Utc;
use photogram_common::{AppError, AppResult};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Query,
};

/// Like repository for database operations.
#[derive(Clone)]
pub struct LikeRepository {
    db: Arc<DatabaseConnection>,
}

impl LikeRepository {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a like edge. Fails with `AlreadyExists` if the user already liked the photo.
    pub async fn insert(&self, user_id: i32, photo_id: i32) -> AppResult<()> {
        let model = like::ActiveModel {
            user_id: Set(user_id),
            photo_id: Set(photo_id),
            created_at: Set(Utc::now().into()),
        };

        Like::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| classify(e, "like"))?;

        tracing::debug!(user = user_id, photo = photo_id, "Inserted like");
        Ok(())
    }

    /// Delete a like edge. Fails with `NotFound` when no row was removed.
    pub async fn delete(&self, user_id: i32, photo_id: i32) -> AppResult<()> {
        let result = Like::delete_many()
            .filter(like::Column::UserId.eq(user_id))
            .filter(like::Column::PhotoId.eq(photo_id))
            .exec(self.db.as_ref())
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("like {user_id} -> photo {photo_id}")));
        }

        tracing::debug!(user = user_id, photo = photo_id, "Deleted like");
        Ok(())
    }

    /// Check if a user has liked a photo.
    pub async fn has_liked(&self, user_id: i32, photo_id: i32) -> AppResult<bool> {
        Ok(Like::find_by_id((user_id, photo_id))
            .one(self.db.as_ref())
            .await
            .map_err(db_err)?
            .is_some())
    }

    /// Users who liked a photo, hiding likers that banned the viewer.
    pub async fn find_likers(&self, photo_id: i32, viewer_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .filter(
                user::Column::Id.in_subquery(
                    Query::select()
                        .column(like::Column::UserId)
                        .from(Like)
                        .and_where(like::Column::PhotoId.eq(photo_id))
                        .to_owned(),
                ),
            )
            .filter(visible_to(user::Column::Id, viewer_id))
            .order_by_asc(user::Column::Username)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }
}
