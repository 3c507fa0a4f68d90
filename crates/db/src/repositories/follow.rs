//! Follow repository.

use std::sync::Arc;

use crate::entities::{Follow, User, follow, user};
use crate::error::{classify, db_err};
use crate::visibility::visible_to;
use chrono::Utc;
use photogram_common::{AppError, AppResult};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Query,
};

/// Follow repository for database operations.
///
/// Edges are keyed by `(follower_id, followed_id)`. Duplicate inserts and
/// deletes of missing edges are reported, never silently absorbed.
#[derive(Clone)]
pub struct FollowRepository {
    db: Arc<DatabaseConnection>,
}

impl FollowRepository {
    /// Create a new follow repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a follow edge. Fails with `AlreadyExists` if the edge is present.
    pub async fn insert(&self, follower_id: i32, followed_id: i32) -> AppResult<()> {
        let model = follow::ActiveModel {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
            created_at: Set(Utc::now().into()),
        };

        Follow::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| classify(e, "follow"))?;

        tracing::debug!(follower = follower_id, followed = followed_id, "Inserted follow");
        Ok(())
    }

    /// Delete a follow edge. Fails with `NotFound` when no row was removed.
    pub async fn delete(&self, follower_id: i32, followed_id: i32) -> AppResult<()> {
        let result = Follow::delete_many()
            .filter(follow::Column::FollowerId.eq(follower_id))
            .filter(follow::Column::FollowedId.eq(followed_id))
            .exec(self.db.as_ref())
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "follow {follower_id} -> {followed_id}"
            )));
        }

        tracing::debug!(follower = follower_id, followed = followed_id, "Deleted follow");
        Ok(())
    }

    /// Check if `follower_id` follows `followed_id`.
    pub async fn is_following(&self, follower_id: i32, followed_id: i32) -> AppResult<bool> {
        Ok(Follow::find_by_id((follower_id, followed_id))
            .one(self.db.as_ref())
            .await
            .map_err(db_err)?
            .is_some())
    }

    /// Users following `user_id`, ordered by username, hiding users that banned the viewer.
    pub async fn find_followers(
        &self,
        user_id: i32,
        viewer_id: i32,
    ) -> AppResult<Vec<user::Model>> {
        User::find()
            .filter(
                user::Column::Id.in_subquery(
                    Query::select()
                        .column(follow::Column::FollowerId)
                        .from(Follow)
                        .and_where(follow::Column::FollowedId.eq(user_id))
                        .to_owned(),
                ),
            )
            .filter(visible_to(user::Column::Id, viewer_id))
            .order_by_asc(user::Column::Username)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Users `user_id` follows, ordered by username, hiding users that banned the viewer.
    pub async fn find_following(
        &self,
        user_id: i32,
        viewer_id: i32,
    ) -> AppResult<Vec<user::Model>> {
        User::find()
            .filter(
                user::Column::Id.in_subquery(
                    Query::select()
                        .column(follow::Column::FollowedId)
                        .from(Follow)
                        .and_where(follow::Column::FollowerId.eq(user_id))
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
