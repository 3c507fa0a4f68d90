//! Derived counts.
//!
//! Nothing here is cached or denormalized: every call counts source rows.
//! Follow and photo counts are structural and unscoped; like and comment
//! counts pass through the viewer's visibility predicate.

use std::sync::Arc;

use crate::entities::{Comment, Follow, Like, Photo, comment, follow, like, photo};
use crate::error::db_err;
use crate::visibility::visible_to;
use photogram_common::AppResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

/// Aggregate counter over the relations.
#[derive(Clone)]
pub struct CountRepository {
    db: Arc<DatabaseConnection>,
}

impl CountRepository {
    /// Create a new counter.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Number of users following `user_id`.
    pub async fn follower_count(&self, user_id: i32) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::FollowedId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Number of users `user_id` follows.
    pub async fn following_count(&self, user_id: i32) -> AppResult<u64> {
        Follow::find()
            .filter(follow::Column::FollowerId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Number of photos owned by `user_id`.
    pub async fn photo_count(&self, user_id: i32) -> AppResult<u64> {
        Photo::find()
            .filter(photo::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Likes on a photo from users that have not banned the viewer.
    pub async fn like_count(&self, photo_id: i32, viewer_id: i32) -> AppResult<u64> {
        Like::find()
            .filter(like::Column::PhotoId.eq(photo_id))
            .filter(visible_to(like::Column::UserId, viewer_id))
            .count(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Comments on a photo from users that have not banned the viewer.
    pub async fn comment_count(&self, photo_id: i32, viewer_id: i32) -> AppResult<u64> {
        Comment::find()
            .filter(comment::Column::PhotoId.eq(photo_id))
            .filter(visible_to(comment::Column::UserId, viewer_id))
            .count(self.db.as_ref())
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn test_follower_count() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[count_row(3)]])
                .into_connection(),
        );

        let counter = CountRepository::new(db);
        assert_eq!(counter.follower_count(1).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_like_count_query_is_scoped_to_viewer() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[count_row(1)]])
                .into_connection(),
        );

        let counter = CountRepository::new(db.clone());
        assert_eq!(counter.like_count(10, 2).await.unwrap(), 1);
        drop(counter);

        let log = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => unreachable!("counter dropped"),
        };
        let sql = format!("{log:?}");
        assert!(sql.contains("NOT IN (SELECT"), "unexpected SQL: {sql}");
        assert!(sql.contains(r#"\"ban\".\"banned_id\""#), "unexpected SQL: {sql}");
    }
}
