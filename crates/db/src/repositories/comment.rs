//! Comment repository.

use std::sync::Arc;

use crate::entities::{Comment, comment};
use crate::error::{classify, db_err};
use crate::visibility::visible_to;
use chrono::Utc;
use photogram_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Comment repository for database operations.
#[derive(Clone)]
pub struct CommentRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a comment by `author_id` under `photo_id`.
    pub async fn create(
        &self,
        author_id: i32,
        photo_id: i32,
        body: &str,
    ) -> AppResult<comment::Model> {
        let model = comment::ActiveModel {
            user_id: Set(author_id),
            photo_id: Set(photo_id),
            body: Set(body.to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let created = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(e, "comment"))?;

        tracing::debug!(
            comment_id = created.id,
            author = author_id,
            photo = photo_id,
            "Created comment"
        );
        Ok(created)
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<comment::Model>> {
        Comment::find_by_id(id).one(self.db.as_ref()).await.map_err(db_err)
    }

    /// Find a comment by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<comment::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::CommentNotFound(id.to_string()))
    }

    /// Delete a comment. Fails with `CommentNotFound` when no row was removed.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Comment::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(AppError::CommentNotFound(id.to_string()));
        }

        tracing::debug!(comment_id = id, "Deleted comment");
        Ok(())
    }

    /// Comments under a photo, oldest first, hiding authors that banned the viewer.
    ///
    /// Visibility of the photo itself is not consulted here.
    pub async fn find_visible_by_photo(
        &self,
        photo_id: i32,
        viewer_id: i32,
    ) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::PhotoId.eq(photo_id))
            .filter(visible_to(comment::Column::UserId, viewer_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }
}
