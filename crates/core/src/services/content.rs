//! Content service: photos and comments.

use photogram_common::{AppError, AppResult};
use photogram_db::{
    entities::{comment, photo},
    repositories::{BanRepository, CommentRepository, PhotoRepository},
};
use serde::Deserialize;
use validator::Validate;

/// Input for uploading a photo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PhotoInput {
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}

/// Input for posting a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentInput {
    #[validate(length(min = 1, max = 2048))]
    pub body: String,
}

/// Content service for business logic.
#[derive(Clone)]
pub struct ContentService {
    photo_repo: PhotoRepository,
    comment_repo: CommentRepository,
    ban_repo: BanRepository,
}

impl ContentService {
    /// Create a new content service.
    #[must_use]
    pub const fn new(
        photo_repo: PhotoRepository,
        comment_repo: CommentRepository,
        ban_repo: BanRepository,
    ) -> Self {
        Self {
            photo_repo,
            comment_repo,
            ban_repo,
        }
    }

    /// Upload a photo.
    pub async fn upload_photo(&self, owner_id: i32, input: PhotoInput) -> AppResult<photo::Model> {
        input.validate()?;
        self.photo_repo.create(owner_id, &input.url).await
    }

    /// Delete a photo with its comments and likes. Only the owner may do this.
    pub async fn delete_photo(&self, actor_id: i32, photo_id: i32) -> AppResult<()> {
        let photo = self.photo_repo.get_by_id(photo_id).await?;

        if photo.user_id != actor_id {
            return Err(AppError::Forbidden(
                "Only the owner can delete a photo".to_string(),
            ));
        }

        self.photo_repo.delete(photo_id).await?;
        tracing::info!(photo_id, owner = actor_id, "Photo deleted");
        Ok(())
    }

    /// Comment on a photo.
    ///
    /// A photo whose owner banned the author is reported as missing.
    pub async fn comment(
        &self,
        author_id: i32,
        photo_id: i32,
        input: CommentInput,
    ) -> AppResult<comment::Model> {
        input.validate()?;

        let photo = self.photo_repo.get_by_id(photo_id).await?;
        if self.ban_repo.is_banning(photo.user_id, author_id).await? {
            return Err(AppError::PhotoNotFound(photo_id.to_string()));
        }

        self.comment_repo
            .create(author_id, photo_id, &input.body)
            .await
    }

    /// Delete a comment. Only its author may do this.
    pub async fn delete_comment(&self, actor_id: i32, comment_id: i32) -> AppResult<()> {
        let comment = self.comment_repo.get_by_id(comment_id).await?;

        if comment.user_id != actor_id {
            return Err(AppError::Forbidden(
                "Only the author can delete a comment".to_string(),
            ));
        }

        self.comment_repo.delete(comment_id).await
    }
}
