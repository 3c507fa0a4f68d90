//! Relationship service: follows, bans and likes.

use photogram_common::{AppError, AppResult};
use photogram_db::repositories::{
    BanRepository, FollowRepository, LikeRepository, PhotoRepository,
};

/// Relationship service for business logic.
///
/// Banning a user leaves existing follow edges in place; visibility is
/// enforced at read time instead.
#[derive(Clone)]
pub struct RelationshipService {
    ban_repo: BanRepository,
    follow_repo: FollowRepository,
    like_repo: LikeRepository,
    photo_repo: PhotoRepository,
}

impl RelationshipService {
    /// Create a new relationship service.
    #[must_use]
    pub const fn new(
        ban_repo: BanRepository,
        follow_repo: FollowRepository,
        like_repo: LikeRepository,
        photo_repo: PhotoRepository,
    ) -> Self {
        Self {
            ban_repo,
            follow_repo,
            like_repo,
            photo_repo,
        }
    }

    /// Ban a user.
    pub async fn ban(&self, actor_id: i32, target_id: i32) -> AppResult<()> {
        if actor_id == target_id {
            return Err(AppError::SelfReference("Cannot ban yourself".to_string()));
        }

        self.ban_repo.insert(actor_id, target_id).await?;
        tracing::info!(banner = actor_id, banned = target_id, "User banned");
        Ok(())
    }

    /// Lift a ban.
    pub async fn unban(&self, actor_id: i32, target_id: i32) -> AppResult<()> {
        self.ban_repo.delete(actor_id, target_id).await
    }

    /// Follow a user.
    pub async fn follow(&self, actor_id: i32, target_id: i32) -> AppResult<()> {
        if actor_id == target_id {
            return Err(AppError::SelfReference("Cannot follow yourself".to_string()));
        }

        self.follow_repo.insert(actor_id, target_id).await
    }

    /// Stop following a user.
    pub async fn unfollow(&self, actor_id: i32, target_id: i32) -> AppResult<()> {
        self.follow_repo.delete(actor_id, target_id).await
    }

    /// Like a photo.
    ///
    /// A photo whose owner banned the actor is invisible to them, so it is
    /// reported as missing.
    pub async fn like(&self, actor_id: i32, photo_id: i32) -> AppResult<()> {
        let photo = self.photo_repo.get_by_id(photo_id).await?;

        if self.ban_repo.is_banning(photo.user_id, actor_id).await? {
            return Err(AppError::PhotoNotFound(photo_id.to_string()));
        }

        self.like_repo.insert(actor_id, photo_id).await
    }

    /// Remove a like.
    pub async fn unlike(&self, actor_id: i32, photo_id: i32) -> AppResult<()> {
        self.like_repo.delete(actor_id, photo_id).await
    }

    /// Whether `actor_id` has banned `target_id`.
    pub async fn is_banning(&self, actor_id: i32, target_id: i32) -> AppResult<bool> {
        self.ban_repo.is_banning(actor_id, target_id).await
    }

    /// Whether `actor_id` follows `target_id`.
    pub async fn is_following(&self, actor_id: i32, target_id: i32) -> AppResult<bool> {
        self.follow_repo.is_following(actor_id, target_id).await
    }
}
