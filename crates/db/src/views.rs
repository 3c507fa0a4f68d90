//! Composed read models.
//!
//! Every view is computed for an acting user (the viewer). Counts and
//! listings inside a view go through the same visibility predicate as the
//! underlying repositories, so two viewers can see different numbers for
//! the same photo.

use std::collections::HashMap;
use std::sync::Arc;

use photogram_common::{AppError, AppResult};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use crate::entities::{comment, photo, user};
use crate::repositories::{
    BanRepository, CommentRepository, CountRepository, FollowRepository, LikeRepository,
    PhotoRepository, UserRepository,
};

/// A photo as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoView {
    /// Photo ID.
    pub id: i32,
    /// Uploader.
    pub owner: user::Model,
    /// Where the image is stored.
    pub url: String,
    /// Upload time.
    pub created_at: DateTimeWithTimeZone,
    /// Likes from users that have not banned the viewer.
    pub like_count: u64,
    /// Comments from users that have not banned the viewer.
    pub comment_count: u64,
    /// Whether the viewer liked this photo.
    pub liked_by_viewer: bool,
}

/// A comment with its author and photo resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// Comment ID.
    pub id: i32,
    /// Who wrote the comment.
    pub author: user::Model,
    /// The photo commented on, as seen by the same viewer.
    pub photo: PhotoView,
    /// When the comment was posted.
    pub created_at: DateTimeWithTimeZone,
    /// Comment text.
    pub body: String,
}

/// A user's profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// The profile's owner.
    pub user: user::Model,
    /// Photos of the owner, newest first. Empty when the owner banned the viewer.
    pub photos: Vec<PhotoView>,
    /// Total photos uploaded by the owner.
    pub photo_count: u64,
    /// Total users following the owner.
    pub followers_count: u64,
    /// Total users the owner follows.
    pub following_count: u64,
    /// Whether the viewer follows this user.
    pub follow_status: bool,
    /// Whether the viewer has banned this user.
    pub ban_status: bool,
}

/// Photos from followed users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    /// The stream's viewer.
    pub user: user::Model,
    /// Photos from followed users, newest first.
    pub photos: Vec<PhotoView>,
}

/// A list of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserList {
    /// Users in list order.
    pub users: Vec<user::Model>,
}

/// A list of comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentList {
    /// Comments, oldest first.
    pub comments: Vec<CommentView>,
}

/// Builds viewer-relative read models out of the repositories.
#[derive(Clone)]
pub struct ViewRepository {
    users: UserRepository,
    photos: PhotoRepository,
    comments: CommentRepository,
    follows: FollowRepository,
    bans: BanRepository,
    likes: LikeRepository,
    counts: CountRepository,
}

impl ViewRepository {
    /// Create a new view repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            photos: PhotoRepository::new(db.clone()),
            comments: CommentRepository::new(db.clone()),
            follows: FollowRepository::new(db.clone()),
            bans: BanRepository::new(db.clone()),
            likes: LikeRepository::new(db.clone()),
            counts: CountRepository::new(db),
        }
    }

    /// A single photo with viewer-scoped counts.
    pub async fn photo(&self, photo_id: i32, viewer_id: i32) -> AppResult<PhotoView> {
        let photo = self.photos.get_by_id(photo_id).await?;
        let owner = self.users.get_by_id(photo.user_id).await?;
        self.photo_view(photo, owner, viewer_id).await
    }

    /// A single comment with its author and photo.
    pub async fn comment(&self, comment_id: i32, viewer_id: i32) -> AppResult<CommentView> {
        let comment = self.comments.get_by_id(comment_id).await?;
        let author = self.users.get_by_id(comment.user_id).await?;
        let photo = self.photo(comment.photo_id, viewer_id).await?;
        Ok(comment_view(comment, author, photo))
    }

    /// Comments under a photo that the viewer may see.
    pub async fn comment_list(&self, photo_id: i32, viewer_id: i32) -> AppResult<CommentList> {
        let photo = self.photo(photo_id, viewer_id).await?;
        let comments = self
            .comments
            .find_visible_by_photo(photo_id, viewer_id)
            .await?;

        let authors = self.users_by_id(comments.iter().map(|c| c.user_id)).await?;

        let comments = comments
            .into_iter()
            .map(|c| {
                let author = lookup(&authors, c.user_id)?;
                Ok(comment_view(c, author, photo.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CommentList { comments })
    }

    /// Users who liked a photo, minus those that banned the viewer.
    pub async fn like_list(&self, photo_id: i32, viewer_id: i32) -> AppResult<UserList> {
        self.photos.get_by_id(photo_id).await?;
        let users = self.likes.find_likers(photo_id, viewer_id).await?;
        Ok(UserList { users })
    }

    /// Users following `user_id`, minus those that banned the viewer.
    pub async fn followers(&self, user_id: i32, viewer_id: i32) -> AppResult<UserList> {
        self.users.get_by_id(user_id).await?;
        let users = self.follows.find_followers(user_id, viewer_id).await?;
        Ok(UserList { users })
    }

    /// Users `user_id` follows, minus those that banned the viewer.
    pub async fn following(&self, user_id: i32, viewer_id: i32) -> AppResult<UserList> {
        self.users.get_by_id(user_id).await?;
        let users = self.follows.find_following(user_id, viewer_id).await?;
        Ok(UserList { users })
    }

    /// Username search, minus users that banned the viewer.
    pub async fn search_users(&self, query: &str, viewer_id: i32) -> AppResult<UserList> {
        let users = self.users.search(query, viewer_id).await?;
        Ok(UserList { users })
    }

    /// Profile of `user_id` as seen by the viewer.
    pub async fn profile(&self, user_id: i32, viewer_id: i32) -> AppResult<Profile> {
        let user = self.users.get_by_id(user_id).await?;

        let photos = self.photos.find_by_owner(user_id, viewer_id).await?;
        let mut views = Vec::with_capacity(photos.len());
        for photo in photos {
            views.push(self.photo_view(photo, user.clone(), viewer_id).await?);
        }

        Ok(Profile {
            photo_count: self.counts.photo_count(user_id).await?,
            followers_count: self.counts.follower_count(user_id).await?,
            following_count: self.counts.following_count(user_id).await?,
            follow_status: self.follows.is_following(viewer_id, user_id).await?,
            ban_status: self.bans.is_banning(viewer_id, user_id).await?,
            photos: views,
            user,
        })
    }

    /// The viewer's stream.
    pub async fn stream(&self, viewer_id: i32) -> AppResult<Stream> {
        let user = self.users.get_by_id(viewer_id).await?;
        let photos = self.photos.find_stream(viewer_id).await?;
        let owners = self.users_by_id(photos.iter().map(|p| p.user_id)).await?;

        let mut views = Vec::with_capacity(photos.len());
        for photo in photos {
            let owner = lookup(&owners, photo.user_id)?;
            views.push(self.photo_view(photo, owner, viewer_id).await?);
        }

        Ok(Stream {
            user,
            photos: views,
        })
    }

    async fn photo_view(
        &self,
        photo: photo::Model,
        owner: user::Model,
        viewer_id: i32,
    ) -> AppResult<PhotoView> {
        Ok(PhotoView {
            like_count: self.counts.like_count(photo.id, viewer_id).await?,
            comment_count: self.counts.comment_count(photo.id, viewer_id).await?,
            liked_by_viewer: self.likes.has_liked(viewer_id, photo.id).await?,
            id: photo.id,
            owner,
            url: photo.url,
            created_at: photo.created_at,
        })
    }

    async fn users_by_id(
        &self,
        ids: impl Iterator<Item = i32>,
    ) -> AppResult<HashMap<i32, user::Model>> {
        let mut ids: Vec<i32> = ids.collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }
}

fn lookup(users: &HashMap<i32, user::Model>, id: i32) -> AppResult<user::Model> {
    users
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::UserNotFound(id.to_string()))
}

fn comment_view(comment: comment::Model, author: user::Model, photo: PhotoView) -> CommentView {
    CommentView {
        id: comment.id,
        author,
        photo,
        created_at: comment.created_at,
        body: comment.body,
    }
}
