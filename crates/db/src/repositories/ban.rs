//! Ban repository.

use std::sync::Arc;

use crate::entities::{Ban, ban};
use crate::error::{classify, db_err};
use chrono::Utc;
use photogram_common::{AppError, AppResult};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// Ban repository for database operations.
///
/// The store is direction-aware but policy-free: it never special-cases
/// `banner == banned`, that rule belongs to the caller.
#[derive(Clone)]
pub struct BanRepository {
    db: Arc<DatabaseConnection>,
}

impl BanRepository {
    /// Create a new ban repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a ban edge. Fails with `AlreadyExists` if the edge is present.
    pub async fn insert(&self, banner_id: i32, banned_id: i32) -> AppResult<()> {
        let model = ban::ActiveModel {
            banner_id: Set(banner_id),
            banned_id: Set(banned_id),
            created_at: Set(Utc::now().into()),
        };

        Ban::insert(model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| classify(e, "ban"))?;

        tracing::debug!(banner = banner_id, banned = banned_id, "Inserted ban");
        Ok(())
    }

    /// Delete a ban edge. Fails with `NotFound` when no row was removed.
    pub async fn delete(&self, banner_id: i32, banned_id: i32) -> AppResult<()> {
        let result = Ban::delete_many()
            .filter(ban::Column::BannerId.eq(banner_id))
            .filter(ban::Column::BannedId.eq(banned_id))
            .exec(self.db.as_ref())
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("ban {banner_id} -> {banned_id}")));
        }

        tracing::debug!(banner = banner_id, banned = banned_id, "Deleted ban");
        Ok(())
    }

    /// Check if `banner_id` has banned `banned_id`. Directional.
    pub async fn is_banning(&self, banner_id: i32, banned_id: i32) -> AppResult<bool> {
        Ok(Ban::find_by_id((banner_id, banned_id))
            .one(self.db.as_ref())
            .await
            .map_err(db_err)?
            .is_some())
    }

    /// Check if either user has banned the other.
    pub async fn is_banned_between(&self, user_a: i32, user_b: i32) -> AppResult<bool> {
        Ok(self.is_banning(user_a, user_b).await? || self.is_banning(user_b, user_a).await?)
    }
}
