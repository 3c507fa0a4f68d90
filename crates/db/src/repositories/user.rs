//! User repository.

use std::sync::Arc;

use crate::entities::{User, user};
use crate::error::{classify, db_err};
use crate::visibility::visible_to;
use photogram_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
    sea_query::{Expr, LikeExpr},
};

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a user with a fresh identity.
    pub async fn create(&self, username: &str) -> AppResult<user::Model> {
        let model = user::ActiveModel {
            username: Set(username.to_string()),
            ..Default::default()
        };

        let created = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| username_err(e, username))?;

        tracing::debug!(user_id = created.id, username = %created.username, "Created user");
        Ok(created)
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        User::find_by_id(id).one(self.db.as_ref()).await.map_err(db_err)
    }

    /// Find a user by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<user::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    /// Find a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Find a user by exact username, returning an error if not found.
    pub async fn get_by_username(&self, username: &str) -> AppResult<user::Model> {
        self.find_by_username(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))
    }

    /// Find users by IDs.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<user::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        User::find()
            .filter(user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(user::Column::Username)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }

    /// Rename a user.
    ///
    /// Fails with `UserNotFound` when no row was updated.
    pub async fn update_username(&self, id: i32, new_username: &str) -> AppResult<()> {
        let result = User::update_many()
            .col_expr(user::Column::Username, Expr::value(new_username))
            .filter(user::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| username_err(e, new_username))?;

        if result.rows_affected == 0 {
            return Err(AppError::UserNotFound(id.to_string()));
        }

        tracing::debug!(user_id = id, username = %new_username, "Renamed user");
        Ok(())
    }

    /// Search users whose username contains `query`, hiding users that banned the viewer.
    ///
    /// `%`, `_` and `!` in `query` match literally. Case sensitivity follows
    /// the backend's `LIKE`: ASCII case-insensitive on `SQLite`, exact on
    /// Postgres.
    pub async fn search(&self, query: &str, viewer_id: i32) -> AppResult<Vec<user::Model>> {
        User::find()
            .filter(user::Column::Username.like(contains_pattern(query)))
            .filter(visible_to(user::Column::Id, viewer_id))
            .order_by_asc(user::Column::Username)
            .all(self.db.as_ref())
            .await
            .map_err(db_err)
    }
}

/// Escape character for `LIKE`. Needs no quoting on any backend.
const ESCAPE: char = '!';

fn contains_pattern(query: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | ESCAPE) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(ESCAPE)
}

fn username_err(err: DbErr, username: &str) -> AppError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        AppError::DuplicateUsername(username.to_string())
    } else {
        classify(err, "user")
    }
}
