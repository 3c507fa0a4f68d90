//! Relational store for photogram.
//!
//! [`Store`] owns the connection pool and hands out repositories. Every
//! repository shares the same pool; none of them keep state of their own.

pub mod entities;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod test_utils;
pub mod views;
pub mod visibility;

use std::sync::Arc;
use std::time::Duration;

use photogram_common::{AppError, AppResult, DatabaseConfig};
use repositories::{
    BanRepository, CommentRepository, CountRepository, FollowRepository, LikeRepository,
    PhotoRepository, UserRepository,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::log::LevelFilter;
use views::ViewRepository;

/// Handle to an opened store.
#[derive(Clone)]
pub struct Store {
    db: Arc<DatabaseConnection>,
}

impl Store {
    /// Open a connection pool for the configured database.
    ///
    /// Does not touch the schema; call [`Store::initialize`] before use.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);
        let mut opt = ConnectOptions::new(&config.url);

        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(timeout)
            .acquire_timeout(timeout)
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        tracing::info!(backend = ?conn.get_database_backend(), "Connected to store");
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already opened connection.
    #[must_use]
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { db: Arc::new(conn) }
    }

    /// The underlying connection.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// Create every table, key and index that does not exist yet.
    ///
    /// Idempotent: running it against an initialized store is a no-op.
    pub async fn initialize(&self) -> AppResult<()> {
        if self.db.get_database_backend() == DatabaseBackend::Sqlite {
            self.db
                .execute_unprepared("PRAGMA foreign_keys = ON")
                .await
                .map_err(|e| AppError::SchemaCreation(e.to_string()))?;
        }

        migrations::Migrator::up(self.db.as_ref(), None)
            .await
            .map_err(|e| AppError::SchemaCreation(e.to_string()))?;

        tracing::info!("Schema initialized");
        Ok(())
    }

    /// Liveness check.
    pub async fn ping(&self) -> AppResult<()> {
        self.db
            .ping()
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))
    }

    /// Close the pool.
    ///
    /// Fails with `Internal` while repositories or clones of this store are
    /// still alive.
    pub async fn close(self) -> AppResult<()> {
        let conn = Arc::try_unwrap(self.db).map_err(|_| {
            AppError::Internal("store is still shared and cannot be closed".to_string())
        })?;

        conn.close()
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        tracing::info!("Store closed");
        Ok(())
    }

    /// Users.
    #[must_use]
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.db.clone())
    }

    /// Photos, including the cascading delete.
    #[must_use]
    pub fn photos(&self) -> PhotoRepository {
        PhotoRepository::new(self.db.clone())
    }

    /// Comments.
    #[must_use]
    pub fn comments(&self) -> CommentRepository {
        CommentRepository::new(self.db.clone())
    }

    /// Follow edges.
    #[must_use]
    pub fn follows(&self) -> FollowRepository {
        FollowRepository::new(self.db.clone())
    }

    /// Ban edges.
    #[must_use]
    pub fn bans(&self) -> BanRepository {
        BanRepository::new(self.db.clone())
    }

    /// Like edges.
    #[must_use]
    pub fn likes(&self) -> LikeRepository {
        LikeRepository::new(self.db.clone())
    }

    /// Derived counts.
    #[must_use]
    pub fn counts(&self) -> CountRepository {
        CountRepository::new(self.db.clone())
    }

    /// Viewer-relative read models.
    #[must_use]
    pub fn views(&self) -> ViewRepository {
        ViewRepository::new(self.db.clone())
    }
}
