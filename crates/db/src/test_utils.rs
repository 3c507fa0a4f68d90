//! Test utilities for database operations.
//!
//! Provides an initialized, throwaway store backed by in-memory `SQLite`.

use photogram_common::{AppError, AppResult};
use sea_orm::{ConnectOptions, Database};
use tracing::info;

use crate::Store;
use crate::entities::{photo, user};

/// URL of a private in-memory `SQLite` database.
pub const MEMORY_URL: &str = "sqlite::memory:";

/// A test database context owning a fresh, initialized store.
///
/// Every instance is an independent database; nothing is shared between
/// tests, so they can run in parallel.
pub struct TestDatabase {
    store: Store,
}

impl TestDatabase {
    /// Open an in-memory store and create the schema.
    pub async fn new() -> AppResult<Self> {
        // An in-memory database lives as long as its connection, so the pool
        // must hold exactly one.
        let mut opt = ConnectOptions::new(MEMORY_URL);
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        let store = Store::from_connection(conn);
        store.initialize().await?;

        info!("Created in-memory test database");
        Ok(Self { store })
    }

    /// The store under test.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Give up the store, e.g. to exercise [`Store::close`].
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Create a user.
    pub async fn user(&self, username: &str) -> AppResult<user::Model> {
        self.store.users().create(username).await
    }

    /// Create a photo owned by `owner_id`.
    pub async fn photo(&self, owner_id: i32) -> AppResult<photo::Model> {
        let url = format!("https://cdn.example.com/{owner_id}.jpg");
        self.store.photos().create(owner_id, &url).await
    }
}
