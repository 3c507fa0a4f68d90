//! Error types for photogram.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Coarse classification of an [`AppError`].
///
/// Callers branch on the kind rather than on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An entity or edge is absent.
    NotFound,
    /// A duplicate edge or username.
    AlreadyExists,
    /// Actor and target are the same user.
    SelfReferenceRejected,
    /// The actor may not touch this resource.
    Forbidden,
    /// Foreign key or uniqueness violation not otherwise classified.
    ConstraintViolation,
    /// Connection or transient store failure.
    StoreUnavailable,
    /// Malformed input.
    Invalid,
    /// Anything else.
    Internal,
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Photo not found: {0}")]
    PhotoNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Self reference rejected: {0}")]
    SelfReference(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    // === Server Errors ===
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Schema creation failed: {0}")]
    SchemaCreation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_)
            | Self::UserNotFound(_)
            | Self::PhotoNotFound(_)
            | Self::CommentNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) | Self::DuplicateUsername(_) => ErrorKind::AlreadyExists,
            Self::SelfReference(_) => ErrorKind::SelfReferenceRejected,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Validation(_) => ErrorKind::Invalid,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            Self::SchemaCreation(_) | Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Returns the HTTP status code the request layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::SelfReferenceRejected | ErrorKind::Invalid => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::AlreadyExists | ErrorKind::ConstraintViolation => 409,
            ErrorKind::StoreUnavailable => 503,
            ErrorKind::Internal => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::PhotoNotFound(_) => "PHOTO_NOT_FOUND",
            Self::CommentNotFound(_) => "COMMENT_NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            Self::SelfReference(_) => "SELF_REFERENCE",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::SchemaCreation(_) => "SCHEMA_CREATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Returns whether this error reports a missing entity or edge.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
