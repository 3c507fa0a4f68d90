//! Ban-aware visibility predicates.
//!
//! A row authored by `X` is visible to viewer `U` iff there is no ban edge
//! `(X, U)`. Every listing and count that surfaces user-generated content
//! folds [`visible_to`] into its `WHERE` clause; nothing is filtered in
//! memory after the fact.

use sea_orm::{
    ColumnTrait,
    sea_query::{Query, SelectStatement, SimpleExpr},
};

use crate::entities::{Ban, ban};

/// Subquery selecting every user that has banned `viewer_id`.
///
/// This is `banner_id WHERE banned_id = viewer`, never the reverse: the
/// users *the viewer* banned stay visible to the viewer.
#[must_use]
pub fn banners_of(viewer_id: i32) -> SelectStatement {
    Query::select()
        .column(ban::Column::BannerId)
        .from(Ban)
        .and_where(ban::Column::BannedId.eq(viewer_id))
        .to_owned()
}

/// Predicate keeping rows whose `author` column is not a user that banned `viewer_id`.
#[must_use]
pub fn visible_to<C: ColumnTrait>(author: C, viewer_id: i32) -> SimpleExpr {
    author.not_in_subquery(banners_of(viewer_id))
}
