//! Ban entity.
//!
//! A row `(banner, banned)` hides everything the banner produces from the
//! banned user. Storage is one-directional; the effect is applied at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ban")]
pub struct Model {
    /// The user who issued the ban
    #[sea_orm(primary_key, auto_increment = false)]
    pub banner_id: i32,

    /// The user being banned
    #[sea_orm(primary_key, auto_increment = false)]
    pub banned_id: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BannerId",
        to = "super::user::Column::Id"
    )]
    Banner,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BannedId",
        to = "super::user::Column::Id"
    )]
    Banned,
}

impl ActiveModelBehavior for ActiveModel {}
