//! Follow entity (follow edges between users).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "follow")]
pub struct Model {
    /// The user who is following
    #[sea_orm(primary_key, auto_increment = false)]
    pub follower_id: i32,

    /// The user being followed
    #[sea_orm(primary_key, auto_increment = false)]
    pub followed_id: i32,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowerId",
        to = "super::user::Column::Id"
    )]
    Follower,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowedId",
        to = "super::user::Column::Id"
    )]
    Followed,
}

impl ActiveModelBehavior for ActiveModel {}
