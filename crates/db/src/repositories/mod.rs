//! Repositories, one per relation.

mod ban;
mod comment;
mod counter;
mod follow;
mod like;
mod photo;
mod user;

pub use ban::BanRepository;
pub use comment::CommentRepository;
pub use counter::CountRepository;
pub use follow::FollowRepository;
pub use like::LikeRepository;
pub use photo::PhotoRepository;
pub use user::UserRepository;
