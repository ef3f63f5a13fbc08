//! SeaORM entity definitions for the commentboard database schema.

pub mod comment;
pub mod comment_like;
pub mod post;
pub mod prelude;
