pub use super::comment::Entity as Comment;
pub use super::comment_like::Entity as CommentLike;
pub use super::post::Entity as Post;
