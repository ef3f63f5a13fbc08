mod comment;
mod comment_like;
mod post;
