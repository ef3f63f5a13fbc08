use crate::server::data::comment_like::CommentLikeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_comment;
mod like;
