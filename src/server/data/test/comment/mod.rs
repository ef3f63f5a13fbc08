use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CommentStatusFilter, NewComment},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod bulk_set_approved;
mod counts;
mod create;
mod delete;
mod moderation;
mod queries;
