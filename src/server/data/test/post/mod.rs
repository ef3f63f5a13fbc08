use crate::server::{data::post::PostRepository, model::post::PostRef};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_ref;
