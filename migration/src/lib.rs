pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_post_table;
mod m20260110_000002_create_comment_table;
mod m20260110_000003_create_comment_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_post_table::Migration),
            Box::new(m20260110_000002_create_comment_table::Migration),
            Box::new(m20260110_000003_create_comment_like_table::Migration),
        ]
    }
}
