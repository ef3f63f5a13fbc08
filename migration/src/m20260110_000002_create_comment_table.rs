use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::PostId))
                    .col(integer_null(Comment::ParentId))
                    .col(string_null(Comment::AuthorName))
                    .col(string_null(Comment::AuthorEmail))
                    .col(string_null(Comment::AuthorWebsite))
                    .col(text(Comment::Content))
                    .col(boolean(Comment::Approved).default(false))
                    .col(boolean(Comment::IsTrash).default(false))
                    .col(text_null(Comment::AdminReply))
                    .col(integer(Comment::Level).default(0))
                    // Written in a second step of the insert transaction, once
                    // the row id is known.
                    .col(string(Comment::Path).default(""))
                    .col(
                        timestamp(Comment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Comment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post_id")
                            .from(Comment::Table, Comment::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_parent_id")
                            .from(Comment::Table, Comment::ParentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Prefix matches on path drive subtree queries.
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_path")
                    .table(Comment::Table)
                    .col(Comment::Path)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_post_id")
                    .table(Comment::Table)
                    .col(Comment::PostId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    PostId,
    ParentId,
    AuthorName,
    AuthorEmail,
    AuthorWebsite,
    Content,
    Approved,
    IsTrash,
    AdminReply,
    Level,
    Path,
    CreatedAt,
    UpdatedAt,
}
