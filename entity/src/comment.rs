use sea_orm::entity::prelude::*;

/// A single comment row.
///
/// `level` is 0 for top-level comments and `parent.level + 1` for replies.
/// `path` materializes the ancestor id chain ("12/47/53", ending with this
/// row's own id) so subtrees can be fetched with a prefix match instead of
/// recursive joins. Because the path embeds the row's own id it is written in
/// a second step of the same transaction that inserts the row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_website: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub approved: bool,
    pub is_trash: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub admin_reply: Option<String>,
    pub level: i32,
    pub path: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(has_many = "super::comment_like::Entity")]
    Like,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
