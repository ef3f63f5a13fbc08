//! Comment like factory for creating test like entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a like for the given comment by the given user name.
pub async fn create_like(
    db: &DatabaseConnection,
    comment_id: i32,
    user_name: impl Into<String>,
) -> Result<entity::comment_like::Model, DbErr> {
    entity::comment_like::ActiveModel {
        comment_id: ActiveValue::Set(comment_id),
        user_name: ActiveValue::Set(user_name.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
