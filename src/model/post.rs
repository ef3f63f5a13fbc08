use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to a post by either its numeric id or its slug.
///
/// Payloads may carry `"post": 12` or `"post": "hello-world"`; the untagged
/// representation accepts both and the boundary resolves it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PostRefDto {
    Id(i32),
    Slug(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    pub slug: String,
}
