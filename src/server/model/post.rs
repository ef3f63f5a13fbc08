use crate::model::post::{PostDto, PostRefDto};

/// Reference to a post, resolved exactly once at the request boundary.
///
/// Callers may address a post by numeric id or by slug; everything past the
/// controller layer works with this tagged form instead of guessing types.
#[derive(Debug, Clone, PartialEq)]
pub enum PostRef {
    ById(i32),
    BySlug(String),
}

impl PostRef {
    /// Parses a raw path or query segment into a post reference.
    ///
    /// Purely numeric values are treated as ids, anything else as a slug.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i32>() {
            Ok(id) => Self::ById(id),
            Err(_) => Self::BySlug(raw.to_string()),
        }
    }
}

impl From<PostRefDto> for PostRef {
    fn from(dto: PostRefDto) -> Self {
        match dto {
            PostRefDto::Id(id) => Self::ById(id),
            PostRefDto::Slug(slug) => Self::BySlug(slug),
        }
    }
}

/// Converts a post entity to its DTO for API responses.
pub fn into_dto(post: entity::post::Model) -> PostDto {
    PostDto {
        id: post.id,
        title: post.title,
        slug: post.slug,
        created_at: post.created_at,
    }
}
