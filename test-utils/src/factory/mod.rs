//! Factory methods for creating persisted test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let post = factory::post::create_post(&db).await?;
//!     let comment = factory::comment::CommentFactory::new(&db, post.id)
//!         .approved(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod comment;
pub mod comment_like;
pub mod helpers;
pub mod post;
