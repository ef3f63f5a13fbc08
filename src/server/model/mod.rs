//! Domain models and operation parameter types.
//!
//! These types sit between the wire DTOs in `crate::model` and the SeaORM
//! entities. Controllers convert DTOs into params here; services return the
//! domain models, which convert back into DTOs for responses.

pub mod comment;
pub mod post;
