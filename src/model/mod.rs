//! Wire-format DTOs shared by the HTTP surface.
//!
//! These types define the JSON contract of the API. Controllers convert them
//! to and from the domain types in `server::model` at the request boundary.

pub mod api;
pub mod auth;
pub mod comment;
pub mod post;
