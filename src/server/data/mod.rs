//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories use SeaORM entity models
//! internally and keep every query, insert, update, and delete behind one
//! boundary so services never touch the connection directly.

pub mod comment;
pub mod comment_like;
pub mod post;

#[cfg(test)]
mod test;
