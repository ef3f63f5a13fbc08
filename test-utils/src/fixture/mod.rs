//! Fixtures for creating in-memory test entities without database insertion.
//!
//! Fixture functions return plain entity models with consistent default values.
//! Use them for unit testing pure logic (e.g. thread serialization) where no
//! database round-trip is needed. For persisted test data, use `factory`.

pub mod comment;
pub mod post;
