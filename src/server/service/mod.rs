//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits
//! between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Business Logic**: Core rules and validation (cross-post parent checks,
//!   like uniqueness, moderation transitions)
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entities

pub mod auth;
pub mod comment;
pub mod like;
pub mod moderation;
pub mod post;
pub mod thread;
