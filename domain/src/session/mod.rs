//! Chat session domain.
//!
//! - [`entities::Conversation`] - an in-memory chat session
//! - [`entities::Turn`] - a single authored turn within a session
//! - [`repository::TurnLog`] - read view of ordered turns

pub mod entities;
pub mod repository;
