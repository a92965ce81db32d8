//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`text`] - small text helpers shared by scoring and display

pub mod error;
pub mod text;
