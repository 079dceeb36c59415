//! # Chirp Core
//!
//! The domain layer of the chirp backend.
//! This crate contains pure business types with zero infrastructure
//! dependencies: entities, insert drafts, filter structs, errors, and the
//! ports infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
