//! Infrastructure layer for collaborators the resolver consumes.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`catalog`] - Gift-card catalog implementations
//! - [`routing`] - Pattern-based route table
//! - [`console`] - Terminal dispatch ports for the CLI

pub mod catalog;
pub mod console;
pub mod routing;
