//! Command handlers orchestrating ports for multi-step operations.
//! Single-entity CRUD goes straight from the HTTP layer to a repository.

pub mod attendance;
pub mod billing;
pub mod photo;
