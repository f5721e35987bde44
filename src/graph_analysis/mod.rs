//! Dependency graph domain: identities, indexes, policies and the pure
//! aggregation and rendering services.
pub mod domain;
pub mod policies;
pub mod services;
