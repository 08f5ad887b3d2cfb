//! Task management for the tasklist backend.
//!
//! This module implements the single task aggregate: creation with a
//! pending-status default, listing, lookup, partial update with a
//! case-insensitive unique-title rule, and deletion. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
