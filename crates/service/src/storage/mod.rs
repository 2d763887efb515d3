//! Storage abstractions for service layer
//!
//! Contains the reusable in-memory map store backing the catalog collections.

pub mod record_map;
