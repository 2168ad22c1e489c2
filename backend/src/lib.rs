//! Marketplace listing store backend.
//!
//! This crate holds the domain model and in-memory persistence for a
//! marketplace listing service. The store is a thin shim behind the
//! [`domain::ports::ItemRepository`] port: callers see an asynchronous
//! repository contract, while the shipped adapter keeps everything in one
//! process-local map so it can be swapped for a database-backed adapter
//! without touching consumers.
//!
//! The inbound transport layer (HTTP routing, authentication, pagination) is
//! deliberately out of scope here; consumers construct a seeded store via
//! [`example_listings::build_seeded_store`] and drive it through the port.

pub mod domain;
pub mod example_listings;
pub mod outbound;
