//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! Adapters are thin translators between domain types and whatever actually
//! holds the data. They contain no business logic. The only adapter shipped
//! today is the in-memory one; a database-backed adapter slots in behind the
//! same port without touching consumers.

pub mod persistence;
