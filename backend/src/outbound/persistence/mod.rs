//! In-memory persistence adapters.
//!
//! The repository here keeps the entire listing data set in process memory
//! behind a single lock. It is intentionally a placeholder for a real
//! database adapter: the port contract it implements is the seam where that
//! swap happens.

mod memory_item_repository;

pub use memory_item_repository::{MemoryItemRepository, StoreInitError};
