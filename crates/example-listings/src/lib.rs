//! Deterministic synthetic marketplace listing generation for demonstration
//! purposes.
//!
//! This crate generates believable, reproducible marketplace listings from a
//! fixed catalog of provinces and listing archetypes. It is designed to be
//! independent of backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A validated catalog of provinces and listing archetypes
//! - A built-in Afghan marketplace catalog matching the demo data set
//! - Deterministic listing generation from a seed plan
//! - Dumping a generated listing set to a JSON file
//!
//! # Example
//!
//! ```
//! use example_listings::{Catalog, SeedPlan, generate_listings};
//!
//! let catalog = Catalog::afghan_marketplace();
//! let plan = SeedPlan::new(42, 5);
//! let listings = generate_listings(&catalog, &plan).expect("generation succeeds");
//!
//! assert_eq!(listings.len(), 5);
//! // Same plan produces identical listings
//! let again = generate_listings(&catalog, &plan).expect("generation succeeds");
//! assert_eq!(listings, again);
//! ```

mod atomic_io;
mod catalog;
pub mod dump_cli;
mod error;
mod generator;
mod listing;

pub use catalog::{CURRENCY_CODE, Catalog, ListingArchetype};
pub use error::{CatalogError, DumpError, GenerationError};
pub use generator::{DEFAULT_LISTING_COUNT, SeedPlan, generate_listings};
pub use listing::ListingSeed;
