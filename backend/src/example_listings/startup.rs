//! Startup seeding orchestration.

use std::sync::Arc;

use example_listings::{Catalog, GenerationError, SeedPlan, generate_listings};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::items_from_seeds;
use crate::example_listings::config::ExampleListingsSettings;
use crate::outbound::persistence::{MemoryItemRepository, StoreInitError};

/// Errors returned while executing startup seeding.
///
/// Seeding happens before the store serves any request; failures here are
/// fatal to process startup and must propagate.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Listing generation failed.
    #[error("example listing generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Generated listings could not be stored.
    #[error("example listing store construction failed: {0}")]
    Store(#[from] StoreInitError),
}

/// Builds the in-memory listing store, seeded per the settings.
///
/// Generates the configured number of listings from the built-in catalog,
/// stamps creation timestamps from the injected clock, and populates the
/// store before it is handed to any consumer. Without a configured seed the
/// RNG seed comes from OS entropy; the chosen value is logged so a run can
/// be reproduced.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] if generation fails or the generated data
/// set carries duplicate ids.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use backend::example_listings::{ExampleListingsSettings, build_seeded_store};
/// use mockable::DefaultClock;
///
/// # fn run() -> Result<(), backend::example_listings::StartupSeedingError> {
/// let settings = ExampleListingsSettings {
///     count: Some(10),
///     seed: Some(42),
/// };
/// let store = build_seeded_store(&settings, Arc::new(DefaultClock))?;
/// # let _ = store;
/// # Ok(())
/// # }
/// # run().expect("seeding succeeds");
/// ```
pub fn build_seeded_store(
    settings: &ExampleListingsSettings,
    clock: Arc<dyn Clock>,
) -> Result<Arc<MemoryItemRepository>, StartupSeedingError> {
    let catalog = Catalog::afghan_marketplace();
    let listing_count = settings.listing_count();
    let plan = match settings.seed() {
        Some(seed) => SeedPlan::new(seed, listing_count),
        None => SeedPlan::from_entropy(listing_count),
    };

    let seeds = generate_listings(&catalog, &plan)?;
    let items = items_from_seeds(seeds, clock.as_ref());
    let store = MemoryItemRepository::with_items(items, clock)?;

    info!(
        seed = plan.seed(),
        listing_count,
        provinces = catalog.provinces().len(),
        archetypes = catalog.archetypes().len(),
        "example listings seeded into in-memory store"
    );

    Ok(Arc::new(store))
}
