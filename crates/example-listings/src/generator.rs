//! Deterministic listing generation from seed plans.
//!
//! This module provides the core generation function that produces
//! reproducible marketplace listings from a catalog. The same seed plan
//! always produces identical output.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::catalog::{CURRENCY_CODE, Catalog};
use crate::error::GenerationError;
use crate::listing::ListingSeed;

/// Default number of listings generated for the demo data set.
pub const DEFAULT_LISTING_COUNT: usize = 426;

/// Image URL template applied per generation index.
const IMAGE_URL_PREFIX: &str = "https://picsum.photos/400/300?random=";

/// A plan for one deterministic generation run.
///
/// The `seed` value initialises the RNG; `listing_count` determines how many
/// listings to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    seed: u64,
    listing_count: usize,
}

impl SeedPlan {
    /// Builds a plan with an explicit RNG seed.
    #[must_use]
    pub const fn new(seed: u64, listing_count: usize) -> Self {
        Self {
            seed,
            listing_count,
        }
    }

    /// Builds a plan whose seed is drawn from the operating system RNG.
    ///
    /// This is the production default; supply an explicit seed via
    /// [`SeedPlan::new`] when reproducible output is required.
    #[must_use]
    pub fn from_entropy(listing_count: usize) -> Self {
        Self::new(rand::rng().random(), listing_count)
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of listings to generate.
    #[must_use]
    pub const fn listing_count(&self) -> usize {
        self.listing_count
    }
}

/// Generates marketplace listings from a catalog and seed plan.
///
/// Uses the plan's seed to initialise a deterministic RNG, ensuring identical
/// output for the same catalog and plan. Each generated listing has:
///
/// - A unique UUID (deterministically derived from the RNG)
/// - An archetype and a province picked uniformly at random
/// - A price picked uniformly within the archetype's `[min, max)` range
/// - The 1-based generation index appended to both titles once the index
///   exceeds the number of distinct archetypes
/// - A templated placeholder image URL and no description
///
/// # Errors
///
/// Returns [`GenerationError`] if the catalog offers no provinces or no
/// archetypes; a catalog built through [`Catalog::new`] cannot trigger this.
///
/// # Example
///
/// ```
/// use example_listings::{Catalog, SeedPlan, generate_listings};
///
/// let catalog = Catalog::afghan_marketplace();
/// let listings = generate_listings(&catalog, &SeedPlan::new(42, 3)).expect("generated");
///
/// assert_eq!(listings.len(), 3);
/// assert!(listings.iter().all(|listing| listing.currency == "AFN"));
/// ```
pub fn generate_listings(
    catalog: &Catalog,
    plan: &SeedPlan,
) -> Result<Vec<ListingSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed());
    let mut listings = Vec::with_capacity(plan.listing_count());

    for index in 1..=plan.listing_count() {
        listings.push(generate_single_listing(&mut rng, catalog, index)?);
    }

    Ok(listings)
}

/// Generates the listing at the given 1-based index with the provided RNG.
fn generate_single_listing(
    rng: &mut ChaCha8Rng,
    catalog: &Catalog,
    index: usize,
) -> Result<ListingSeed, GenerationError> {
    let archetype = catalog
        .archetypes()
        .choose(rng)
        .ok_or(GenerationError::NoArchetypes)?;
    // Price range is half-open: min inclusive, max exclusive.
    let price = rng.random_range(archetype.price_min..archetype.price_max);
    let province = catalog
        .provinces()
        .choose(rng)
        .ok_or(GenerationError::NoProvinces)?;

    // Once every archetype has appeared at least once by count, suffix the
    // titles with the generation index to aid disambiguation.
    let (title_fa, title_en) = if index > catalog.archetypes().len() {
        (
            format!("{} {index}", archetype.title_fa),
            format!("{} {index}", archetype.title_en),
        )
    } else {
        (archetype.title_fa.clone(), archetype.title_en.clone())
    };

    Ok(ListingSeed {
        id: Uuid::from_u128(rng.random()),
        title_fa,
        title_en,
        price,
        currency: CURRENCY_CODE.to_owned(),
        category: archetype.category.clone(),
        province: province.clone(),
        image: format!("{IMAGE_URL_PREFIX}{index}"),
        description: None,
    })
}
