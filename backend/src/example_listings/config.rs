//! Example listing seeding configuration loaded via OrthoConfig.

use example_listings::DEFAULT_LISTING_COUNT;
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling example listing seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_LISTINGS")]
pub struct ExampleListingsSettings {
    /// Optional override for the number of listings generated.
    pub count: Option<usize>,
    /// Optional RNG seed for reproducible seeding runs.
    pub seed: Option<u64>,
}

impl ExampleListingsSettings {
    /// Return the configured listing count, falling back to the default.
    #[must_use]
    pub fn listing_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_LISTING_COUNT)
    }

    /// Return the configured RNG seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}
