//! Conversion of generated listing seeds into stored domain items.
//!
//! The generator crate produces listings without store-assigned timestamps;
//! this module stamps them sequentially from an injected clock so that
//! `created_at` is non-decreasing in insertion order.

use example_listings::ListingSeed;
use mockable::Clock;

use crate::domain::{Item, ItemId};

/// Converts generated seeds into domain items, stamping creation timestamps.
///
/// Timestamps are drawn from the clock one seed at a time, so the resulting
/// items carry non-decreasing `created_at` values in seed order.
#[must_use]
pub fn items_from_seeds(seeds: Vec<ListingSeed>, clock: &dyn Clock) -> Vec<Item> {
    seeds
        .into_iter()
        .map(|seed| item_from_seed(seed, clock))
        .collect()
}

fn item_from_seed(seed: ListingSeed, clock: &dyn Clock) -> Item {
    let ListingSeed {
        id,
        title_fa,
        title_en,
        price,
        currency,
        category,
        province,
        image,
        description,
    } = seed;

    Item {
        id: ItemId::from_uuid(id),
        title_fa,
        title_en,
        price,
        currency,
        category,
        province,
        image,
        description,
        created_at: clock.utc(),
    }
}
