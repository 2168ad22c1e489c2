//! Generated listing seed types.
//!
//! This module defines the output type from listing generation. The type is
//! independent of backend domain types to avoid circular dependencies; the
//! backend stamps store-assigned fields (such as the creation timestamp) when
//! converting a seed into a stored item.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated marketplace listing record.
///
/// Contains every field of a listing except the creation timestamp, which is
/// assigned at the point the listing enters a store.
///
/// # Example
///
/// ```
/// use example_listings::ListingSeed;
/// use uuid::Uuid;
///
/// let listing = ListingSeed {
///     id: Uuid::new_v4(),
///     title_fa: "دوچرخه".to_owned(),
///     title_en: "Bicycle".to_owned(),
///     price: 7_500,
///     currency: "AFN".to_owned(),
///     category: "ورزش و تفریح".to_owned(),
///     province: "کابل".to_owned(),
///     image: "https://picsum.photos/400/300?random=1".to_owned(),
///     description: None,
/// };
///
/// assert_eq!(listing.title_en, "Bicycle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSeed {
    /// Unique identifier for the listing.
    pub id: Uuid,
    /// Persian display title.
    pub title_fa: String,
    /// English display title.
    pub title_en: String,
    /// Asking price in the listing currency.
    pub price: u64,
    /// Currency code.
    pub currency: String,
    /// Category label.
    pub category: String,
    /// Province name.
    pub province: String,
    /// Image URL.
    pub image: String,
    /// Optional free-text description.
    pub description: Option<String>,
}
