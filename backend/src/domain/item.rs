//! Listing item data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable listing identifier stored as a UUID.
///
/// Identifiers are store-generated; collision probability of the random
/// scheme is treated as negligible rather than enforced by locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a new random [`ItemId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, for ids produced by deterministic generation.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A marketplace listing record.
///
/// ## Invariants
/// - `id` is unique across a store.
/// - `created_at` is assigned once when the record enters a store and never
///   mutated afterwards.
///
/// Records are immutable once stored; there is no partial-field update
/// operation anywhere in the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned unique identifier.
    pub id: ItemId,
    /// Persian display title.
    pub title_fa: String,
    /// English display title.
    pub title_en: String,
    /// Asking price in the listing currency.
    pub price: u64,
    /// Currency code.
    pub currency: String,
    /// Free-text category label.
    pub category: String,
    /// Free-text province name.
    pub province: String,
    /// Image URL.
    pub image: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Store-assigned creation timestamp (serialises as ISO-8601).
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Completes a draft with the store-assigned identifier and timestamp.
    #[must_use]
    pub fn from_draft(draft: ItemDraft, id: ItemId, created_at: DateTime<Utc>) -> Self {
        let ItemDraft {
            title_fa,
            title_en,
            price,
            currency,
            category,
            province,
            image,
            description,
        } = draft;

        Self {
            id,
            title_fa,
            title_en,
            price,
            currency,
            category,
            province,
            image,
            description,
            created_at,
        }
    }
}

/// A listing record as supplied to the create operation.
///
/// Drafts lack the store-assigned fields (`id`, `created_at`); everything
/// else is echoed verbatim into the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    /// Persian display title.
    pub title_fa: String,
    /// English display title.
    pub title_en: String,
    /// Asking price in the listing currency.
    pub price: u64,
    /// Currency code.
    pub currency: String,
    /// Free-text category label.
    pub category: String,
    /// Free-text province name.
    pub province: String,
    /// Image URL.
    pub image: String,
    /// Optional free-text description.
    pub description: Option<String>,
}
