//! Port abstraction for listing persistence adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Item, ItemDraft, ItemId, ListingFilter};

/// Persistence errors raised by item repository adapters.
///
/// Lookups never signal absence through this type: a missing id is `None`
/// and an unmatched filter is an empty vec. The variants exist so that a
/// database-backed adapter can surface infrastructure failures through the
/// same contract the in-memory adapter satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemRepositoryError {
    /// Repository connection could not be established.
    #[error("item repository connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query {
        /// Description of the query failure.
        message: String,
    },
}

impl ItemRepositoryError {
    /// Build a [`ItemRepositoryError::Connection`] from any message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`ItemRepositoryError::Query`] from any message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for reading and creating marketplace listings.
///
/// All operations complete immediately on the in-memory adapter; the async
/// contract exists for interface uniformity with a future database-backed
/// adapter. Results preserve insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Fetch every listing in insertion order.
    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Fetch listings whose province satisfies the filter.
    async fn list_by_province(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Fetch listings whose category satisfies the filter.
    async fn list_by_category(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Fetch a single listing by identifier; absence is `None`, not an error.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemRepositoryError>;

    /// Complete a draft with a fresh id and timestamp, store it, return it.
    async fn create(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError>;
}
