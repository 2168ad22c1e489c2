//! In-memory listing repository adapter.
//!
//! Keeps the whole data set in one process-local map guarded by a single
//! `RwLock`. Lookups clone records out of the map; insertion order is
//! preserved so list operations satisfy the port's ordering contract.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mockable::Clock;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId, ListingFilter};

/// Errors raised while constructing a pre-seeded store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreInitError {
    /// Two seed records carried the same identifier.
    #[error("duplicate item id in seed data: {id}")]
    DuplicateId {
        /// The colliding identifier.
        id: ItemId,
    },
}

/// Insertion-ordered item collection with an id index for point lookups.
#[derive(Debug, Default)]
struct ItemTable {
    items: Vec<Item>,
    index: HashMap<Uuid, usize>,
}

impl ItemTable {
    /// Appends an item unless its id is already present.
    fn try_insert(&mut self, item: Item) -> bool {
        let key = *item.id.as_uuid();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.items.len());
        self.items.push(item);
        true
    }

    fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index
            .get(id.as_uuid())
            .and_then(|position| self.items.get(*position))
    }

    fn filtered<F>(&self, accept: F) -> Vec<Item>
    where
        F: Fn(&Item) -> bool,
    {
        self.items.iter().filter(|item| accept(item)).cloned().collect()
    }
}

/// In-memory implementation of the [`ItemRepository`] port.
///
/// One instance is constructed at startup (typically pre-seeded) and shared
/// for the process lifetime; the data set is discarded with the process. A
/// single lock is the only concurrency discipline the contract requires.
pub struct MemoryItemRepository {
    table: RwLock<ItemTable>,
    clock: Arc<dyn Clock>,
}

impl MemoryItemRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(ItemTable::default()),
            clock,
        }
    }

    /// Creates a store pre-populated with the given items, in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreInitError::DuplicateId`] if two items share an id.
    pub fn with_items(
        items: impl IntoIterator<Item = Item>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreInitError> {
        let mut table = ItemTable::default();
        for item in items {
            let id = item.id;
            if !table.try_insert(item) {
                return Err(StoreInitError::DuplicateId { id });
            }
        }

        Ok(Self {
            table: RwLock::new(table),
            clock,
        })
    }

    fn read_table(&self) -> Result<RwLockReadGuard<'_, ItemTable>, ItemRepositoryError> {
        self.table
            .read()
            .map_err(|_| ItemRepositoryError::query("item table lock poisoned"))
    }

    fn write_table(&self) -> Result<RwLockWriteGuard<'_, ItemTable>, ItemRepositoryError> {
        self.table
            .write()
            .map_err(|_| ItemRepositoryError::query("item table lock poisoned"))
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let table = self.read_table()?;
        Ok(table.items.clone())
    }

    async fn list_by_province(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let table = self.read_table()?;
        Ok(table.filtered(|item| filter.matches(&item.province)))
    }

    async fn list_by_category(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let table = self.read_table()?;
        Ok(table.filtered(|item| filter.matches(&item.category)))
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        let table = self.read_table()?;
        Ok(table.get(id).cloned())
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError> {
        let item = Item::from_draft(draft, ItemId::random(), self.clock.utc());

        let mut table = self.write_table()?;
        // Random v4 collisions are treated as negligible; surface the freak
        // case as a query failure rather than silently replacing a record.
        if !table.try_insert(item.clone()) {
            return Err(ItemRepositoryError::query(format!(
                "generated item id collided: {}",
                item.id
            )));
        }

        Ok(item)
    }
}
