//! Item collection persisted as one JSON document in the kv store.

use chrono::{NaiveDate, Utc};

use super::database::Database;
use crate::error::{CoreError, Result};
use crate::item::{ItemId, ItemStatus, MemorizationItem};
use crate::section::find_section;

/// Pick an id for a new item: the current time in milliseconds, bumped
/// past every id already in `items`.
///
/// # Errors
/// Returns [`CoreError::IdSpaceExhausted`] if an existing id is `u64::MAX`.
pub fn next_id(items: &[MemorizationItem], now_millis: u64) -> Result<ItemId> {
    match items.iter().map(|i| i.id).max() {
        Some(max) => {
            let after_max = max.0.checked_add(1).ok_or(CoreError::IdSpaceExhausted(max))?;
            Ok(ItemId(now_millis.max(after_max)))
        }
        None => Ok(ItemId(now_millis)),
    }
}

/// Sample collection used before anything has been saved.
pub fn default_items() -> Vec<MemorizationItem> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        MemorizationItem {
            id: ItemId(1),
            section_id: 1,
            section_name: "الفاتحة".to_string(),
            from_unit: 1,
            to_unit: 7,
            status: ItemStatus::Mastered,
            date_added: date(2024, 1, 1),
            last_reviewed: Some(date(2024, 2, 6)),
            review_count: 15,
        },
        MemorizationItem {
            id: ItemId(2),
            section_id: 2,
            section_name: "البقرة".to_string(),
            from_unit: 1,
            to_unit: 5,
            status: ItemStatus::Weak,
            date_added: date(2024, 1, 15),
            last_reviewed: Some(date(2024, 2, 1)),
            review_count: 8,
        },
        MemorizationItem {
            id: ItemId(3),
            section_id: 3,
            section_name: "آل عمران".to_string(),
            from_unit: 1,
            to_unit: 3,
            status: ItemStatus::New,
            date_added: date(2024, 2, 7),
            last_reviewed: None,
            review_count: 0,
        },
    ]
}

/// Loads, mutates and saves the item collection.
///
/// Every mutating call reads the whole collection, changes it and writes it
/// back, so callers never hold stale state between commands.
pub struct ItemRepository {
    db: Database,
}

impl ItemRepository {
    /// Key the collection is stored under.
    pub const STORAGE_KEY: &'static str = "quranreview_data";

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the repository on the default database.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    /// Load the collection, falling back to [`default_items`] when nothing
    /// has been stored yet.
    ///
    /// # Errors
    /// Returns an error if the stored document cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<MemorizationItem>> {
        match self.db.kv_get(Self::STORAGE_KEY)? {
            Some(json) => {
                let items: Vec<MemorizationItem> = serde_json::from_str(&json)?;
                tracing::debug!(count = items.len(), "items loaded");
                Ok(items)
            }
            None => {
                tracing::debug!("no stored items, using sample collection");
                Ok(default_items())
            }
        }
    }

    /// Replace the stored collection with `items`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, items: &[MemorizationItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.db.kv_set(Self::STORAGE_KEY, &json)?;
        tracing::debug!(count = items.len(), "items saved");
        Ok(())
    }

    /// Validate and append a new item for `section_id`.
    ///
    /// # Errors
    /// Returns a validation error for an unknown section or a bad range.
    pub fn add(
        &self,
        section_id: u32,
        from_unit: u32,
        to_unit: u32,
        today: NaiveDate,
    ) -> Result<MemorizationItem> {
        let section = find_section(section_id)?;
        let mut items = self.load()?;
        let now_millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = next_id(&items, now_millis)?;
        let item = MemorizationItem::create(id, section, from_unit, to_unit, today)?;
        items.push(item.clone());
        self.save(&items)?;
        tracing::info!(id = %item.id, section = section_id, from_unit, to_unit, "item added");
        Ok(item)
    }

    /// Fetch one item by id.
    ///
    /// # Errors
    /// Returns [`CoreError::ItemNotFound`] if no item has that id.
    pub fn get(&self, id: ItemId) -> Result<MemorizationItem> {
        self.load()?
            .into_iter()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }

    /// Record a review of item `id` on `today` and persist it.
    ///
    /// # Errors
    /// Returns [`CoreError::ItemNotFound`] if no item has that id.
    pub fn record_review(&self, id: ItemId, today: NaiveDate) -> Result<MemorizationItem> {
        let mut items = self.load()?;
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.apply_review(today);
        let updated = item.clone();
        self.save(&items)?;
        tracing::info!(
            id = %updated.id,
            review_count = updated.review_count,
            status = %updated.status,
            "review recorded"
        );
        Ok(updated)
    }

    /// Remove item `id` and return it.
    ///
    /// # Errors
    /// Returns [`CoreError::ItemNotFound`] if no item has that id.
    pub fn delete(&self, id: ItemId) -> Result<MemorizationItem> {
        let mut items = self.load()?;
        let pos = items
            .iter()
            .position(|i| i.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        let removed = items.remove(pos);
        self.save(&items)?;
        tracing::info!(id = %id, "item deleted");
        Ok(removed)
    }

    /// Drop the stored collection; the next [`load`](Self::load) returns the
    /// sample collection again.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<()> {
        self.db.kv_delete(Self::STORAGE_KEY)?;
        tracing::info!("stored items cleared");
        Ok(())
    }
}
