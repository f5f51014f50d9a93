use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, NewItem};

/// Repository trait for item persistence.
///
/// Implementations must assign unique, monotonically non-decreasing ids
/// matching insertion order; the two backends are not required to agree
/// bit-for-bit on id assignment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Assign the next id, persist the record, and return the full item.
    async fn append(&self, input: NewItem) -> ItemResult<Item>;

    /// Return all items in insertion order. A store that has never been
    /// written is empty, not an error.
    async fn list_all(&self) -> ItemResult<Vec<Item>>;

    /// Return the item with the given id, or `None` when the id is out of
    /// range or absent.
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;
}

/// On-disk shape of the file-backed store: `{"items": [...]}` with no
/// persisted ids.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ItemDocument {
    items: Vec<ItemRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    category: String,
    img_filename: String,
}

/// File-backed item store: a single JSON document holding the whole
/// collection.
///
/// An item's id is its 1-based position in the document, recomputed from
/// the current length at write time. Append is a full
/// read-decode-append-encode-write cycle and holds the write lock for its
/// entire duration, so concurrent appends serialize instead of losing
/// updates. The document is replaced via a temp-file rename, so a failed
/// write never leaves it half-written.
#[derive(Debug)]
pub struct JsonFileItemRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileItemRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Read and decode the document. `Ok(None)` means the file does not
    /// exist yet; an empty file counts as an empty collection. Present but
    /// undecodable data is `CorruptStore`, never silently empty.
    async fn read_document(&self) -> ItemResult<Option<ItemDocument>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ItemError::StorageUnavailable(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if bytes.is_empty() {
            return Ok(Some(ItemDocument::default()));
        }

        let doc = serde_json::from_slice(&bytes).map_err(|e| {
            ItemError::CorruptStore(format!(
                "failed to decode {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(doc))
    }

    /// Encode and atomically replace the document (write temp, then
    /// rename). Must only be called while the write lock is held, which
    /// also keeps the temp path uncontended.
    async fn write_document(&self, doc: &ItemDocument) -> ItemResult<()> {
        let bytes = serde_json::to_vec(doc)
            .map_err(|e| ItemError::StorageUnavailable(format!("failed to encode items: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await.map_err(|e| {
            ItemError::StorageUnavailable(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            ItemError::StorageUnavailable(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    fn materialize(doc: ItemDocument) -> Vec<Item> {
        doc.items
            .into_iter()
            .enumerate()
            .map(|(position, record)| Item {
                id: position as i64 + 1,
                name: record.name,
                category: record.category,
                image_filename: record.img_filename,
            })
            .collect()
    }
}

#[async_trait]
impl ItemRepository for JsonFileItemRepository {
    async fn append(&self, input: NewItem) -> ItemResult<Item> {
        // Exclusive for the whole read-decode-append-encode-write cycle.
        let _guard = self.lock.write().await;

        let mut doc = self.read_document().await?.unwrap_or_default();
        doc.items.push(ItemRecord {
            name: input.name.clone(),
            category: input.category.clone(),
            img_filename: input.image_filename.clone(),
        });
        self.write_document(&doc).await?;

        let id = doc.items.len() as i64;
        tracing::info!(item_id = id, "Appended item to file store");

        Ok(Item {
            id,
            name: input.name,
            category: input.category,
            image_filename: input.image_filename,
        })
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        {
            let _guard = self.lock.read().await;
            if let Some(doc) = self.read_document().await? {
                return Ok(Self::materialize(doc));
            }
        }

        // First read with no backing file: initialize an empty persisted
        // collection. Re-check under the write lock in case an append or
        // another reader got there first.
        let _guard = self.lock.write().await;
        let doc = match self.read_document().await? {
            Some(doc) => doc,
            None => {
                let doc = ItemDocument::default();
                self.write_document(&doc).await?;
                doc
            }
        };

        Ok(Self::materialize(doc))
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        if id < 1 {
            return Ok(None);
        }

        let items = self.list_all().await?;
        Ok(items.into_iter().nth(id as usize - 1))
    }
}
