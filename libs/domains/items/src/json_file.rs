//! JSON-file implementation of ItemRepository
//!
//! The whole collection lives in one pretty-printed document. Every call is a
//! scoped transaction: take the lock, read the document, run the operation on
//! an in-memory [`ItemStore`], write the document back if the operation
//! mutated and succeeded, release.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;
use crate::store::ItemStore;

#[derive(Debug)]
pub struct JsonFileItemRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileItemRepository {
    /// Open the document at `path`, creating it (and its parent directories)
    /// with an empty store when it does not exist yet.
    ///
    /// An existing document is read once so that a corrupt file fails at
    /// startup rather than on the first request.
    ///
    /// # Example
    /// ```ignore
    /// let repo = JsonFileItemRepository::open("data/items.json").await?;
    /// let service = ItemService::new(repo);
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> ItemResult<Self> {
        let repo = Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        };

        if fs::try_exists(&repo.path).await? {
            let mut store = repo.read().await?;
            if store.reconcile_next_id() {
                tracing::warn!(next_id = store.next_id(), "nextId was behind stored ids, rewriting");
                repo.write(&store).await?;
            }
            tracing::info!(items = store.items().len(), "Loaded item document");
        } else {
            if let Some(parent) = repo.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            repo.write(&ItemStore::new()).await?;
            tracing::info!("Created empty item document");
        }

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> ItemResult<ItemStore> {
        let bytes = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes to a sibling temp file and renames it over the document so a
    /// crash mid-write never leaves a truncated file.
    async fn write(&self, store: &ItemStore) -> ItemResult<()> {
        let json = serde_json::to_vec_pretty(store)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read-only view under the lock.
    async fn query<T>(&self, f: impl FnOnce(&ItemStore) -> ItemResult<T>) -> ItemResult<T> {
        let _guard = self.lock.lock().await;
        let store = self.read().await?;
        f(&store)
    }

    /// Read, mutate, write under the lock. Nothing is written when `f` fails.
    async fn transaction<T>(
        &self,
        f: impl FnOnce(&mut ItemStore) -> ItemResult<T>,
    ) -> ItemResult<T> {
        let _guard = self.lock.lock().await;
        let mut store = self.read().await?;
        let out = f(&mut store)?;
        self.write(&store).await?;
        Ok(out)
    }
}

#[async_trait]
impl ItemRepository for JsonFileItemRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        self.transaction(|store| store.create(input)).await
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        self.query(|store| Ok(store.list_all())).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u64) -> ItemResult<Item> {
        self.query(|store| store.get_by_id(id)).await
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: u64, input: ItemInput) -> ItemResult<Item> {
        self.transaction(|store| store.update(id, input)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> ItemResult<Item> {
        self.transaction(|store| store.delete(id)).await
    }
}
