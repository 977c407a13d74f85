use kiwi_types::Depot;
use tracing::{debug, error, info};

use crate::content::BinaryContent;
use crate::error::{RepositoryError, RepositoryResult};
use crate::keys::KeyProvider;
use crate::traits::ContentStore;

/// Persistence for [`Depot`] aggregates.
pub trait DepotRepository: Send + Sync {
    /// Load the depot with the given id.
    ///
    /// Returns `Ok(None)` if no depot is stored under the derived key.
    fn load(&self, id: &str) -> RepositoryResult<Option<Depot>>;

    /// Store a depot, replacing whatever was stored under its key.
    fn store(&self, depot: &Depot) -> RepositoryResult<()>;
}

/// Depot repository over a [`ContentStore`].
///
/// Each depot is one object holding exactly its encoded bytes, stored as
/// `binary/octet-stream` under the key the [`KeyProvider`] derives from its id.
pub struct BucketDepotRepository<S, K> {
    store: S,
    keys: K,
}

impl<S: ContentStore, K: KeyProvider> BucketDepotRepository<S, K> {
    pub fn new(store: S, keys: K) -> Self {
        Self { store, keys }
    }

    pub fn content_store(&self) -> &S {
        &self.store
    }
}

impl<S: ContentStore, K: KeyProvider> DepotRepository for BucketDepotRepository<S, K> {
    fn load(&self, id: &str) -> RepositoryResult<Option<Depot>> {
        let key = self.keys.create_key_for(id);
        if !self.store.exists(&key)? {
            debug!(id, key = %key, "depot not found");
            return Ok(None);
        }

        let bytes = self.store.retrieve_content_for(&key)?;
        match Depot::decode(&bytes) {
            Ok(depot) => {
                debug!(id, key = %key, averages = depot.averages.len(), "depot loaded");
                Ok(Some(depot))
            }
            Err(e) => {
                error!(id, key = %key, error = %e, "stored depot is corrupt");
                Err(RepositoryError::CorruptDepot { bytes })
            }
        }
    }

    fn store(&self, depot: &Depot) -> RepositoryResult<()> {
        let key = self.keys.create_key_for(&depot.id);
        let bytes = depot.encode()?;
        let content = BinaryContent::octet_stream(key, bytes)?;
        self.store.store_content(&content)?;
        info!(id = %depot.id, key = content.key(), len = content.len(), "depot stored");
        Ok(())
    }
}
