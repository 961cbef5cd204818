//! Flat-file persistence for the four entity collections.
//!
//! Each collection is one JSON array file in the data directory:
//!
//! - `users.json`
//! - `products.json`
//! - `orders.json`
//! - `inquiries.json`
//!
//! There are no partial updates: every mutation is a whole-collection
//! read-modify-write. The store takes no locks, so two overlapping
//! read-modify-write cycles on the same collection can lose the earlier
//! write (last writer wins). That is an accepted scale limitation of this
//! persistence approach, not something the store guards against.

pub mod seed;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors surfaced by store writes.
///
/// Reads never error: a missing, unreadable, or corrupt file degrades to
/// an empty collection (see [`FileStore::read_all`]).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Records could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The four persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Products,
    Orders,
    Inquiries,
}

impl Collection {
    /// File name of the backing JSON array.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users.json",
            Self::Products => "products.json",
            Self::Orders => "orders.json",
            Self::Inquiries => "inquiries.json",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Flat-file store over a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`. Call [`FileStore::init`] before
    /// serving requests.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Create the data directory and seed the initial files.
    ///
    /// On first run the products collection is seeded with the fixed
    /// six-product catalog and the other collections with empty arrays.
    /// Existing files are never touched, so `init` is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or a file cannot be created.
    pub async fn init(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        if !tokio::fs::try_exists(self.path(Collection::Products)).await? {
            self.write_all(Collection::Products, &seed::initial_products())
                .await?;
            tracing::info!("seeded initial product catalog");
        }

        for collection in [Collection::Users, Collection::Orders, Collection::Inquiries] {
            if !tokio::fs::try_exists(self.path(collection)).await? {
                self.write_all::<serde_json::Value>(collection, &[]).await?;
            }
        }

        Ok(())
    }

    /// Read every record of a collection.
    ///
    /// An absent, unreadable, or syntactically invalid file yields an empty
    /// vector rather than an error. Parse failures are logged at `warn`:
    /// the degradation masks whatever the file held, so it should at least
    /// be visible to an operator.
    pub async fn read_all<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let path = self.path(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(%collection, error = %err, "collection read failed; treating as empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%collection, error = %err, "collection parse failed; treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize `records` and overwrite the collection file.
    ///
    /// Files are pretty-printed, matching the hand-inspectable format the
    /// collections have always used. There is no atomic rename and no
    /// partial-write protection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub async fn write_all<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(self.path(collection), bytes).await?;
        Ok(())
    }
}
