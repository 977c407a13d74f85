use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::average::FloatingAverage;
use crate::error::{TypeError, TypeResult};

/// Upper bound on an encoded depot, enforced on both encode and decode.
pub const MAX_DEPOT_SIZE: u64 = 16 * 1024 * 1024;

/// The aggregate persisted by the repository.
///
/// A depot is stored as exactly its encoded bytes: no envelope, no version
/// header. The encoding is fixed-width bincode, which is canonical for the
/// field types used here, so `encode(decode(bytes)) == bytes` for every
/// payload that decodes at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depot {
    /// Identifier; the storage key is derived from it.
    pub id: String,
    /// Observed floating averages, in insertion order.
    pub averages: Vec<FloatingAverage>,
}

impl Depot {
    /// Create an empty depot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            averages: Vec::new(),
        }
    }

    pub fn with_average(mut self, average: FloatingAverage) -> Self {
        self.averages.push(average);
        self
    }

    /// Look up the snapshot for an asset by name.
    pub fn average_for(&self, asset_name: &str) -> Option<&FloatingAverage> {
        self.averages.iter().find(|a| a.asset_name == asset_name)
    }

    /// Serialize to the stored byte form.
    pub fn encode(&self) -> TypeResult<Vec<u8>> {
        codec().serialize(self).map_err(|e| TypeError::Encode {
            id: self.id.clone(),
            reason: e.to_string(),
        })
    }

    /// Deserialize from the stored byte form.
    ///
    /// Trailing bytes are rejected so that a successful decode always
    /// re-encodes to the same bytes.
    pub fn decode(bytes: &[u8]) -> TypeResult<Self> {
        codec()
            .deserialize(bytes)
            .map_err(|e| TypeError::Decode(e.to_string()))
    }
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_DEPOT_SIZE)
        .reject_trailing_bytes()
}
