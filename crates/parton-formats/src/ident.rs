// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier types for collections and jet handles.
use core::fmt;

use blake3::Hasher;

/// Canonical 256-bit hash used for addressing upstream collections.
pub type Hash = [u8; 32];

/// Strongly typed identifier for an upstream source collection.
///
/// `CollectionId` is an opaque 32-byte identifier derived from the
/// collection's configured label via [`make_collection_id`]
/// (`blake3("collection:" || label)`). Two configuration tags name the same
/// underlying collection exactly when their ids are equal; references built
/// against one collection never match association entries keyed under
/// another.
///
/// Tooling must not assume ids are reversible back into labels.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionId(pub Hash);

impl CollectionId {
    /// Returns the canonical byte representation of this id.
    #[must_use]
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }
}

/// Produces a stable, domain‑separated collection identifier (prefix
/// `b"collection:"`) using BLAKE3.
pub fn make_collection_id(label: &str) -> CollectionId {
    let mut hasher = Hasher::new();
    hasher.update(b"collection:");
    hasher.update(label.as_bytes());
    CollectionId(hasher.finalize().into())
}

/// Lightweight key-only handle to a jet inside a source collection.
///
/// A `JetRef` carries no physics data; it exists purely to key association
/// collections built over the same source. Ordering is lexicographic on
/// `(collection, index)`, so iterating a reference-keyed map yields entries
/// in index order within each collection.
///
/// Invariants
/// - `collection` must identify the collection the referenced jet actually
///   lives in; a reference into a different collection is not detectable
///   here and surfaces only as a failed association lookup.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JetRef {
    /// Source collection that owns the referenced jet.
    pub collection: CollectionId,
    /// Zero-based position of the jet within the source collection.
    pub index: usize,
}

impl JetRef {
    /// Constructs a reference to the jet at `index` in `collection`.
    #[must_use]
    pub const fn new(collection: CollectionId, index: usize) -> Self {
        Self { collection, index }
    }
}

impl fmt::Display for JetRef {
    /// Renders as `<short-collection-hex>[index]` for logs and errors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut short = [0u8; 8];
        short.copy_from_slice(&self.collection.0[0..8]);
        write!(f, "{}[{}]", hex::encode(short), self.index)
    }
}
