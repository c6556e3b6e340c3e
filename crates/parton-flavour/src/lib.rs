// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! parton-flavour: attaches matched flavour payloads to a jet collection.
//!
//! An upstream matching producer emits a `FlavourMatchCollection` keyed by
//! references into a jet source. This crate's producer reads that same
//! source, joins each jet with its association entry by index, and emits a
//! new collection in which every jet carries its flavour payload. The join
//! itself is exposed as a standalone function, [`merge_flavour`], for
//! callers outside the event loop.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod merge;
mod update;

/// Index-aligned flavour join and its failure type.
pub use merge::{merge_flavour, UnmatchedRefError};
/// Producer wrapping the join for the event loop.
pub use update::UpdateJetFlavour;
