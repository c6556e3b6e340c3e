// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! parton-formats: event-data format types for jet reconstruction.
//!
//! This crate defines the value types that flow between producer modules:
//! jet records, lightweight jet references, flavour-composition payloads,
//! and the reference-keyed flavour association collection. It deliberately
//! contains no framework machinery; the host surface lives in
//! `parton-event`.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod flavour;
mod ident;
mod jet;

/// Flavour payload and the reference-keyed association collection.
pub use flavour::{FlavourMatchCollection, JetFlavourInfo};
/// Core identifier types and constructors for collections and jet handles.
pub use ident::{make_collection_id, CollectionId, Hash, JetRef};
/// Jet record type.
pub use jet::JetRecord;
