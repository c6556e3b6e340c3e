// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! parton-event: the minimal host surface producer modules are written
//! against.
//!
//! One `Event` is one processing unit: a typed store of named products,
//! populated by the host and by producers, consumed by downstream stages.
//! Producers declare their inputs through `ParameterSet` configuration and
//! are driven synchronously, in registration order, by `ModuleRegistry`.
//! Real frameworks add lifecycle, scheduling, and provenance on top; none
//! of that lives here.

pub mod params;
pub mod producer;
pub mod registry;
pub mod store;
pub mod tag;

/// Configuration parameter sets and their error type.
pub use params::{ConfigError, ParameterSet};
/// Producer module contract and its failure type.
pub use producer::{EventProducer, ProduceError};
/// Name-keyed module registry and event loop.
pub use registry::{ModuleRegistry, RegistryError};
/// Per-event typed product store.
pub use store::{Event, EventError};
/// Configuration-level product names.
pub use tag::{EmptyTagError, InputTag};
