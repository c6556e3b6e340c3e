// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Producer module contract.

use thiserror::Error;

use crate::params::ConfigError;
use crate::store::{Event, EventError};

/// Failure of one producer over one processing unit.
///
/// Every variant is fatal for the unit: the event loop propagates the
/// error and abandons the unit rather than recovering or retrying.
#[derive(Debug, Error)]
pub enum ProduceError {
    /// A configured input was absent or unusable, or an output slot was
    /// already taken.
    #[error(transparent)]
    Event(#[from] EventError),
    /// Module configuration was incomplete or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The module's own transformation failed.
    #[error("module error: {0}")]
    Module(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProduceError {
    /// Wraps a module-specific failure.
    pub fn module(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Module(Box::new(err))
    }
}

/// One producer module: a named, stateless transformation over an event.
///
/// Implementations read products by tag, construct new products, and
/// register them under their own label. `produce` must be synchronous,
/// idempotent given identical inputs, and must not mutate the products it
/// reads.
pub trait EventProducer: Send + Sync {
    /// Label this module is registered under; also names its output slot.
    fn label(&self) -> &str;

    /// Processes one unit: read inputs, register outputs.
    fn produce(&self, event: &mut Event) -> Result<(), ProduceError>;
}
