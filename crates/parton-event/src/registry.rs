// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name-keyed producer registry and the synchronous event loop.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{error, info, info_span};

use crate::producer::{EventProducer, ProduceError};
use crate::store::Event;

/// Errors raised at module registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Attempted to register a module under a label already taken.
    #[error("duplicate module label: {0}")]
    DuplicateLabel(String),
}

/// Registry of producer modules for one processing path.
///
/// Modules run in registration order, once per event, to completion.
/// Labels are unique: a module's label names both the module and its
/// output slot, so two modules sharing a label would race for the same
/// product.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn EventProducer>>,
    labels: FxHashSet<String>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            labels: FxHashSet::default(),
        }
    }

    /// Registers a producer module so the event loop will drive it.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateLabel`] if a module with the same
    /// label has already been registered.
    pub fn register(&mut self, module: Box<dyn EventProducer>) -> Result<(), RegistryError> {
        let label = module.label().to_owned();
        if !self.labels.insert(label.clone()) {
            return Err(RegistryError::DuplicateLabel(label));
        }
        self.modules.push(module);
        Ok(())
    }

    /// Returns the number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no modules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Drives every registered module over `event`, in registration order.
    ///
    /// The first failing module aborts the unit: its error propagates to
    /// the caller and later modules do not run. Units are one-shot; there
    /// is no retry path.
    pub fn run_event(&self, event: &mut Event) -> Result<(), ProduceError> {
        for module in &self.modules {
            let span = info_span!("produce", module = module.label());
            let _guard = span.enter();
            match module.produce(event) {
                Ok(()) => info!(products = event.len(), "module completed"),
                Err(err) => {
                    error!(error = %err, "module failed, abandoning unit");
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.modules.len())
            .finish()
    }
}
