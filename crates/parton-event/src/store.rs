// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-event typed product store.
//!
//! Products are type-erased behind `dyn Any` internally and recovered
//! through the typed [`Event::get`]/[`Event::put`] surface, so the store
//! itself never needs to know the format types it carries.

use std::any::{type_name, Any};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::tag::InputTag;

/// Errors raised by product store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// No product is registered under the requested tag.
    #[error("missing product: {tag}")]
    MissingProduct {
        /// Tag that failed to resolve.
        tag: InputTag,
    },
    /// A product exists under the tag but with a different type.
    #[error("product {tag} is not a {expected}")]
    WrongProductType {
        /// Tag that resolved to a differently typed product.
        tag: InputTag,
        /// Type the caller asked for.
        expected: &'static str,
    },
    /// A product was already registered under the tag.
    #[error("duplicate product: {tag}")]
    DuplicateProduct {
        /// Tag that was already taken.
        tag: InputTag,
    },
}

/// One processing unit's worth of products.
///
/// The store is single-threaded and owned by the event loop for the
/// duration of one unit; producers read existing products by shared
/// reference and register new ones by value. There is no removal: products
/// live as long as the event.
#[derive(Default)]
pub struct Event {
    products: FxHashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Event {
    /// Creates an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: FxHashMap::default(),
        }
    }

    /// Registers `value` as the product named by `tag`.
    ///
    /// # Errors
    /// Returns [`EventError::DuplicateProduct`] when the tag is already
    /// taken; the existing product is left untouched.
    pub fn put<T>(&mut self, tag: InputTag, value: T) -> Result<(), EventError>
    where
        T: Any + Send + Sync,
    {
        if self.products.contains_key(tag.label()) {
            return Err(EventError::DuplicateProduct { tag });
        }
        self.products.insert(tag.label().to_owned(), Box::new(value));
        Ok(())
    }

    /// Resolves the product named by `tag` as a `T`.
    ///
    /// # Errors
    /// Returns [`EventError::MissingProduct`] when the tag is absent and
    /// [`EventError::WrongProductType`] when it is present under a
    /// different type.
    pub fn get<T>(&self, tag: &InputTag) -> Result<&T, EventError>
    where
        T: Any + Send + Sync,
    {
        let product = self
            .products
            .get(tag.label())
            .ok_or_else(|| EventError::MissingProduct { tag: tag.clone() })?;
        product
            .downcast_ref::<T>()
            .ok_or_else(|| EventError::WrongProductType {
                tag: tag.clone(),
                expected: type_name::<T>(),
            })
    }

    /// Returns `true` if a product is registered under `tag`.
    #[must_use]
    pub fn contains(&self, tag: &InputTag) -> bool {
        self.products.contains_key(tag.label())
    }

    /// Returns the number of registered products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if no products are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl core::fmt::Debug for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Event")
            .field("products", &self.products.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_roundtrips_by_tag_and_type() {
        let mut event = Event::new();
        let tag = InputTag::new("counts");
        assert!(event.put(tag.clone(), vec![1u32, 2, 3]).is_ok());
        assert_eq!(event.get::<Vec<u32>>(&tag), Ok(&vec![1u32, 2, 3]));
        assert!(event.contains(&tag));
        assert_eq!(event.len(), 1);
    }

    #[test]
    fn missing_tag_is_reported_as_missing_product() {
        let event = Event::new();
        let err = event.get::<u32>(&InputTag::new("nope"));
        assert!(matches!(err, Err(EventError::MissingProduct { .. })));
    }

    #[test]
    fn type_mismatch_is_reported_with_the_requested_type() {
        let mut event = Event::new();
        let tag = InputTag::new("counts");
        assert!(event.put(tag.clone(), 7u32).is_ok());
        let err = event.get::<String>(&tag);
        assert!(matches!(
            err,
            Err(EventError::WrongProductType { expected, .. })
                if expected.contains("String")
        ));
    }

    #[test]
    fn duplicate_put_is_rejected_and_keeps_the_original() {
        let mut event = Event::new();
        let tag = InputTag::new("counts");
        assert!(event.put(tag.clone(), 7u32).is_ok());
        let err = event.put(tag.clone(), 8u32);
        assert!(matches!(err, Err(EventError::DuplicateProduct { .. })));
        assert_eq!(event.get::<u32>(&tag), Ok(&7));
    }
}
