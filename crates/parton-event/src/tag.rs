// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Configuration-level names for event products.

use core::fmt;
use std::str::FromStr;

use parton_formats::{make_collection_id, CollectionId};
use thiserror::Error;

/// Error returned when parsing an empty input tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input tag must not be empty")]
pub struct EmptyTagError;

/// Name of an upstream product as it appears in module configuration.
///
/// Two tags name the same underlying collection exactly when their labels
/// are equal; [`InputTag::collection_id`] is the bridge from the
/// configuration plane to the reference plane (`parton_formats::JetRef`
/// keys are derived from it).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InputTag(String);

impl InputTag {
    /// Constructs a tag from a product label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the product label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Derives the stable collection identifier for the named product.
    #[must_use]
    pub fn collection_id(&self) -> CollectionId {
        make_collection_id(&self.0)
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InputTag {
    type Err = EmptyTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EmptyTagError);
        }
        Ok(Self(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_labels_derive_equal_collection_ids() {
        let a = InputTag::new("slimmedJets");
        assert_eq!("slimmedJets".parse(), Ok(a.clone()));
        let c = InputTag::new("puppiJets");
        assert_eq!(a.collection_id(), InputTag::new("slimmedJets").collection_id());
        assert_ne!(a.collection_id(), c.collection_id());
    }

    #[test]
    fn empty_labels_are_rejected_by_parse() {
        assert_eq!("".parse::<InputTag>(), Err(EmptyTagError));
    }
}
