// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flavour payloads and the reference-keyed association collection.

use std::collections::BTreeMap;

use crate::ident::JetRef;

/// Flavour composition of a jet as determined by an upstream matching
/// producer.
///
/// The payload is an immutable value: producers that attach it to jets copy
/// it whole and never interpret individual fields. Flavour codes follow the
/// PDG convention (5 = b, 4 = c, 0 = unmatched).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JetFlavourInfo {
    /// Flavour assigned from matched ghost hadrons.
    pub hadron_flavour: i32,
    /// Flavour assigned from the highest-momentum matched parton.
    pub parton_flavour: i32,
    /// Number of b hadrons clustered into the jet.
    pub n_b_hadrons: u32,
    /// Number of c hadrons clustered into the jet.
    pub n_c_hadrons: u32,
}

/// Association collection mapping jet references to flavour payloads.
///
/// Built entirely by the upstream matching producer; consumers treat it as
/// read-only. Keys are unique and iteration is deterministic (ascending
/// `JetRef` order, i.e. index order within each source collection).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlavourMatchCollection {
    entries: BTreeMap<JetRef, JetFlavourInfo>,
}

impl FlavourMatchCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the payload for `reference`.
    ///
    /// Returns the previous payload when one was present.
    pub fn insert(&mut self, reference: JetRef, info: JetFlavourInfo) -> Option<JetFlavourInfo> {
        self.entries.insert(reference, info)
    }

    /// Returns the payload associated with `reference`, if any.
    pub fn get(&self, reference: &JetRef) -> Option<&JetFlavourInfo> {
        self.entries.get(reference)
    }

    /// Returns the number of associations in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all associations in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&JetRef, &JetFlavourInfo)> {
        self.entries.iter()
    }
}

impl FromIterator<(JetRef, JetFlavourInfo)> for FlavourMatchCollection {
    fn from_iter<I: IntoIterator<Item = (JetRef, JetFlavourInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::make_collection_id;

    fn info(hadron: i32) -> JetFlavourInfo {
        JetFlavourInfo {
            hadron_flavour: hadron,
            ..JetFlavourInfo::default()
        }
    }

    #[test]
    fn insert_replaces_and_returns_prior_payload() {
        let col = make_collection_id("slimmedJets");
        let r = JetRef::new(col, 0);
        let mut matches = FlavourMatchCollection::new();
        assert_eq!(matches.insert(r, info(5)), None);
        assert_eq!(matches.insert(r, info(4)), Some(info(5)));
        assert_eq!(matches.get(&r), Some(&info(4)));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn iteration_is_index_ordered_within_a_collection() {
        let col = make_collection_id("slimmedJets");
        let matches: FlavourMatchCollection = [2usize, 0, 1]
            .into_iter()
            .map(|i| (JetRef::new(col, i), info(0)))
            .collect();
        let indices: Vec<usize> = matches.iter().map(|(r, _)| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
