// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Index-aligned join of jets with their flavour associations.

use parton_formats::{FlavourMatchCollection, JetRecord, JetRef};
use thiserror::Error;

/// Error returned by [`merge_flavour`] when a reference has no association
/// entry.
///
/// In practice this means the reference sequence and the association
/// collection were built over different sources (a configuration mismatch)
/// or the upstream matcher genuinely skipped the jet; the two cases are
/// indistinguishable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no flavour entry for reference {reference}")]
pub struct UnmatchedRefError {
    /// Reference that failed to resolve.
    pub reference: JetRef,
}

/// Copies each jet forward with the flavour payload its aligned reference
/// maps to.
///
/// `jets` and `refs` must be index-aligned views of the same source:
/// `refs[i]` keys the association entry for `jets[i]`. The alignment is
/// the caller's responsibility and is not checked in release builds;
/// mismatched lengths silently mispair (see `DESIGN.md`).
///
/// The inputs are untouched: the output is a freshly allocated collection
/// of copies, in input order, with only the flavour field rewritten.
///
/// # Errors
/// Returns [`UnmatchedRefError`] for the first reference absent from
/// `flavour_map`; no partial output is produced.
pub fn merge_flavour(
    jets: &[JetRecord],
    refs: &[JetRef],
    flavour_map: &FlavourMatchCollection,
) -> Result<Vec<JetRecord>, UnmatchedRefError> {
    debug_assert_eq!(
        jets.len(),
        refs.len(),
        "jet and reference sequences must be index-aligned"
    );
    let mut updated = Vec::with_capacity(jets.len());
    for (jet, reference) in jets.iter().zip(refs) {
        let info = flavour_map
            .get(reference)
            .ok_or(UnmatchedRefError { reference: *reference })?;
        updated.push(jet.with_flavour(*info));
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parton_formats::{make_collection_id, JetFlavourInfo};

    fn jet(pt: f64) -> JetRecord {
        JetRecord {
            pt,
            ..JetRecord::default()
        }
    }

    fn info(hadron: i32) -> JetFlavourInfo {
        JetFlavourInfo {
            hadron_flavour: hadron,
            ..JetFlavourInfo::default()
        }
    }

    #[test]
    fn two_jets_pick_up_their_aligned_payloads() {
        let col = make_collection_id("slimmedJets");
        let jets = vec![jet(100.0), jet(50.0)];
        let refs = vec![JetRef::new(col, 0), JetRef::new(col, 1)];
        let matches: FlavourMatchCollection = [
            (refs[0], info(5)),
            (refs[1], info(4)),
        ]
        .into_iter()
        .collect();

        let merged = merge_flavour(&jets, &refs, &matches);
        assert_eq!(
            merged,
            Ok(vec![
                jets[0].with_flavour(info(5)),
                jets[1].with_flavour(info(4)),
            ])
        );
        // Inputs are untouched.
        assert_eq!(jets[0].flavour, None);
        assert_eq!(jets[1].flavour, None);
    }

    #[test]
    fn a_reference_missing_from_the_map_fails_the_whole_call() {
        let col = make_collection_id("slimmedJets");
        let jets = vec![jet(100.0), jet(50.0)];
        let refs = vec![JetRef::new(col, 0), JetRef::new(col, 1)];
        let matches: FlavourMatchCollection =
            [(refs[0], info(5))].into_iter().collect();

        let merged = merge_flavour(&jets, &refs, &matches);
        assert_eq!(merged, Err(UnmatchedRefError { reference: refs[1] }));
    }

    #[test]
    fn empty_inputs_produce_an_empty_collection() {
        let matches = FlavourMatchCollection::new();
        assert_eq!(merge_flavour(&[], &[], &matches), Ok(Vec::new()));
    }

    #[test]
    fn rerunning_with_the_same_inputs_is_idempotent() {
        let col = make_collection_id("slimmedJets");
        let jets = vec![jet(100.0)];
        let refs = vec![JetRef::new(col, 0)];
        let matches: FlavourMatchCollection =
            [(refs[0], info(5))].into_iter().collect();

        let first = merge_flavour(&jets, &refs, &matches);
        let second = merge_flavour(&jets, &refs, &matches);
        assert_eq!(first, second);
    }
}
