// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Jet record type.

use crate::flavour::JetFlavourInfo;

/// Materialised record for a single reconstructed jet.
///
/// Kinematics use the detector convention (`pt` in GeV, `eta`/`phi`
/// dimensionless, `mass` in GeV). The record is a plain value: collections
/// own their jets, and producers that rewrite a collection copy records
/// forward rather than referencing the input.
///
/// Invariants
/// - `flavour` is `None` until a flavour-matching producer has run over the
///   collection; downstream consumers must treat an unset field as
///   "not yet matched", not as "matched to nothing".
/// - The jet's position within its collection is not embedded here; the
///   owning collection supplies it externally (see `JetRef`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JetRecord {
    /// Transverse momentum in GeV.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle in radians.
    pub phi: f64,
    /// Invariant mass in GeV.
    pub mass: f64,
    /// Catchment area from the clustering step.
    pub jet_area: f64,
    /// Number of clustered constituents.
    pub n_constituents: u32,
    /// Flavour composition attached by a matching producer, if any.
    pub flavour: Option<JetFlavourInfo>,
}

impl JetRecord {
    /// Returns a copy of this jet with `flavour` set to `info`.
    ///
    /// All non-flavour fields are preserved bit-identically.
    #[must_use]
    pub fn with_flavour(&self, info: JetFlavourInfo) -> Self {
        Self {
            flavour: Some(info),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_flavour_preserves_kinematics() {
        let jet = JetRecord {
            pt: 125.5,
            eta: -1.2,
            phi: 0.8,
            mass: 12.0,
            jet_area: 0.5,
            n_constituents: 34,
            flavour: None,
        };
        let info = JetFlavourInfo {
            hadron_flavour: 5,
            parton_flavour: 5,
            n_b_hadrons: 1,
            n_c_hadrons: 0,
        };
        let updated = jet.with_flavour(info);
        assert_eq!(updated.pt.to_bits(), jet.pt.to_bits());
        assert_eq!(updated.eta.to_bits(), jet.eta.to_bits());
        assert_eq!(updated.phi.to_bits(), jet.phi.to_bits());
        assert_eq!(updated.mass.to_bits(), jet.mass.to_bits());
        assert_eq!(updated.jet_area.to_bits(), jet.jet_area.to_bits());
        assert_eq!(updated.n_constituents, jet.n_constituents);
        assert_eq!(updated.flavour, Some(info));
        assert_eq!(jet.flavour, None);
    }
}
