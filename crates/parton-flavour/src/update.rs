// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Producer that rewrites a jet collection with flavour payloads attached.

use parton_event::{ConfigError, Event, EventProducer, InputTag, ParameterSet, ProduceError};
use parton_formats::{FlavourMatchCollection, JetRecord, JetRef};
use tracing::debug;

use crate::merge::merge_flavour;

/// Producer that attaches matched flavour payloads to a jet collection.
///
/// Inputs per event:
/// - the jet collection named by `jetSrc` (copied forward), and
/// - the association collection named by `jetFlavourInfos`, whose keys are
///   references into the *same* source that `jetSrc` names.
///
/// The reference sequence is derived here, as explicit indices over the
/// single `jetSrc` read; there is no second view of the source. The output
/// collection is registered under the module's own label.
///
/// A `jetSrc` naming a different collection than the one the association
/// was keyed under cannot be detected directly; it surfaces as an
/// unmatched-reference failure on the first jet.
#[derive(Debug, Clone)]
pub struct UpdateJetFlavour {
    label: String,
    jet_src: InputTag,
    jet_flavour_infos: InputTag,
}

impl UpdateJetFlavour {
    /// Constructs the producer from explicit input tags.
    pub fn new(label: impl Into<String>, jet_src: InputTag, jet_flavour_infos: InputTag) -> Self {
        Self {
            label: label.into(),
            jet_src,
            jet_flavour_infos,
        }
    }

    /// Constructs the producer from its parameter set.
    ///
    /// Recognized parameters, both required, no defaults:
    /// - `jetSrc` — upstream jet collection to read and copy forward;
    /// - `jetFlavourInfos` — upstream association collection to join with.
    pub fn from_config(label: impl Into<String>, config: &ParameterSet) -> Result<Self, ConfigError> {
        Ok(Self::new(
            label,
            config.input_tag("jetSrc")?,
            config.input_tag("jetFlavourInfos")?,
        ))
    }

    /// Tag of the jet collection this producer reads.
    #[must_use]
    pub fn jet_src(&self) -> &InputTag {
        &self.jet_src
    }

    /// Tag of the association collection this producer joins with.
    #[must_use]
    pub fn jet_flavour_infos(&self) -> &InputTag {
        &self.jet_flavour_infos
    }
}

impl EventProducer for UpdateJetFlavour {
    fn label(&self) -> &str {
        &self.label
    }

    fn produce(&self, event: &mut Event) -> Result<(), ProduceError> {
        let jets = event.get::<Vec<JetRecord>>(&self.jet_src)?;
        let flavours = event.get::<FlavourMatchCollection>(&self.jet_flavour_infos)?;

        // References are keyed the way the upstream matcher keys its
        // associations: the source's collection id plus the jet's index.
        let collection = self.jet_src.collection_id();
        let refs: Vec<JetRef> = (0..jets.len())
            .map(|i| JetRef::new(collection, i))
            .collect();

        debug!(jets = jets.len(), associations = flavours.len(), "merging flavour payloads");
        let updated = merge_flavour(jets, &refs, flavours).map_err(ProduceError::module)?;

        event.put(InputTag::new(self.label.clone()), updated)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_requires_both_tags() {
        let mut config = ParameterSet::new();
        config.set("jetSrc", "slimmedJets");
        let outcome = UpdateJetFlavour::from_config("updateJetFlavour", &config);
        assert!(matches!(
            outcome,
            Err(ConfigError::MissingParameter(key)) if key == "jetFlavourInfos"
        ));

        config.set("jetFlavourInfos", "jetFlavourAssociation");
        let outcome = UpdateJetFlavour::from_config("updateJetFlavour", &config);
        assert!(matches!(outcome, Ok(ref producer) if producer.label() == "updateJetFlavour"));
    }
}
