//! Artifact - equippable substat source

use crate::buff::{Buff, BuffLedger};
use serde::{Deserialize, Serialize};

/// An equipped artifact contributing zero or more substat buffs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Display name
    pub name: String,
    /// Substat contributions
    #[serde(default)]
    pub substats: Vec<Buff>,
}

impl Artifact {
    /// Create a new artifact
    pub fn new(name: impl Into<String>, substats: Vec<Buff>) -> Self {
        Artifact {
            name: name.into(),
            substats,
        }
    }

    /// This artifact's buff contributions
    pub fn buffs(&self) -> &[Buff] {
        &self.substats
    }
}

/// Combine every artifact's substats into one normalized ledger.
///
/// Item order never affects the result; artifacts with no substats
/// contribute nothing.
pub fn artifact_ledger(artifacts: &[Artifact]) -> BuffLedger {
    artifacts
        .iter()
        .flat_map(|artifact| artifact.buffs().iter().copied())
        .fold(BuffLedger::new(), |ledger, buff| ledger.fold(buff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuffKind, StatName};

    #[test]
    fn test_empty_artifacts_are_noops() {
        let artifacts = vec![Artifact::new("Bare Circlet", vec![])];
        assert!(artifact_ledger(&artifacts).is_empty());
    }

    #[test]
    fn test_substats_sum_across_artifacts() {
        let artifacts = vec![
            Artifact::new("Feather", vec![Buff::flat(StatName::Attack, 311.0)]),
            Artifact::new(
                "Sands",
                vec![
                    Buff::percent(StatName::Attack, 0.466),
                    Buff::flat(StatName::Attack, 19.0),
                ],
            ),
        ];
        let ledger = artifact_ledger(&artifacts);
        assert!((ledger.lookup(BuffKind::Flat, StatName::Attack) - 330.0).abs() < 1e-9);
        assert!((ledger.lookup(BuffKind::Percent, StatName::Attack) - 0.466).abs() < 1e-9);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = Artifact::new("Goblet", vec![Buff::percent(StatName::HitPoint, 0.10)]);
        let b = Artifact::new("Plume", vec![Buff::percent(StatName::HitPoint, 0.05)]);
        let forward = artifact_ledger(&[a.clone(), b.clone()]);
        let backward = artifact_ledger(&[b, a]);
        assert_eq!(forward, backward);
    }
}
