//! Status - derived stat snapshot and per-stat combination rules

use crate::types::StatName;
use serde::{Deserialize, Serialize};

/// How a stat's base value combines with its ledger entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineRule {
    /// `base * (1 + percent) + flat`
    Scaled,
    /// `base + flat`; percent entries are not defined for these stats
    FlatOnly,
    /// `base + percent`; no separate flat lookup
    PercentOnly,
}

impl CombineRule {
    /// The combination rule for each resolvable stat
    pub fn for_stat(stat: StatName) -> CombineRule {
        match stat {
            StatName::HitPoint | StatName::Attack | StatName::Defense => CombineRule::Scaled,
            StatName::ElementalMastery => CombineRule::FlatOnly,
            StatName::CriticalRate | StatName::CriticalDamage | StatName::EnergyRecharge => {
                CombineRule::PercentOnly
            }
        }
    }

    /// Combine a base value with the ledger's percent and flat lookups
    pub fn apply(&self, base: f64, percent: f64, flat: f64) -> f64 {
        match self {
            CombineRule::Scaled => base * (1.0 + percent) + flat,
            CombineRule::FlatOnly => base + flat,
            CombineRule::PercentOnly => base + percent,
        }
    }
}

/// Full derived stat snapshot, the canonical input for one attack action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub hit_point: f64,
    pub attack: f64,
    pub defense: f64,
    pub elemental_mastery: f64,
    pub critical_rate: f64,
    pub critical_damage: f64,
    pub energy_recharge: f64,
}

impl Status {
    /// Read one stat from the snapshot
    pub fn get(&self, stat: StatName) -> f64 {
        match stat {
            StatName::HitPoint => self.hit_point,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::ElementalMastery => self.elemental_mastery,
            StatName::CriticalRate => self.critical_rate,
            StatName::CriticalDamage => self.critical_damage,
            StatName::EnergyRecharge => self.energy_recharge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_rule() {
        let rule = CombineRule::for_stat(StatName::Attack);
        assert_eq!(rule, CombineRule::Scaled);
        assert!((rule.apply(328.0, 0.50, 0.0) - 492.0).abs() < f64::EPSILON);
        assert!((rule.apply(328.0, 0.0, 150.0) - 478.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_only_rule_ignores_percent() {
        let rule = CombineRule::for_stat(StatName::ElementalMastery);
        assert!((rule.apply(100.0, 0.50, 80.0) - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_only_rule_ignores_flat() {
        let rule = CombineRule::for_stat(StatName::CriticalRate);
        assert!((rule.apply(0.242, 0.10, 999.0) - 0.342).abs() < 1e-12);
    }
}
