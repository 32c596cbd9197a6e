//! Core types specific to combat_core

use serde::{Deserialize, Serialize};

/// Stats a buff can target and a character can resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatName {
    HitPoint,
    Attack,
    Defense,
    ElementalMastery,
    CriticalRate,
    CriticalDamage,
    EnergyRecharge,
}

impl StatName {
    /// Get all resolvable stats
    pub fn all() -> &'static [StatName] {
        &[
            StatName::HitPoint,
            StatName::Attack,
            StatName::Defense,
            StatName::ElementalMastery,
            StatName::CriticalRate,
            StatName::CriticalDamage,
            StatName::EnergyRecharge,
        ]
    }
}

/// How a buff magnitude combines with a base stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    /// Added to the stat after percentage scaling
    Flat,
    /// Fraction of the base stat (0.50 = +50%)
    Percent,
}

/// Damage element carried by an attack segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Anemo,
    Pyro,
    Hydro,
    Electro,
    Cryo,
    Geo,
    Dendro,
    Physical,
}

/// Attack action categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    NormalAttack,
    ChargeAttack,
    PlungingAttack,
    Skill,
    Burst,
}
