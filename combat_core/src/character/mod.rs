//! Character - base stats, equipped gear, and the stat resolution pipeline

mod kit;
mod status;

pub use kit::CharacterKit;
pub use status::{CombineRule, Status};

use crate::buff::{Buff, BuffLedger};
use crate::damage::AttackSegment;
use crate::gear::{artifact_ledger, Artifact, Weapon};
use crate::types::{ActionKind, BuffKind, StatName};
use serde::{Deserialize, Serialize};

/// Immutable per-character base stats.
///
/// Set once at construction; `attack` already includes the equipped
/// weapon's flat attack bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hit_point: f64,
    pub attack: f64,
    pub defense: f64,
    pub elemental_mastery: f64,
    pub critical_rate: f64,
    pub critical_damage: f64,
    pub energy_recharge: f64,
}

impl BaseStats {
    /// Read one base stat
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

/// Capability set for attack actions.
///
/// Every implementor resolves current stats under the caller's
/// transient buff context and emits a fixed-shape segment sequence.
/// Calls are stateless given their inputs.
pub trait CombatActions {
    fn normal_attack(&self, buffs: &[Buff]) -> Vec<AttackSegment>;
    fn charge_attack(&self, buffs: &[Buff]) -> Vec<AttackSegment>;
    fn skill(&self, buffs: &[Buff]) -> Vec<AttackSegment>;
    fn burst(&self, buffs: &[Buff]) -> Vec<AttackSegment>;

    /// No character provides a plunging attack yet; callers handle `None`.
    fn plunging_attack(&self, _buffs: &[Buff]) -> Option<Vec<AttackSegment>> {
        None
    }
}

/// A playable character: base stats plus equipped gear and action kit
#[derive(Debug, Clone)]
pub struct Character {
    /// Unique identifier, stamped onto emitted segments
    pub id: String,
    base: BaseStats,
    kit: CharacterKit,
    artifacts: Vec<Artifact>,
    weapon: Weapon,
}

impl Character {
    /// Create a character, folding the weapon's flat attack into base attack
    pub fn new(
        id: impl Into<String>,
        mut base: BaseStats,
        kit: CharacterKit,
        artifacts: Vec<Artifact>,
        weapon: Weapon,
    ) -> Self {
        base.attack += weapon.attack;
        Character {
            id: id.into(),
            base,
            kit,
            artifacts,
            weapon,
        }
    }

    /// Base stats (weapon flat attack already included)
    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    /// This character's constant action data
    pub fn kit(&self) -> &CharacterKit {
        &self.kit
    }

    /// Equipped artifacts
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Equipped weapon
    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    /// Normalized ledger for one stat query: gear substats, then the
    /// transient buff context, then the weapon main stat folded last.
    pub fn buff_context(&self, buffs: &[Buff]) -> BuffLedger {
        artifact_ledger(&self.artifacts)
            .merge(BuffLedger::from_buffs(buffs))
            .fold(self.weapon.main_status)
    }

    fn combine(&self, stat: StatName, ledger: &BuffLedger) -> f64 {
        let percent = ledger.lookup(BuffKind::Percent, stat);
        let flat = ledger.lookup(BuffKind::Flat, stat);
        CombineRule::for_stat(stat).apply(self.base.get(stat), percent, flat)
    }

    /// Resolve one stat under the given transient buff context
    pub fn resolve_stat(&self, stat: StatName, buffs: &[Buff]) -> f64 {
        self.combine(stat, &self.buff_context(buffs))
    }

    /// Resolve the full stat snapshot, computing the ledger once
    pub fn resolve_all(&self, buffs: &[Buff]) -> Status {
        let ledger = self.buff_context(buffs);
        Status {
            hit_point: self.combine(StatName::HitPoint, &ledger),
            attack: self.combine(StatName::Attack, &ledger),
            defense: self.combine(StatName::Defense, &ledger),
            elemental_mastery: self.combine(StatName::ElementalMastery, &ledger),
            critical_rate: self.combine(StatName::CriticalRate, &ledger),
            critical_damage: self.combine(StatName::CriticalDamage, &ledger),
            energy_recharge: self.combine(StatName::EnergyRecharge, &ledger),
        }
    }

    /// Emit one segment per multiplier against the current snapshot
    fn action_segments(
        &self,
        action: ActionKind,
        multipliers: &[f64],
        buffs: &[Buff],
    ) -> Vec<AttackSegment> {
        let status = self.resolve_all(buffs);
        let element = self.kit.attached_element.unwrap_or(self.kit.element);
        multipliers
            .iter()
            .map(|&multiplier| AttackSegment {
                actor: self.id.clone(),
                action,
                element,
                base_multiplier: multiplier,
                value: status.attack * multiplier,
                critical_rate: status.critical_rate,
                critical_damage: status.critical_damage,
                elemental_mastery: status.elemental_mastery,
                buffs: buffs.to_vec(),
                on_hit: None,
            })
            .collect()
    }
}

impl CombatActions for Character {
    fn normal_attack(&self, buffs: &[Buff]) -> Vec<AttackSegment> {
        self.action_segments(ActionKind::NormalAttack, &self.kit.normal_attack, buffs)
    }

    fn charge_attack(&self, buffs: &[Buff]) -> Vec<AttackSegment> {
        self.action_segments(ActionKind::ChargeAttack, &self.kit.charge_attack, buffs)
    }

    fn skill(&self, buffs: &[Buff]) -> Vec<AttackSegment> {
        self.action_segments(ActionKind::Skill, &self.kit.skill, buffs)
    }

    fn burst(&self, buffs: &[Buff]) -> Vec<AttackSegment> {
        self.action_segments(ActionKind::Burst, &self.kit.burst, buffs)
    }

    fn plunging_attack(&self, buffs: &[Buff]) -> Option<Vec<AttackSegment>> {
        self.kit
            .plunging_attack
            .as_deref()
            .map(|multipliers| self.action_segments(ActionKind::PlungingAttack, multipliers, buffs))
    }
}
