//! AttackSegment - one discrete hit within an attack action

use crate::buff::Buff;
use crate::damage::Enemy;
use crate::types::{ActionKind, Element};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Side effect invoked by a combat loop after damage resolution.
/// The engine defines the signature but never calls it.
#[derive(Clone)]
pub struct OnHitEffect(pub Arc<dyn Fn(&mut dyn Enemy, &str) + Send + Sync>);

impl OnHitEffect {
    /// Wrap a callback
    pub fn new(f: impl Fn(&mut dyn Enemy, &str) + Send + Sync + 'static) -> Self {
        OnHitEffect(Arc::new(f))
    }

    /// Invoke the callback with the defending enemy and the actor id
    pub fn invoke(&self, enemy: &mut dyn Enemy, actor: &str) {
        (self.0)(enemy, actor)
    }
}

impl fmt::Debug for OnHitEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnHitEffect")
    }
}

/// One hit emitted by an attack action.
///
/// `value` is the resolved attack stat times this hit's multiplier,
/// fixed at generation time. Crit parameters ride alongside the value
/// and are applied (or not) by the external damage resolver, never
/// here. Segments are constructed fresh per invocation and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackSegment {
    /// Who performed the attack
    pub actor: String,
    /// Which action produced this hit
    pub action: ActionKind,
    /// Damage element
    pub element: Element,
    /// Game-balance multiplier for this hit
    pub base_multiplier: f64,
    /// Resolved attack * base_multiplier
    pub value: f64,
    /// Resolved critical rate at generation time
    pub critical_rate: f64,
    /// Resolved critical damage at generation time
    pub critical_damage: f64,
    /// Resolved elemental mastery at generation time
    pub elemental_mastery: f64,
    /// The transient buff context this hit was generated under
    pub buffs: Vec<Buff>,
    /// Optional side effect for the combat loop to run after resolution
    #[serde(skip)]
    pub on_hit: Option<OnHitEffect>,
}

impl AttackSegment {
    /// Roll whether this hit crits, with caller-supplied randomness.
    ///
    /// The engine itself never consumes this; resolution decides how
    /// the outcome combines with `value`.
    pub fn roll_critical(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.critical_rate
    }

    /// Damage if this hit crits: value scaled by the crit multiplier
    pub fn critical_value(&self) -> f64 {
        self.value * (1.0 + self.critical_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn segment(critical_rate: f64) -> AttackSegment {
        AttackSegment {
            actor: "test".to_string(),
            action: ActionKind::NormalAttack,
            element: Element::Anemo,
            base_multiplier: 1.0,
            value: 100.0,
            critical_rate,
            critical_damage: 0.5,
            elemental_mastery: 0.0,
            buffs: vec![],
            on_hit: None,
        }
    }

    #[test]
    fn test_roll_critical_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(!segment(0.0).roll_critical(&mut rng));
        assert!(segment(1.0).roll_critical(&mut rng));
    }

    #[test]
    fn test_critical_value_scales_by_multiplier() {
        assert!((segment(0.5).critical_value() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_on_hit_invocation() {
        use std::sync::atomic::{AtomicU32, Ordering};

        struct Dummy;
        impl Enemy for Dummy {
            fn id(&self) -> &str {
                "dummy"
            }
        }

        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let effect = OnHitEffect::new(move |enemy, actor| {
            assert_eq!(enemy.id(), "dummy");
            assert_eq!(actor, "test");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut enemy = Dummy;
        effect.invoke(&mut enemy, "test");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
