//! Damage system - attack segments and the external resolution contract

mod segment;

pub use segment::{AttackSegment, OnHitEffect};

/// Defending side of an on-hit callback.
///
/// The engine never mutates enemies; a combat loop implements this and
/// passes it to segment callbacks after damage resolution.
pub trait Enemy {
    /// Unique identifier for this enemy
    fn id(&self) -> &str;
}

/// Consumer contract for turning attack segments into realized or
/// expected damage.
///
/// Owns everything the engine leaves open: whether and how the crit
/// parameters fold into `value`, elemental reactions, and enemy-side
/// mitigation.
pub trait DamageResolver {
    /// Resolve one ordered segment sequence into a damage total
    fn resolve(&mut self, segments: &[AttackSegment]) -> f64;
}
