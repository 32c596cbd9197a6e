//! combat_core - Buff aggregation and combat stat resolution
//!
//! This library provides:
//! - BuffLedger: Normalized stat deltas merged from independent sources
//! - Gear extraction: Artifact substats and weapon main stats as buffs
//! - Character: Base stats plus gear, resolved into final stat values
//! - AttackSegment: Per-hit damage descriptors for external resolution

pub mod buff;
pub mod character;
pub mod config;
pub mod damage;
pub mod gear;
pub mod types;

pub mod prelude;

// Re-export core types for convenience
pub use buff::{Buff, BuffLedger};
pub use character::{BaseStats, Character, CharacterKit, CombatActions, CombineRule, Status};
pub use config::{default_roster, CharacterSheet, ConfigError};
pub use damage::{AttackSegment, DamageResolver, Enemy, OnHitEffect};
pub use gear::{artifact_ledger, Artifact, Weapon};
pub use types::{ActionKind, BuffKind, Element, StatName};
