//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ActionKind, BuffKind, Element, StatName};

// Buff system
pub use crate::buff::{Buff, BuffLedger};

// Gear
pub use crate::gear::{artifact_ledger, Artifact, Weapon};

// Characters
pub use crate::character::{BaseStats, Character, CharacterKit, CombatActions, Status};

// Damage
pub use crate::damage::{AttackSegment, DamageResolver, Enemy, OnHitEffect};

// Config
pub use crate::config::{default_roster, CharacterSheet};
