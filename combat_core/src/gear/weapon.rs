//! Weapon - flat attack plus one main-stat buff

use crate::buff::Buff;
use serde::{Deserialize, Serialize};

/// The character's single equipped weapon.
///
/// `attack` is folded into the character's base attack at
/// construction; `main_status` is injected into the buff ledger after
/// all other gear contributions are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name
    pub name: String,
    /// Flat attack added to the wielder's base attack
    pub attack: f64,
    /// The weapon's main stat contribution
    pub main_status: Buff,
}

impl Weapon {
    /// Create a new weapon
    pub fn new(name: impl Into<String>, attack: f64, main_status: Buff) -> Self {
        Weapon {
            name: name.into(),
            attack,
            main_status,
        }
    }
}
