//! CharacterKit - per-character constant action data
//!
//! Multiplier tables and elements are game-balance constants, loaded
//! from configuration rather than computed. Cooldowns and burst energy
//! are declared here but ticking them over time is a combat-loop
//! concern, not this crate's.

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Constant action data for one character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterKit {
    /// Element carried by this character's attacks
    pub element: Element,
    /// Element currently infusing the character, if any
    #[serde(default)]
    pub attached_element: Option<Element>,

    /// Skill cooldown in seconds (declared, never ticked here)
    pub skill_cool_time: f64,
    /// Burst cooldown in seconds (declared, never ticked here)
    pub burst_cool_time: f64,
    /// Energy required to cast the burst
    pub burst_energy: f64,

    /// Per-hit multipliers for the normal attack string
    pub normal_attack: Vec<f64>,
    /// Per-hit multipliers for the charged attack
    pub charge_attack: Vec<f64>,
    /// Per-hit multipliers for the elemental skill
    pub skill: Vec<f64>,
    /// Per-hit multipliers for the elemental burst
    pub burst: Vec<f64>,
    /// Plunging attack multipliers; no character provides these yet
    #[serde(default)]
    pub plunging_attack: Option<Vec<f64>>,
}
