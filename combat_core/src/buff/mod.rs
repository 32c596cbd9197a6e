//! Buff system - modifiers and the normalized ledger they merge into

mod ledger;

pub use ledger::BuffLedger;

use crate::types::{BuffKind, StatName};
use serde::{Deserialize, Serialize};

/// One stat modifier from any source (artifact substat, weapon main
/// stat, team buff, skill self-buff)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    /// How the magnitude combines with the base stat
    pub kind: BuffKind,
    /// Which stat this modifies
    pub stat: StatName,
    /// Flat amount, or fraction of base for percent buffs
    pub magnitude: f64,
}

impl Buff {
    /// Create a flat buff
    pub fn flat(stat: StatName, magnitude: f64) -> Self {
        Buff {
            kind: BuffKind::Flat,
            stat,
            magnitude,
        }
    }

    /// Create a percent buff (0.50 = +50%)
    pub fn percent(stat: StatName, magnitude: f64) -> Self {
        Buff {
            kind: BuffKind::Percent,
            stat,
            magnitude,
        }
    }
}
