//! BuffLedger - Normalized buff aggregation keyed by (kind, stat)

use crate::buff::Buff;
use crate::types::{BuffKind, StatName};
use std::collections::HashMap;

/// Aggregated buffs from any number of sources.
///
/// Keyed by `(BuffKind, StatName)` so duplicate contributions from
/// independent sources are always summed into one entry. Downstream
/// stat lookup reads exactly one magnitude per key; parallel entries
/// for the same key cannot exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuffLedger {
    entries: HashMap<(BuffKind, StatName), f64>,
}

impl BuffLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        BuffLedger::default()
    }

    /// Normalize a list of buffs into a ledger, summing duplicate keys
    pub fn from_buffs(buffs: &[Buff]) -> Self {
        let mut ledger = BuffLedger::new();
        for buff in buffs {
            ledger.add(*buff);
        }
        ledger
    }

    /// Fold one buff into the ledger by per-key summation
    pub fn add(&mut self, buff: Buff) {
        *self.entries.entry((buff.kind, buff.stat)).or_insert(0.0) += buff.magnitude;
    }

    /// Fold one buff in, by value (weapon main-stat injection)
    pub fn fold(mut self, buff: Buff) -> Self {
        self.add(buff);
        self
    }

    /// Merge another ledger into this one, summing per key.
    ///
    /// Commutative and associative in its numeric result: the order
    /// sources are aggregated in never changes the final magnitudes.
    pub fn merge(mut self, other: BuffLedger) -> Self {
        for ((kind, stat), magnitude) in other.entries {
            *self.entries.entry((kind, stat)).or_insert(0.0) += magnitude;
        }
        self
    }

    /// Look up the aggregated magnitude for a key, 0.0 when absent
    pub fn lookup(&self, kind: BuffKind, stat: StatName) -> f64 {
        self.entries.get(&(kind, stat)).copied().unwrap_or(0.0)
    }

    /// Number of distinct (kind, stat) keys present
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
