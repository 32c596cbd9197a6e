//! Gear - artifact and weapon buff sources

mod artifact;
mod weapon;

pub use artifact::{artifact_ledger, Artifact};
pub use weapon::Weapon;
