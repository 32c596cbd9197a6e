//! Character sheet configuration loading

use super::ConfigError;
use crate::character::{BaseStats, Character, CharacterKit};
use crate::gear::{Artifact, Weapon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One character's configured base stats and action kit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Unique character identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Base stats before any gear or buffs
    pub base: BaseStats,
    /// Constant action data
    pub kit: CharacterKit,
}

impl CharacterSheet {
    /// Reject sheets the engine cannot act on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (value, label) in [
            (self.base.hit_point, "hit_point"),
            (self.base.attack, "attack"),
            (self.base.defense, "defense"),
            (self.base.elemental_mastery, "elemental_mastery"),
            (self.base.critical_rate, "critical_rate"),
            (self.base.critical_damage, "critical_damage"),
            (self.base.energy_recharge, "energy_recharge"),
        ] {
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "character '{}': base {} is negative",
                    self.id, label
                )));
            }
        }

        for (table, label) in [
            (&self.kit.normal_attack, "normal_attack"),
            (&self.kit.charge_attack, "charge_attack"),
            (&self.kit.skill, "skill"),
            (&self.kit.burst, "burst"),
        ] {
            if table.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "character '{}': {} multiplier table is empty",
                    self.id, label
                )));
            }
        }

        Ok(())
    }

    /// Build a playable character from this sheet and its equipment
    pub fn equip(&self, artifacts: Vec<Artifact>, weapon: Weapon) -> Character {
        Character::new(self.id.clone(), self.base, self.kit.clone(), artifacts, weapon)
    }
}

/// Container for roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "characters")]
    pub characters: Vec<CharacterSheet>,
}

/// Load character sheets from a TOML file
pub fn load_roster(path: &Path) -> Result<HashMap<String, CharacterSheet>, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    index_roster(config)
}

/// Load character sheets from a TOML string
pub fn parse_roster(content: &str) -> Result<HashMap<String, CharacterSheet>, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    index_roster(config)
}

fn index_roster(config: RosterConfig) -> Result<HashMap<String, CharacterSheet>, ConfigError> {
    let mut map = HashMap::new();
    for sheet in config.characters {
        sheet.validate()?;
        map.insert(sheet.id.clone(), sheet);
    }
    Ok(map)
}

/// The roster shipped with the crate
pub fn default_roster() -> HashMap<String, CharacterSheet> {
    let toml = include_str!("../../config/characters.toml");
    parse_roster(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    #[test]
    fn test_parse_roster() {
        let toml = r#"
[[characters]]
id = "galecaller"
name = "Galecaller"

[characters.base]
hit_point = 10164.0
attack = 328.0
defense = 607.0
elemental_mastery = 0.0
critical_rate = 0.242
critical_damage = 0.5
energy_recharge = 1.0

[characters.kit]
element = "anemo"
skill_cool_time = 6.0
burst_cool_time = 20.0
burst_energy = 60.0
normal_attack = [1.358, 1.285, 0.942, 0.942]
charge_attack = [1.32, 1.32]
skill = [2.7]
burst = [4.416]
"#;

        let roster = parse_roster(toml).unwrap();
        assert!(roster.contains_key("galecaller"));

        let sheet = &roster["galecaller"];
        assert_eq!(sheet.name, "Galecaller");
        assert_eq!(sheet.kit.element, Element::Anemo);
        assert_eq!(sheet.kit.normal_attack.len(), 4);
        assert!(sheet.kit.plunging_attack.is_none());
    }

    #[test]
    fn test_empty_multiplier_table_rejected() {
        let toml = r#"
[[characters]]
id = "broken"
name = "Broken"

[characters.base]
hit_point = 1.0
attack = 1.0
defense = 1.0
elemental_mastery = 0.0
critical_rate = 0.05
critical_damage = 0.5
energy_recharge = 1.0

[characters.kit]
element = "pyro"
skill_cool_time = 1.0
burst_cool_time = 1.0
burst_energy = 40.0
normal_attack = []
charge_attack = [1.0]
skill = [1.0]
burst = [1.0]
"#;

        assert!(matches!(
            parse_roster(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_negative_base_stat_rejected() {
        let toml = r#"
[[characters]]
id = "broken"
name = "Broken"

[characters.base]
hit_point = 1.0
attack = -5.0
defense = 1.0
elemental_mastery = 0.0
critical_rate = 0.05
critical_damage = 0.5
energy_recharge = 1.0

[characters.kit]
element = "pyro"
skill_cool_time = 1.0
burst_cool_time = 1.0
burst_energy = 40.0
normal_attack = [1.0]
charge_attack = [1.0]
skill = [1.0]
burst = [1.0]
"#;

        assert!(matches!(
            parse_roster(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_default_roster_loads() {
        let roster = default_roster();
        assert!(roster.contains_key("galecaller"));
        let sheet = &roster["galecaller"];
        assert_eq!(sheet.base.attack, 328.0);
        assert_eq!(sheet.kit.normal_attack, vec![1.358, 1.285, 0.942, 0.942]);
    }
}
