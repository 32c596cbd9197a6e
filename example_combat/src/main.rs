//! Example Combat - A minimal combat loop demonstrating combat_core
//!
//! This demo shows:
//! - Loading the default character roster
//! - Equipping artifacts and a weapon
//! - Supplying a transient buff context per attack
//! - Feeding attack segments to an external damage resolver
//! - Rolling crits with injected, seeded randomness

use combat_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Training dummy standing in for the enemy collaborator
struct TrainingDummy {
    statuses: Vec<Element>,
}

impl Enemy for TrainingDummy {
    fn id(&self) -> &str {
        "training_dummy"
    }
}

/// Rolls each segment's crit with a seeded RNG and realizes damage.
/// Mitigation and reactions would also live here, outside the engine.
struct RolledResolver {
    rng: ChaCha8Rng,
}

impl DamageResolver for RolledResolver {
    fn resolve(&mut self, segments: &[AttackSegment]) -> f64 {
        segments
            .iter()
            .map(|segment| {
                if segment.roll_critical(&mut self.rng) {
                    segment.critical_value()
                } else {
                    segment.value
                }
            })
            .sum()
    }
}

fn print_action(label: &str, segments: &[AttackSegment], resolver: &mut RolledResolver) {
    let report = serde_json::to_string_pretty(segments).unwrap_or_default();
    println!("== {label} ==");
    println!("{report}");
    println!("realized damage: {:.1}\n", resolver.resolve(segments));
}

fn main() {
    let roster = default_roster();
    let sheet = roster.get("galecaller").expect("default roster character");

    let artifacts = vec![
        Artifact::new("Plume of Ruin", vec![Buff::flat(StatName::Attack, 311.0)]),
        Artifact::new(
            "Sands of Storms",
            vec![
                Buff::percent(StatName::Attack, 0.466),
                Buff::percent(StatName::CriticalRate, 0.062),
            ],
        ),
        Artifact::new(
            "Circlet of Gales",
            vec![Buff::percent(StatName::CriticalDamage, 0.622)],
        ),
    ];
    let weapon = Weapon::new("Gale Staff", 216.0, Buff::percent(StatName::Attack, 0.20));
    let character = sheet.equip(artifacts, weapon);

    // Transient context a party would supply fresh each query
    let team_buffs = [
        Buff::percent(StatName::Attack, 0.25),
        Buff::flat(StatName::ElementalMastery, 80.0),
    ];

    let status = character.resolve_all(&team_buffs);
    println!("{} under team buffs:", sheet.name);
    println!("{}\n", serde_json::to_string_pretty(&status).unwrap_or_default());

    let mut resolver = RolledResolver {
        rng: ChaCha8Rng::seed_from_u64(42),
    };

    print_action("normal attack", &character.normal_attack(&team_buffs), &mut resolver);
    print_action("charged attack", &character.charge_attack(&team_buffs), &mut resolver);
    print_action("skill", &character.skill(&team_buffs), &mut resolver);
    print_action("burst", &character.burst(&team_buffs), &mut resolver);

    match character.plunging_attack(&team_buffs) {
        Some(segments) => print_action("plunging attack", &segments, &mut resolver),
        None => println!("== plunging attack ==\nnot available for this character\n"),
    }

    // On-hit effects belong to the combat loop, not the engine
    let mut dummy = TrainingDummy { statuses: vec![] };
    let tag_element = character.kit().element;
    let on_hit = OnHitEffect::new(move |enemy, actor| {
        println!("{} tags {} with {:?}", actor, enemy.id(), tag_element);
    });
    on_hit.invoke(&mut dummy, &character.id);
    dummy.statuses.push(tag_element);
    println!(
        "dummy now carries {} applied status(es): cooldowns were {}s skill / {}s burst, {} energy",
        dummy.statuses.len(),
        character.kit().skill_cool_time,
        character.kit().burst_cool_time,
        character.kit().burst_energy,
    );
}
