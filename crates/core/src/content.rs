//! Built-in content: the monster bestiary grouped by rarity and the weapon armory used
//! for chest loot and death drops.

use std::collections::BTreeMap;

use crate::monster::{MonsterCatalog, MonsterTemplate};
use crate::rng::LevelRng;

pub mod keys {
    pub const WEAPON_RUSTY_SWORD: &str = "weapon_rusty_sword";
    pub const WEAPON_IRON_MACE: &str = "weapon_iron_mace";
    pub const WEAPON_PHASE_DAGGER: &str = "weapon_phase_dagger";
    pub const WEAPON_STEEL_LONGSWORD: &str = "weapon_steel_longsword";
    pub const WEAPON_BLOOD_AXE: &str = "weapon_blood_axe";
}

struct MonsterStats {
    name: &'static str,
    rarity: u32,
    hp: i32,
    attack: i32,
    defense: i32,
    speed: u32,
}

const BASE_MONSTERS: [MonsterStats; 8] = [
    MonsterStats { name: "Goblin", rarity: 1, hp: 10, attack: 2, defense: 0, speed: 12 },
    MonsterStats { name: "Feral Hound", rarity: 1, hp: 6, attack: 3, defense: 0, speed: 15 },
    MonsterStats { name: "Blood Acolyte", rarity: 2, hp: 12, attack: 5, defense: 0, speed: 10 },
    MonsterStats { name: "Corrupted Guard", rarity: 2, hp: 18, attack: 4, defense: 2, speed: 9 },
    MonsterStats { name: "Gargoyle", rarity: 3, hp: 20, attack: 4, defense: 3, speed: 8 },
    MonsterStats { name: "Living Armor", rarity: 3, hp: 25, attack: 3, defense: 4, speed: 5 },
    MonsterStats { name: "Shadow Stalker", rarity: 4, hp: 14, attack: 4, defense: 1, speed: 12 },
    MonsterStats { name: "Abyssal Warden", rarity: 5, hp: 80, attack: 8, defense: 3, speed: 9 },
];

/// Monster templates indexed by rarity, with hit points and attack growing with depth.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    by_rarity: BTreeMap<u32, Vec<MonsterTemplate>>,
}

impl Bestiary {
    pub fn for_level(level: u32) -> Self {
        let mut bestiary = Self::default();
        bestiary.refresh_for_level(level);
        bestiary
    }

    pub fn rarities(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_rarity.keys().copied()
    }
}

impl MonsterCatalog for Bestiary {
    fn refresh_for_level(&mut self, level: u32) {
        let depth_bonus = i32::try_from(level / 2).unwrap_or(i32::MAX);
        self.by_rarity.clear();
        for stats in &BASE_MONSTERS {
            self.by_rarity.entry(stats.rarity).or_default().push(MonsterTemplate {
                name: stats.name.to_string(),
                rarity: stats.rarity,
                max_hp: stats.hp.saturating_add(depth_bonus),
                attack: stats.attack.saturating_add(depth_bonus / 3),
                defense: stats.defense,
                speed: stats.speed,
            });
        }
    }

    fn templates(&self, rarity: u32) -> &[MonsterTemplate] {
        self.by_rarity.get(&rarity).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weapon {
    pub id: &'static str,
    pub name: &'static str,
    pub attack_bonus: i32,
    /// Shallowest level where this weapon can drop.
    pub min_level: u32,
}

static WEAPONS: [Weapon; 5] = [
    Weapon { id: keys::WEAPON_RUSTY_SWORD, name: "Rusty Sword", attack_bonus: 2, min_level: 1 },
    Weapon { id: keys::WEAPON_IRON_MACE, name: "Iron Mace", attack_bonus: 4, min_level: 2 },
    Weapon { id: keys::WEAPON_PHASE_DAGGER, name: "Phase Dagger", attack_bonus: 3, min_level: 4 },
    Weapon {
        id: keys::WEAPON_STEEL_LONGSWORD,
        name: "Steel Longsword",
        attack_bonus: 6,
        min_level: 6,
    },
    Weapon { id: keys::WEAPON_BLOOD_AXE, name: "Blood Axe", attack_bonus: 6, min_level: 9 },
];

/// Weapon loot table keyed by level.
pub struct Armory;

impl Armory {
    pub fn weapons() -> &'static [Weapon] {
        &WEAPONS
    }

    pub fn available_at(level: u32) -> impl Iterator<Item = &'static Weapon> {
        WEAPONS.iter().filter(move |weapon| weapon.min_level <= level.max(1))
    }

    pub fn roll(level: u32, rng: &mut LevelRng) -> Weapon {
        let pool: Vec<&Weapon> = Self::available_at(level).collect();
        rng.pick(&pool).map_or(WEAPONS[0], |weapon| **weapon)
    }

    pub fn find(id: &str) -> Option<Weapon> {
        WEAPONS.iter().find(|weapon| weapon.id == id).copied()
    }
}
