//! Level-difficulty curve, monster spawning and chest placement.

use std::iter;

use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::interactive::Chest;
use crate::mapgen::Room;
use crate::monster::{Monster, MonsterCatalog};
use crate::point::{GridPoint, PixelPoint};
use crate::rng::LevelRng;

/// Highest rarity that can spawn on `level`.
pub fn difficulty_tier(level: u32) -> u32 {
    (level / 3).max(1)
}

/// Multiset of rarities: rarity `i` appears `tier - i + 1` times, so common monsters
/// always outweigh rare ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RarityPool {
    entries: Vec<u32>,
}

impl RarityPool {
    pub fn weighted(level: u32) -> Self {
        let tier = difficulty_tier(level);
        let entries = (1..=tier)
            .flat_map(|rarity| iter::repeat_n(rarity, (tier - rarity + 1) as usize))
            .collect();
        Self { entries }
    }

    /// Weighted pool without the rarities the catalog has no templates for.
    pub fn for_catalog(level: u32, catalog: &impl MonsterCatalog) -> Self {
        let mut pool = Self::weighted(level);
        pool.entries.retain(|&rarity| catalog.has_templates(rarity));
        pool
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn weight_of(&self, rarity: u32) -> usize {
        self.entries.iter().filter(|&&entry| entry == rarity).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sample(&self, rng: &mut LevelRng) -> Option<u32> {
        rng.pick(&self.entries).copied()
    }
}

/// Rolls monsters column by column over every room except the spawn room. The catalog
/// must already be refreshed for `level`.
pub fn spawn_monsters(
    rooms: &[Room],
    catalog: &impl MonsterCatalog,
    level: u32,
    config: &GenerationConfig,
    rng: &mut LevelRng,
) -> Vec<Monster> {
    let pool = RarityPool::for_catalog(level, catalog);
    if pool.is_empty() {
        warn!(level, "no monster templates for any reachable rarity; level stays empty");
        return Vec::new();
    }

    let mut monsters = Vec::new();
    for room in rooms.iter().skip(1) {
        for x in room.start.x..room.end.x {
            if !rng.one_in(config.monster_chance) {
                continue;
            }
            let Some(rarity) = pool.sample(rng) else { continue };
            let Some(template) = rng.pick(catalog.templates(rarity)) else { continue };
            let y = rng.randint(room.start.y, room.end.y - 1);
            monsters.push(template.place(GridPoint::new(x, y).to_pixel(config.tile_size)));
        }
    }
    debug!(level, count = monsters.len(), "monsters rolled");
    monsters
}

/// Rolls one chest per interior room. A chest whose spot falls on the stairs is skipped.
pub fn place_chests(
    rooms: &[Room],
    stairs: PixelPoint,
    level: u32,
    config: &GenerationConfig,
    rng: &mut LevelRng,
) -> Vec<Chest> {
    let interior = rooms.iter().skip(1).take(rooms.len().saturating_sub(2));
    let mut chests = Vec::new();
    for room in interior {
        if !rng.one_in(config.chest_chance) {
            continue;
        }
        let pos = room.center().to_pixel(config.tile_size);
        if pos == stairs {
            continue;
        }
        chests.push(Chest::new(pos, level));
    }
    debug!(level, count = chests.len(), "chests rolled");
    chests
}
