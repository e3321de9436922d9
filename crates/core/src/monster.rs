//! Monster templates, placed instances and the catalog contract used by population.

use serde::Serialize;

use crate::point::PixelPoint;
use crate::types::MonsterId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub rarity: u32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: u32,
}

impl MonsterTemplate {
    pub fn place(&self, pos: PixelPoint) -> Monster {
        Monster {
            id: MonsterId::default(),
            name: self.name.clone(),
            rarity: self.rarity,
            pos,
            hp: self.max_hp,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            dead: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Monster {
    #[serde(skip)]
    pub(crate) id: MonsterId,
    pub name: String,
    pub rarity: u32,
    pub pos: PixelPoint,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: u32,
    pub(crate) dead: bool,
}

impl Monster {
    /// Key of this monster in its level; assigned when the level stores it.
    pub fn id(&self) -> MonsterId {
        self.id
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}

/// Source of monster templates grouped by rarity tier.
pub trait MonsterCatalog {
    /// Rebuilds the templates for a dungeon level (stats may scale with depth).
    fn refresh_for_level(&mut self, level: u32);

    /// Templates of one rarity; empty when the tier has none.
    fn templates(&self, rarity: u32) -> &[MonsterTemplate];

    fn has_templates(&self, rarity: u32) -> bool {
        !self.templates(rarity).is_empty()
    }
}

/// Per-tick monster behaviour supplied by the game (AI lives outside the level).
pub trait MonsterController {
    fn step(&mut self, monster: &mut Monster, player: PixelPoint);
}

impl<F> MonsterController for F
where
    F: FnMut(&mut Monster, PixelPoint),
{
    fn step(&mut self, monster: &mut Monster, player: PixelPoint) {
        self(monster, player);
    }
}
