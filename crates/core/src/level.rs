//! The level orchestrator. `LevelMap` owns every collection of a generated level and is
//! the only place entities are added or removed; collaborators go through commands that
//! the end-of-tick sweep applies.

use slotmap::SlotMap;
use tracing::{info, warn};

use crate::config::GenerationConfig;
use crate::content::Weapon;
use crate::error::GenerationError;
use crate::interactive::{Chest, GroundWeapon, Interactive, Stairs};
use crate::mapgen::{Bridge, Floor, GridLayout, Room, TileMap, Wall, build_layout};
use crate::monster::{Monster, MonsterCatalog, MonsterController};
use crate::point::PixelPoint;
use crate::population;
use crate::rng::{LevelRng, derive_level_seed};
use crate::types::{ChestId, InteractiveRef, LevelEvent, MonsterId, WeaponId};

mod commands;
mod hash;
mod interact;
mod sweep;

#[cfg(test)]
mod tests;

pub use sweep::SweepReport;

pub const DEFAULT_GENERATION_ATTEMPTS: u32 = 8;

pub struct LevelMap {
    config: GenerationConfig,
    level: u32,
    run_seed: u64,
    rng: LevelRng,
    layout: GridLayout,
    tiles: TileMap,
    spawn: PixelPoint,
    stairs: Stairs,
    monsters: SlotMap<MonsterId, Monster>,
    chests: SlotMap<ChestId, Chest>,
    ground_weapons: SlotMap<WeaponId, GroundWeapon>,
    pending_drops: Vec<GroundWeapon>,
    events: Vec<LevelEvent>,
}

impl LevelMap {
    /// Builds the layout for `level` of the run seeded with `run_seed`, converts it to
    /// pixel space and places the stairs in the last room. Population is a separate step.
    pub fn generate(
        config: GenerationConfig,
        width: u32,
        height: u32,
        level: u32,
        run_seed: u64,
    ) -> Result<Self, GenerationError> {
        let mut rng = LevelRng::new(derive_level_seed(run_seed, level));
        let layout = build_layout(&config, width, height, &mut rng)?;
        let tiles = TileMap::finalize(&layout, config.tile_size);

        let no_rooms = || GenerationError::NoRoomsPlaced { trials: config.placement_trials };
        let spawn = layout.spawn_room().ok_or_else(no_rooms)?.center().to_pixel(config.tile_size);
        let stairs_pos = layout.stairs_room().ok_or_else(no_rooms)?.center().to_pixel(config.tile_size);
        let stairs = Stairs::new(stairs_pos, level.saturating_add(1));

        info!(
            level,
            seed = rng.seed(),
            rooms = layout.rooms.len(),
            bridges = layout.bridges.len(),
            floors = layout.floors.len(),
            walls = layout.walls.len(),
            "level generated"
        );
        let events = vec![LevelEvent::LevelGenerated {
            level,
            rooms: layout.rooms.len(),
            floors: layout.floors.len(),
            walls: layout.walls.len(),
        }];

        Ok(Self {
            config,
            level,
            run_seed,
            rng,
            layout,
            tiles,
            spawn,
            stairs,
            monsters: SlotMap::with_key(),
            chests: SlotMap::with_key(),
            ground_weapons: SlotMap::with_key(),
            pending_drops: Vec::new(),
            events,
        })
    }

    /// Like [`LevelMap::generate`], but an empty placement is retried with the next run
    /// seed, up to `attempts` tries. Other errors return immediately.
    pub fn generate_retrying(
        config: GenerationConfig,
        width: u32,
        height: u32,
        level: u32,
        run_seed: u64,
        attempts: u32,
    ) -> Result<Self, GenerationError> {
        retry_seeds(run_seed, attempts, |seed| Self::generate(config.clone(), width, height, level, seed))
    }

    /// Pixel center of the first room.
    pub fn player_spawn(&self) -> PixelPoint {
        self.spawn
    }

    /// Refreshes the catalog for this level and replaces every monster with a new roll.
    pub fn spawn_monsters(&mut self, catalog: &mut impl MonsterCatalog) -> usize {
        catalog.refresh_for_level(self.level);
        let rolled =
            population::spawn_monsters(&self.layout.rooms, &*catalog, self.level, &self.config, &mut self.rng);
        self.monsters.clear();
        for monster in rolled {
            let id = self.monsters.insert(monster);
            self.monsters[id].id = id;
        }
        let count = self.monsters.len();
        self.events.push(LevelEvent::MonstersSpawned { count });
        count
    }

    /// Replaces every chest with a new roll. Stairs and ground weapons are untouched.
    pub fn gen_interactive(&mut self) -> usize {
        let rolled =
            population::place_chests(&self.layout.rooms, self.stairs.pos, self.level, &self.config, &mut self.rng);
        self.chests.clear();
        for chest in rolled {
            let id = self.chests.insert(chest);
            self.chests[id].id = id;
        }
        let count = self.chests.len();
        self.events.push(LevelEvent::ChestsPlaced { count });
        count
    }

    pub fn populate(&mut self, catalog: &mut impl MonsterCatalog) {
        let monsters = self.spawn_monsters(catalog);
        let chests = self.gen_interactive();
        info!(level = self.level, monsters, chests, "level populated");
    }

    /// Runs the controller on every living monster.
    pub fn move_monsters(&mut self, player: PixelPoint, controller: &mut impl MonsterController) {
        for monster in self.monsters.values_mut().filter(|monster| !monster.dead) {
            controller.step(monster, player);
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn rooms(&self) -> &[Room] {
        &self.layout.rooms
    }

    pub fn bridges(&self) -> &[Bridge] {
        &self.layout.bridges
    }

    pub fn floors(&self) -> &[Floor] {
        self.tiles.floors()
    }

    pub fn walls(&self) -> &[Wall] {
        self.tiles.walls()
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> + '_ {
        self.monsters.values()
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(id)
    }

    pub fn chests(&self) -> impl Iterator<Item = &Chest> + '_ {
        self.chests.values()
    }

    pub fn chest(&self, id: ChestId) -> Option<&Chest> {
        self.chests.get(id)
    }

    pub fn ground_weapons(&self) -> impl Iterator<Item = &GroundWeapon> + '_ {
        self.ground_weapons.values()
    }

    pub fn ground_weapon(&self, id: WeaponId) -> Option<&GroundWeapon> {
        self.ground_weapons.get(id)
    }

    /// Drops queued for the next sweep.
    pub fn pending_drops(&self) -> &[GroundWeapon] {
        &self.pending_drops
    }

    pub fn stairs(&self) -> &Stairs {
        &self.stairs
    }

    pub fn events(&self) -> &[LevelEvent] {
        &self.events
    }

    /// Interactive state of whatever `target` names, if it still exists.
    pub fn interactive(&self, target: InteractiveRef) -> Option<&dyn Interactive> {
        match target {
            InteractiveRef::Chest(id) => self.chests.get(id).map(|chest| chest as &dyn Interactive),
            InteractiveRef::Weapon(id) => {
                self.ground_weapons.get(id).map(|weapon| weapon as &dyn Interactive)
            }
            InteractiveRef::Stairs => Some(&self.stairs as &dyn Interactive),
        }
    }

    fn queue_drop(&mut self, weapon: Weapon, pos: PixelPoint) {
        self.pending_drops.push(GroundWeapon::new(weapon, pos));
        self.events.push(LevelEvent::WeaponDropRequested { weapon: weapon.id });
    }
}

/// Calls `attempt` with `run_seed`, `run_seed + 1`, ... while it fails with a retryable
/// error, at most `attempts` times (at least once).
fn retry_seeds<T>(
    run_seed: u64,
    attempts: u32,
    mut attempt: impl FnMut(u64) -> Result<T, GenerationError>,
) -> Result<T, GenerationError> {
    let attempts = attempts.max(1);
    let mut tried = 0;
    loop {
        let seed = run_seed.wrapping_add(u64::from(tried));
        match attempt(seed) {
            Err(err) if err.is_retryable() && tried + 1 < attempts => {
                warn!(seed, attempt = tried, error = %err, "level generation failed; retrying");
                tried += 1;
            }
            result => return result,
        }
    }
}
