//! Per-frame viewer logic, kept free of rendering so it can run without a window.

use dungeon::{
    Bestiary, DEFAULT_GENERATION_ATTEMPTS, GenerationConfig, GenerationError, Interactive,
    InteractiveRef, LevelMap, Monster, PixelPoint, SweepReport,
};
use macroquad::prelude::KeyCode;
use tracing::{info, warn};

pub const MAP_WIDTH: u32 = 80;
pub const MAP_HEIGHT: u32 = 60;
const LOG_CAPACITY: usize = 8;
/// Monsters closer than this many tiles shuffle towards the probe.
const AGGRO_TILES: f32 = 6.0;

/// A level on screen plus the probe standing in for the player.
pub struct ViewerSession {
    pub map: LevelMap,
    pub probe: PixelPoint,
    pub selected: InteractiveRef,
    pub last_sweep: SweepReport,
    pub log: Vec<String>,
    config: GenerationConfig,
    catalog: Bestiary,
}

impl ViewerSession {
    pub fn new(config: GenerationConfig, run_seed: u64, level: u32) -> Result<Self, GenerationError> {
        let mut catalog = Bestiary::default();
        let map = build_level(&config, run_seed, level, &mut catalog)?;
        let probe = map.player_spawn();
        Ok(Self {
            map,
            probe,
            selected: InteractiveRef::Stairs,
            last_sweep: SweepReport::default(),
            log: Vec::new(),
            config,
            catalog,
        })
    }

    /// Applies this frame's key presses, moves monsters, refreshes the interactive
    /// highlight and sweeps.
    pub fn tick(&mut self, keys_pressed: &[KeyCode]) {
        let step = self.map.tiles().tile_size() as f32;
        for key in keys_pressed {
            match key {
                KeyCode::Left => self.probe = self.probe + PixelPoint::new(-step, 0.0),
                KeyCode::Right => self.probe = self.probe + PixelPoint::new(step, 0.0),
                KeyCode::Up => self.probe = self.probe + PixelPoint::new(0.0, -step),
                KeyCode::Down => self.probe = self.probe + PixelPoint::new(0.0, step),
                KeyCode::E => self.interact(),
                KeyCode::K => self.kill_nearest_monster(),
                KeyCode::R => {
                    let seed = self.map.run_seed().wrapping_add(1);
                    self.load_level(seed, self.map.level());
                }
                KeyCode::N => self.load_level(self.map.run_seed(), self.map.stairs().target_level),
                _ => {}
            }
        }

        let aggro = AGGRO_TILES * step;
        self.map.move_monsters(self.probe, &mut |monster: &mut Monster, probe: PixelPoint| {
            if monster.pos.distance(probe) < aggro {
                let dx = (probe.x - monster.pos.x).clamp(-1.0, 1.0);
                let dy = (probe.y - monster.pos.y).clamp(-1.0, 1.0);
                monster.pos = monster.pos + PixelPoint::new(dx, dy);
            }
        });
        self.selected = self.map.update_interactive(self.probe);
        self.last_sweep = self.map.sweep_transient_entities();
    }

    fn interact(&mut self) {
        let in_reach = self
            .map
            .interactive(self.selected)
            .is_some_and(|target| target.interact_state().can_interact);
        if !in_reach {
            return;
        }
        match self.selected {
            InteractiveRef::Chest(id) => {
                if let Some(weapon) = self.map.open_chest(id) {
                    self.push_log(format!("Chest opened: {}", weapon.name));
                }
            }
            InteractiveRef::Weapon(id) => {
                if let Some(weapon) = self.map.request_pickup(id) {
                    self.push_log(format!("Picked up {} (+{})", weapon.name, weapon.attack_bonus));
                }
            }
            InteractiveRef::Stairs => {
                self.load_level(self.map.run_seed(), self.map.stairs().target_level);
            }
        }
    }

    fn kill_nearest_monster(&mut self) {
        let nearest = self
            .map
            .monsters()
            .filter(|monster| !monster.is_dead())
            .min_by(|a, b| a.pos.distance(self.probe).total_cmp(&b.pos.distance(self.probe)))
            .map(|monster| (monster.id(), monster.name.clone()));
        if let Some((id, name)) = nearest
            && self.map.mark_dead(id)
        {
            self.push_log(format!("{name} slain"));
        }
    }

    fn load_level(&mut self, run_seed: u64, level: u32) {
        match build_level(&self.config, run_seed, level, &mut self.catalog) {
            Ok(map) => {
                self.probe = map.player_spawn();
                self.selected = InteractiveRef::Stairs;
                self.map = map;
                self.push_log(format!("Entered level {level} (seed {run_seed})"));
            }
            Err(err) => {
                warn!(run_seed, level, error = %err, "could not build level");
                self.push_log(format!("Level {level} failed: {err}"));
            }
        }
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.remove(0);
        }
        self.log.push(line);
    }
}

fn build_level(
    config: &GenerationConfig,
    run_seed: u64,
    level: u32,
    catalog: &mut Bestiary,
) -> Result<LevelMap, GenerationError> {
    let mut map = LevelMap::generate_retrying(
        config.clone(),
        MAP_WIDTH,
        MAP_HEIGHT,
        level,
        run_seed,
        DEFAULT_GENERATION_ATTEMPTS,
    )?;
    map.populate(catalog);
    info!(run_seed, level, hash = map.layout_hash(), "viewer loaded level");
    Ok(map)
}
