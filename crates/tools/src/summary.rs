use serde::Serialize;

use dungeon::{GridPoint, LayoutViolation, LevelMap, Room};

#[derive(Serialize)]
pub struct LevelSummary<'a> {
    pub run_seed: u64,
    pub level_seed: u64,
    pub level: u32,
    pub width: u32,
    pub height: u32,
    pub layout_hash: String,
    pub rooms: &'a [Room],
    pub bridges: Vec<BridgeSummary>,
    pub floor_count: usize,
    pub wall_count: usize,
    pub spawn: GridPoint,
    pub stairs: GridPoint,
    pub monsters: Vec<MonsterSummary<'a>>,
    pub chests: Vec<GridPoint>,
    pub violations: Vec<String>,
}

#[derive(Serialize)]
pub struct BridgeSummary {
    pub from: usize,
    pub to: usize,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MonsterSummary<'a> {
    pub name: &'a str,
    pub rarity: u32,
    pub at: GridPoint,
}

impl<'a> LevelSummary<'a> {
    pub fn new(map: &'a LevelMap, violations: &[LayoutViolation]) -> Self {
        let tile = map.tiles().tile_size();
        Self {
            run_seed: map.run_seed(),
            level_seed: map.seed(),
            level: map.level(),
            width: map.layout().width,
            height: map.layout().height,
            layout_hash: format!("{:016x}", map.layout_hash()),
            rooms: map.rooms(),
            bridges: map
                .bridges()
                .iter()
                .map(|bridge| BridgeSummary { from: bridge.from, to: bridge.to, length: bridge.points.len() })
                .collect(),
            floor_count: map.floors().len(),
            wall_count: map.walls().len(),
            spawn: map.player_spawn().to_grid(tile),
            stairs: map.stairs().pos.to_grid(tile),
            monsters: map
                .monsters()
                .map(|monster| MonsterSummary {
                    name: &monster.name,
                    rarity: monster.rarity,
                    at: monster.pos.to_grid(tile),
                })
                .collect(),
            chests: map.chests().map(|chest| chest.pos.to_grid(tile)).collect(),
            violations: violations.iter().map(ToString::to_string).collect(),
        }
    }
}
