use std::collections::BTreeMap;

use dungeon::{GridPoint, LevelMap};

/// Text rendering of a level, one character per grid cell. Later layers overwrite
/// earlier ones: walls, floors, chests, weapons, monsters, stairs, then the spawn.
pub fn render(map: &LevelMap) -> String {
    let tile = map.tiles().tile_size();
    let mut cells: BTreeMap<GridPoint, char> = BTreeMap::new();
    for wall in map.walls() {
        cells.insert(wall.grid, '#');
    }
    for floor in map.floors() {
        cells.insert(floor.grid, '.');
    }
    for chest in map.chests() {
        cells.insert(chest.pos.to_grid(tile), if chest.is_opened() { 'c' } else { 'C' });
    }
    for weapon in map.ground_weapons() {
        cells.insert(weapon.pos.to_grid(tile), '/');
    }
    for monster in map.monsters() {
        cells.insert(monster.pos.to_grid(tile), 'M');
    }
    cells.insert(map.stairs().pos.to_grid(tile), '>');
    cells.insert(map.player_spawn().to_grid(tile), '@');

    let layout = map.layout();
    let (width, height) = (layout.width as i32, layout.height as i32);
    let mut out = String::with_capacity(((width + 3) * (height + 2)) as usize);
    for y in -1..=height {
        let row: String = (-1..=width)
            .map(|x| cells.get(&GridPoint::new(x, y)).copied().unwrap_or(' '))
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::GenerationConfig;

    #[test]
    fn single_room_renders_spawn_over_stairs_inside_walls() {
        let map = LevelMap::generate(GenerationConfig::default(), 21, 21, 1, 3).expect("level");
        let room = map.rooms()[0];
        let text = render(&map);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 23);
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('>').count(), 0, "spawn shares the stairs cell");
        let top = lines[room.start.y as usize];
        assert!(top.trim().chars().all(|c| c == '#'), "wall row above the room: {top:?}");
        assert_eq!(text.matches('.').count() + 1, (room.width() * room.height()) as usize);
    }
}
