use super::*;
use crate::content::{Armory, Bestiary};
use crate::interactive::InteractState;

fn eager_config() -> GenerationConfig {
    GenerationConfig { monster_chance: 1, chest_chance: 1, weapon_drop_chance: 1, ..Default::default() }
}

/// First seed whose level has at least three rooms, so interior rooms exist.
fn busy_level(config: GenerationConfig) -> LevelMap {
    (0..64)
        .map(|seed| LevelMap::generate(config.clone(), 80, 60, 3, seed).expect("generate"))
        .find(|level| level.rooms().len() >= 3)
        .expect("an 80x60 map should fit three rooms for some seed")
}

fn far_from_stairs(level: &LevelMap) -> PixelPoint {
    level.stairs().pos + PixelPoint::new(10_000.0, 0.0)
}

#[test]
fn generation_places_spawn_and_stairs_at_room_centers() {
    let level = LevelMap::generate(GenerationConfig::default(), 60, 45, 4, 77).expect("generate");
    let tile = level.config().tile_size;
    let first = level.rooms().first().expect("first room");
    let last = level.rooms().last().expect("last room");

    assert_eq!(level.player_spawn(), first.center().to_pixel(tile));
    assert_eq!(level.stairs().pos, last.center().to_pixel(tile));
    assert_eq!(level.stairs().target_level, 5);
    assert_eq!(level.bridges().len(), level.rooms().len() - 1);
    assert_eq!(level.floors().len(), level.layout().floors.len());
    assert!(matches!(level.events(), [LevelEvent::LevelGenerated { level: 4, .. }]));
}

#[test]
fn same_seed_and_level_reproduce_the_layout() {
    let left = LevelMap::generate(GenerationConfig::default(), 60, 45, 2, 1234).expect("left");
    let right = LevelMap::generate(GenerationConfig::default(), 60, 45, 2, 1234).expect("right");
    assert_eq!(left.layout(), right.layout());
    assert_eq!(left.layout_hash(), right.layout_hash());

    let deeper = LevelMap::generate(GenerationConfig::default(), 60, 45, 3, 1234).expect("deeper");
    assert_ne!(left.layout_hash(), deeper.layout_hash());
}

#[test]
fn single_room_level_shares_spawn_and_stairs() {
    let mut level = LevelMap::generate(eager_config(), 21, 21, 1, 5).expect("generate");
    assert_eq!(level.rooms().len(), 1);
    assert!(level.bridges().is_empty());
    assert_eq!(level.player_spawn(), level.stairs().pos);

    level.populate(&mut Bestiary::default());
    assert_eq!(level.monsters().count(), 0);
    assert_eq!(level.chests().count(), 0);
}

#[test]
fn spawning_replaces_the_previous_monsters() {
    let mut level = busy_level(eager_config());
    let mut bestiary = Bestiary::default();
    let first = level.spawn_monsters(&mut bestiary);
    let expected: i32 = level.rooms()[1..].iter().map(Room::width).sum();
    assert_eq!(first, expected as usize);

    let second = level.spawn_monsters(&mut bestiary);
    assert_eq!(second, first);
    assert_eq!(level.monsters().count(), second);
    for monster in level.monsters() {
        assert_eq!(level.monster(monster.id()).map(Monster::id), Some(monster.id()));
        assert!(!level.rooms()[0].contains(monster.pos.to_grid(level.config().tile_size)));
    }
}

#[test]
fn chests_fill_interior_rooms_only() {
    let mut level = busy_level(eager_config());
    let count = level.gen_interactive();
    let tile = level.config().tile_size;
    let interior = &level.rooms()[1..level.rooms().len() - 1];

    assert!(count <= interior.len());
    for chest in level.chests() {
        assert!(interior.iter().any(|room| room.center().to_pixel(tile) == chest.pos));
        assert_ne!(chest.pos, level.stairs().pos);
    }
}

#[test]
fn closest_weapon_is_the_nearest_one_not_the_last_one() {
    let mut level = busy_level(GenerationConfig::default());
    let player = far_from_stairs(&level);
    let weapon = Armory::weapons()[0];
    for dx in [50.0, 10.0, 30.0] {
        level.request_drop(weapon, player + PixelPoint::new(dx, 0.0));
    }
    assert_eq!(level.sweep_transient_entities().weapons_added, 3);

    let InteractiveRef::Weapon(id) = level.closest_interactive(player) else {
        panic!("a weapon should be closer than the stairs");
    };
    assert_eq!(level.ground_weapon(id).map(|w| w.pos), Some(player + PixelPoint::new(10.0, 0.0)));
}

#[test]
fn stairs_win_when_nothing_else_is_on_the_map() {
    let mut level = busy_level(GenerationConfig::default());
    let at_stairs = level.stairs().pos;
    assert_eq!(level.update_interactive(at_stairs), InteractiveRef::Stairs);
    assert_eq!(level.stairs().interact_state(), InteractState { highlighted: true, can_interact: true });

    level.update_interactive(far_from_stairs(&level));
    assert_eq!(level.stairs().interact_state(), InteractState { highlighted: true, can_interact: false });
}

#[test]
fn update_interactive_highlights_exactly_one_object() {
    let mut level = busy_level(eager_config());
    level.gen_interactive();
    let player = far_from_stairs(&level);
    level.request_drop(Armory::weapons()[0], player + PixelPoint::new(4.0, 0.0));
    level.request_drop(Armory::weapons()[0], player + PixelPoint::new(400.0, 0.0));
    level.sweep_transient_entities();

    let selected = level.update_interactive(player);
    assert!(matches!(selected, InteractiveRef::Weapon(_)));
    let highlighted = level
        .chests()
        .map(|chest| chest.interact_state())
        .chain(level.ground_weapons().map(|weapon| weapon.interact_state()))
        .chain([level.stairs().interact_state()])
        .filter(|state| state.highlighted)
        .count();
    assert_eq!(highlighted, 1);
    let chosen = level.interactive(selected).expect("selected object exists");
    assert!(chosen.interact_state().can_interact);
}

#[test]
fn opening_a_chest_drops_loot_at_the_next_sweep() {
    let config = eager_config();
    let mut level = (0..64)
        .map(|seed| {
            let mut level = LevelMap::generate(config.clone(), 100, 80, 3, seed).expect("generate");
            level.gen_interactive();
            level
        })
        .find(|level| level.chests().count() > 0)
        .expect("some seed should place a chest");
    let chest = level.chests().next().map(|chest| (chest.id, chest.pos)).expect("chest");

    let loot = level.open_chest(chest.0).expect("first open yields loot");
    assert!(loot.min_level <= 3);
    assert_eq!(level.open_chest(chest.0), None);
    assert_eq!(level.ground_weapons().count(), 0);
    assert_eq!(level.pending_drops().len(), 1);

    let report = level.sweep_transient_entities();
    assert_eq!(report.weapons_added, 1);
    let dropped = level.ground_weapons().next().expect("loot on the ground");
    assert_eq!((dropped.pos, dropped.weapon), (chest.1, loot));
    assert_ne!(level.closest_interactive(chest.1), InteractiveRef::Chest(chest.0));
    assert!(level.chest(chest.0).is_some_and(Chest::is_opened));
}

#[test]
fn picked_up_weapons_linger_until_the_sweep() {
    let mut level = busy_level(GenerationConfig::default());
    let player = far_from_stairs(&level);
    let weapon = Armory::weapons()[1];
    level.request_drop(weapon, player);
    level.sweep_transient_entities();
    let id = level.ground_weapons().next().map(|w| w.id).expect("dropped weapon");

    assert_eq!(level.request_pickup(id), Some(weapon));
    assert_eq!(level.request_pickup(id), None);
    assert!(level.ground_weapon(id).is_some_and(GroundWeapon::is_picked_up));
    assert_eq!(level.closest_interactive(player), InteractiveRef::Stairs);

    let report = level.sweep_transient_entities();
    assert_eq!(report, SweepReport { monsters_removed: 0, weapons_removed: 1, weapons_added: 0 });
    assert!(level.ground_weapon(id).is_none());
}

#[test]
fn dead_monsters_are_removed_by_the_sweep_and_drop_weapons() {
    let mut level = busy_level(eager_config());
    level.spawn_monsters(&mut Bestiary::default());
    let total = level.monsters().count();
    let (victim, pos) = level.monsters().next().map(|m| (m.id(), m.pos)).expect("monster");

    assert!(level.mark_dead(victim));
    assert!(!level.mark_dead(victim));
    assert_eq!(level.monsters().count(), total);
    assert!(level.monster(victim).is_some_and(Monster::is_dead));

    let report = level.sweep_transient_entities();
    assert_eq!(report.monsters_removed, 1);
    assert_eq!(report.weapons_added, 1);
    assert!(level.monster(victim).is_none());
    assert_eq!(level.ground_weapons().map(|w| w.pos).collect::<Vec<_>>(), vec![pos]);
    assert!(level.events().contains(&LevelEvent::MonsterSlain { monster: victim }));
}

#[test]
fn controllers_only_move_living_monsters() {
    let mut level = busy_level(eager_config());
    level.spawn_monsters(&mut Bestiary::default());
    let victim = level.monsters().next().map(|m| m.id()).expect("monster");
    let before = level.monster(victim).map(|m| m.pos);
    level.mark_dead(victim);

    let target = PixelPoint::new(-1.0, -1.0);
    level.move_monsters(target, &mut |monster: &mut Monster, player: PixelPoint| monster.pos = player);
    assert_eq!(level.monster(victim).map(|m| m.pos), before);
    assert!(level.monsters().filter(|m| !m.is_dead()).all(|m| m.pos == target));
    for monster in level.monsters() {
        assert_eq!(level.monster(monster.id()).map(Monster::id), Some(monster.id()));
    }
}

#[test]
fn quiet_sweep_reports_nothing_and_logs_nothing() {
    let mut level = busy_level(GenerationConfig::default());
    let events = level.events().len();
    assert!(level.sweep_transient_entities().is_empty());
    assert_eq!(level.events().len(), events);
}

#[test]
fn retrying_succeeds_on_the_first_valid_seed() {
    let config = GenerationConfig::default();
    let direct = LevelMap::generate(config.clone(), 60, 45, 1, 9).expect("direct");
    let retried =
        LevelMap::generate_retrying(config, 60, 45, 1, 9, DEFAULT_GENERATION_ATTEMPTS).expect("retried");
    assert_eq!(direct.layout_hash(), retried.layout_hash());
}

#[test]
fn retrying_does_not_retry_a_map_that_is_too_small() {
    let result = LevelMap::generate_retrying(GenerationConfig::default(), 10, 45, 1, 9, 4);
    assert!(matches!(result, Err(GenerationError::MapTooSmall { width: 10, .. })));
}

#[test]
fn generating_a_map_beyond_grid_coordinates_fails_cleanly() {
    let result = LevelMap::generate(GenerationConfig::default(), u32::MAX, 50, 1, 1);
    assert!(matches!(result, Err(GenerationError::MapTooLarge { width: u32::MAX, height: 50 })));
}

#[test]
fn empty_placements_are_retried_with_the_next_seeds() {
    let mut seen = Vec::new();
    let result = retry_seeds(40, 5, |seed| {
        seen.push(seed);
        if seed < 42 { Err(GenerationError::NoRoomsPlaced { trials: 1 }) } else { Ok(seed) }
    });
    assert_eq!(result.ok(), Some(42));
    assert_eq!(seen, vec![40, 41, 42]);
}

#[test]
fn retries_stop_after_the_last_attempt() {
    let mut calls = 0;
    let result: Result<(), _> = retry_seeds(u64::MAX, 3, |_| {
        calls += 1;
        Err(GenerationError::NoRoomsPlaced { trials: 1 })
    });
    assert!(matches!(result, Err(GenerationError::NoRoomsPlaced { .. })));
    assert_eq!(calls, 3);

    let mut calls = 0;
    let result: Result<(), _> = retry_seeds(0, 0, |_| {
        calls += 1;
        Err(GenerationError::MapTooLarge { width: 1, height: 1 })
    });
    assert!(result.is_err());
    assert_eq!(calls, 1);
}
