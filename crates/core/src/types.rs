use slotmap::new_key_type;

new_key_type! {
    pub struct MonsterId;
    pub struct ChestId;
    pub struct WeaponId;
}

/// Interactive object selected by a proximity query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractiveRef {
    Chest(ChestId),
    Weapon(WeaponId),
    Stairs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelEvent {
    LevelGenerated { level: u32, rooms: usize, floors: usize, walls: usize },
    MonstersSpawned { count: usize },
    ChestsPlaced { count: usize },
    MonsterSlain { monster: MonsterId },
    ChestOpened { chest: ChestId },
    WeaponDropRequested { weapon: &'static str },
    WeaponPickedUp { weapon: WeaponId },
    Swept { monsters_removed: usize, weapons_removed: usize, weapons_added: usize },
}
