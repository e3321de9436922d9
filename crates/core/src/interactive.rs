//! Objects the player can act on: stairs, chests and weapons lying on the ground.

use crate::content::Weapon;
use crate::point::PixelPoint;
use crate::types::{ChestId, WeaponId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractState {
    /// Selected by the closest-interactive query.
    pub highlighted: bool,
    /// Selected and close enough for the player to act on.
    pub can_interact: bool,
}

pub trait Interactive {
    fn position(&self) -> PixelPoint;

    fn interact_state(&self) -> InteractState;

    fn interact_state_mut(&mut self) -> &mut InteractState;

    fn refresh_interact_state(&mut self, player: PixelPoint, is_closest: bool, range: f32) {
        let in_range = self.position().distance(player) <= range;
        let state = self.interact_state_mut();
        state.highlighted = is_closest;
        state.can_interact = is_closest && in_range;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stairs {
    pub pos: PixelPoint,
    /// Level entered when the stairs are taken.
    pub target_level: u32,
    state: InteractState,
}

impl Stairs {
    pub fn new(pos: PixelPoint, target_level: u32) -> Self {
        Self { pos, target_level, state: InteractState::default() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chest {
    pub id: ChestId,
    pub pos: PixelPoint,
    /// Level whose loot table fills this chest.
    pub loot_level: u32,
    pub(crate) opened: bool,
    state: InteractState,
}

impl Chest {
    pub fn new(pos: PixelPoint, loot_level: u32) -> Self {
        Self { id: ChestId::default(), pos, loot_level, opened: false, state: InteractState::default() }
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundWeapon {
    pub id: WeaponId,
    pub weapon: Weapon,
    pub pos: PixelPoint,
    pub(crate) picked_up: bool,
    state: InteractState,
}

impl GroundWeapon {
    pub fn new(weapon: Weapon, pos: PixelPoint) -> Self {
        Self { id: WeaponId::default(), weapon, pos, picked_up: false, state: InteractState::default() }
    }

    /// Flagged for removal at the next sweep.
    pub fn is_picked_up(&self) -> bool {
        self.picked_up
    }
}

macro_rules! impl_interactive {
    ($($ty:ty),+) => {
        $(
            impl Interactive for $ty {
                fn position(&self) -> PixelPoint {
                    self.pos
                }

                fn interact_state(&self) -> InteractState {
                    self.state
                }

                fn interact_state_mut(&mut self) -> &mut InteractState {
                    &mut self.state
                }
            }
        )+
    };
}

impl_interactive!(Stairs, Chest, GroundWeapon);

/// Nearest candidate by Euclidean distance; ties keep the earliest candidate.
pub fn nearest<'a, K, T>(
    player: PixelPoint,
    candidates: impl IntoIterator<Item = (K, &'a T)>,
) -> Option<(K, f32)>
where
    T: Interactive + 'a,
{
    let mut best: Option<(K, f32)> = None;
    for (key, candidate) in candidates {
        let distance = candidate.position().distance(player);
        if best.as_ref().is_none_or(|(_, best_distance)| distance < *best_distance) {
            best = Some((key, distance));
        }
    }
    best
}

/// Chooses between the nearest chest, the nearest weapon and the stairs. Ties favour the
/// chest, then the weapon, then the stairs.
pub fn pick_closest<C, W, S>(chest: Option<(C, f32)>, weapon: Option<(W, f32)>, stairs: (S, f32)) -> Closest<C, W, S> {
    let chest_distance = chest.as_ref().map_or(f32::INFINITY, |(_, distance)| *distance);
    let weapon_distance = weapon.as_ref().map_or(f32::INFINITY, |(_, distance)| *distance);
    let (stairs_key, stairs_distance) = stairs;

    match (chest, weapon) {
        (Some((key, _)), _) if chest_distance <= weapon_distance && chest_distance <= stairs_distance => {
            Closest::Chest(key)
        }
        (_, Some((key, _))) if weapon_distance <= stairs_distance => Closest::Weapon(key),
        _ => Closest::Stairs(stairs_key),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closest<C, W, S> {
    Chest(C),
    Weapon(W),
    Stairs(S),
}
