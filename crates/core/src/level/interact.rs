//! Proximity selection between the player and the level's interactive objects.

use super::*;
use crate::interactive::{Closest, InteractState, nearest, pick_closest};

impl LevelMap {
    /// The object the player would act on: the nearest unopened chest, the nearest
    /// ground weapon still lying there, or the stairs.
    pub fn closest_interactive(&self, player: PixelPoint) -> InteractiveRef {
        let chest = nearest(player, self.chests.iter().filter(|(_, chest)| !chest.opened));
        let weapon =
            nearest(player, self.ground_weapons.iter().filter(|(_, weapon)| !weapon.picked_up));
        let stairs = ((), self.stairs.pos.distance(player));

        match pick_closest(chest, weapon, stairs) {
            Closest::Chest(id) => InteractiveRef::Chest(id),
            Closest::Weapon(id) => InteractiveRef::Weapon(id),
            Closest::Stairs(()) => InteractiveRef::Stairs,
        }
    }

    /// Highlights the closest object (interactable when in range) and clears every
    /// other one. Returns the selection.
    pub fn update_interactive(&mut self, player: PixelPoint) -> InteractiveRef {
        let closest = self.closest_interactive(player);
        let range = self.config.interact_range_px();

        for (id, chest) in &mut self.chests {
            if chest.opened {
                *chest.interact_state_mut() = InteractState::default();
            } else {
                chest.refresh_interact_state(player, closest == InteractiveRef::Chest(id), range);
            }
        }
        for (id, weapon) in &mut self.ground_weapons {
            if weapon.picked_up {
                *weapon.interact_state_mut() = InteractState::default();
            } else {
                weapon.refresh_interact_state(player, closest == InteractiveRef::Weapon(id), range);
            }
        }
        self.stairs.refresh_interact_state(player, closest == InteractiveRef::Stairs, range);
        closest
    }
}
