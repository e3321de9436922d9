//! Requests from the game loop. Each one only flags or queues; the sweep applies them.

use super::*;
use crate::content::Armory;
use crate::interactive::InteractState;

impl LevelMap {
    /// Flags a living monster dead and may queue a weapon drop where it fell. Returns
    /// false for unknown or already dead monsters.
    pub fn mark_dead(&mut self, id: MonsterId) -> bool {
        let Some(monster) = self.monsters.get_mut(id) else {
            return false;
        };
        if monster.dead {
            return false;
        }
        monster.dead = true;
        let pos = monster.pos;
        self.events.push(LevelEvent::MonsterSlain { monster: id });

        if self.rng.one_in(self.config.weapon_drop_chance) {
            let weapon = Armory::roll(self.level, &mut self.rng);
            self.queue_drop(weapon, pos);
        }
        true
    }

    /// Queues `weapon` to appear on the ground at `pos` at the next sweep.
    pub fn request_drop(&mut self, weapon: Weapon, pos: PixelPoint) {
        self.queue_drop(weapon, pos);
    }

    /// Takes a ground weapon. The weapon stays visible until the next sweep but can no
    /// longer be selected or taken again.
    pub fn request_pickup(&mut self, id: WeaponId) -> Option<Weapon> {
        let ground = self.ground_weapons.get_mut(id)?;
        if ground.picked_up {
            return None;
        }
        ground.picked_up = true;
        *ground.interact_state_mut() = InteractState::default();
        let weapon = ground.weapon;
        self.events.push(LevelEvent::WeaponPickedUp { weapon: id });
        Some(weapon)
    }

    /// Opens a chest and queues its loot at the chest's position.
    pub fn open_chest(&mut self, id: ChestId) -> Option<Weapon> {
        let chest = self.chests.get_mut(id)?;
        if chest.opened {
            return None;
        }
        chest.opened = true;
        *chest.interact_state_mut() = InteractState::default();
        let (pos, loot_level) = (chest.pos, chest.loot_level);

        let weapon = Armory::roll(loot_level, &mut self.rng);
        self.events.push(LevelEvent::ChestOpened { chest: id });
        self.queue_drop(weapon, pos);
        Some(weapon)
    }
}
