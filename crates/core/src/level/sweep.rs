//! End-of-tick garbage collection of monsters and ground weapons.

use std::mem;

use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub monsters_removed: usize,
    pub weapons_removed: usize,
    pub weapons_added: usize,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl LevelMap {
    /// Removes dead monsters and taken weapons, then lays down queued drops. Call once
    /// per logical tick.
    pub fn sweep_transient_entities(&mut self) -> SweepReport {
        let monsters_before = self.monsters.len();
        self.monsters.retain(|_, monster| !monster.dead);
        let monsters_removed = monsters_before - self.monsters.len();

        let weapons_before = self.ground_weapons.len();
        self.ground_weapons.retain(|_, weapon| !weapon.picked_up);
        let weapons_removed = weapons_before - self.ground_weapons.len();

        let drops = mem::take(&mut self.pending_drops);
        let weapons_added = drops.len();
        for ground in drops {
            let id = self.ground_weapons.insert(ground);
            self.ground_weapons[id].id = id;
        }

        let report = SweepReport { monsters_removed, weapons_removed, weapons_added };
        if !report.is_empty() {
            self.events.push(LevelEvent::Swept {
                monsters_removed: report.monsters_removed,
                weapons_removed: report.weapons_removed,
                weapons_added: report.weapons_added,
            });
        }
        report
    }
}
