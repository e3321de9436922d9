//! Rendering of the level as coloured tiles plus a status panel.

use app::app_loop::ViewerSession;
use app::{format_layout_hash, format_seed};
use dungeon::{Interactive, InteractiveRef, PixelPoint};
use macroquad::prelude::*;

const HUD_HEIGHT: f32 = 170.0;
const FLOOR_COLOR: Color = Color { r: 0.16, g: 0.16, b: 0.19, a: 1.0 };
const WALL_COLOR: Color = Color { r: 0.45, g: 0.42, b: 0.38, a: 1.0 };
const HIGHLIGHT_COLOR: Color = YELLOW;
const RARITY_COLORS: [Color; 5] = [RED, ORANGE, PINK, PURPLE, MAROON];

/// Largest uniform scale fitting `content` pixels inside `available` pixels.
pub fn fit_scale(content: (f32, f32), available: (f32, f32)) -> f32 {
    if content.0 <= 0.0 || content.1 <= 0.0 {
        return 1.0;
    }
    (available.0 / content.0).min(available.1 / content.1).max(0.05)
}

struct Viewport {
    scale: f32,
    tile: f32,
}

impl Viewport {
    /// Walls may sit one tile outside the map, so everything shifts by one tile.
    fn to_screen(&self, pos: PixelPoint) -> (f32, f32) {
        ((pos.x + self.tile) * self.scale, (pos.y + self.tile) * self.scale)
    }

    fn cell(&self) -> f32 {
        self.tile * self.scale
    }
}

pub fn draw_frame(session: &ViewerSession) {
    let map = &session.map;
    let tile = map.tiles().tile_size() as f32;
    let content = (
        (map.layout().width as f32 + 2.0) * tile,
        (map.layout().height as f32 + 2.0) * tile,
    );
    let viewport = Viewport {
        scale: fit_scale(content, (screen_width(), screen_height() - HUD_HEIGHT)),
        tile,
    };
    let cell = viewport.cell();

    for floor in map.floors() {
        let (x, y) = viewport.to_screen(floor.pixel);
        draw_rectangle(x, y, cell, cell, FLOOR_COLOR);
    }
    for wall in map.walls() {
        let (x, y) = viewport.to_screen(wall.pixel);
        draw_rectangle(x, y, cell, cell, WALL_COLOR);
    }

    for chest in map.chests() {
        let color = if chest.is_opened() { BROWN } else { GOLD };
        draw_marker(&viewport, chest.pos, color, chest.interact_state().highlighted);
    }
    for weapon in map.ground_weapons() {
        draw_marker(&viewport, weapon.pos, SKYBLUE, weapon.interact_state().highlighted);
    }
    let stairs = map.stairs();
    draw_marker(&viewport, stairs.pos, GREEN, stairs.interact_state().highlighted);

    for monster in map.monsters() {
        let index = (monster.rarity.saturating_sub(1) as usize).min(RARITY_COLORS.len() - 1);
        let (x, y) = viewport.to_screen(monster.pos);
        draw_circle(x + cell / 2.0, y + cell / 2.0, cell * 0.4, RARITY_COLORS[index]);
    }

    let (px, py) = viewport.to_screen(session.probe);
    draw_circle(px + cell / 2.0, py + cell / 2.0, cell * 0.45, WHITE);

    draw_hud(session, screen_height() - HUD_HEIGHT);
}

fn draw_marker(viewport: &Viewport, pos: PixelPoint, color: Color, highlighted: bool) {
    let (x, y) = viewport.to_screen(pos);
    let cell = viewport.cell();
    draw_rectangle(x + cell * 0.15, y + cell * 0.15, cell * 0.7, cell * 0.7, color);
    if highlighted {
        draw_rectangle_lines(x, y, cell, cell, 2.0, HIGHLIGHT_COLOR);
    }
}

fn draw_hud(session: &ViewerSession, top: f32) {
    let map = &session.map;
    let selected = match session.selected {
        InteractiveRef::Chest(_) => "chest",
        InteractiveRef::Weapon(_) => "weapon",
        InteractiveRef::Stairs => "stairs",
    };
    let lines = [
        format!(
            "Seed {}  Level {}  Layout {}",
            format_seed(map.run_seed()),
            map.level(),
            format_layout_hash(map.layout_hash())
        ),
        format!(
            "Rooms {}  Monsters {}  Chests {}  Weapons {}  Selected: {selected}",
            map.rooms().len(),
            map.monsters().count(),
            map.chests().count(),
            map.ground_weapons().count()
        ),
        "Arrows move  E interact  K kill nearest  R reroll  N descend".to_string(),
    ];
    let mut y = top + 24.0;
    for line in lines.iter().chain(session.log.iter().rev().take(4)) {
        draw_text(line, 16.0, y, 20.0, LIGHTGRAY);
        y += 22.0;
    }
}

#[cfg(test)]
mod tests {
    use super::fit_scale;

    #[test]
    fn fit_scale_keeps_the_aspect_ratio_inside_the_window() {
        assert_eq!(fit_scale((1000.0, 500.0), (500.0, 500.0)), 0.5);
        assert_eq!(fit_scale((100.0, 400.0), (500.0, 200.0)), 0.5);
        assert_eq!(fit_scale((0.0, 400.0), (500.0, 200.0)), 1.0);
    }
}
