//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const ACTION_KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::E,
    KeyCode::K,
    KeyCode::R,
    KeyCode::N,
];

pub fn capture_frame_input() -> Vec<KeyCode> {
    ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect()
}
