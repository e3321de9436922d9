pub mod app_loop;
pub mod seed;

pub const APP_NAME: &str = "Dungeon Viewer";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a layout hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_layout_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
