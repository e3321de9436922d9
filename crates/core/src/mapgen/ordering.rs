//! Greedy nearest-neighbour ordering of rooms into a single traversal path.

use super::room::Room;

/// Reorders rooms into a path: the first accepted room leads, then each step appends the
/// remaining room whose center is nearest to the last appended one. This is an
/// approximation of a shortest Hamiltonian path, not an optimal one.
pub fn sort_rooms(rooms: Vec<Room>) -> Vec<Room> {
    let mut remaining = rooms;
    if remaining.is_empty() {
        return remaining;
    }

    let mut sorted = Vec::with_capacity(remaining.len());
    sorted.push(remaining.remove(0));
    while let Some(&last) = sorted.last() {
        let Some(next_index) = last.nearest_index(&remaining) else {
            break;
        };
        sorted.push(remaining.remove(next_index));
    }
    sorted
}
