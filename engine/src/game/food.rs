use crate::session_rng::SessionRng;

use super::types::GridPosition;

/// Picks a food cell uniformly from the interior of the grid, one cell in
/// from every wall. The snake body is not consulted: food can land on an
/// occupied cell and stays reachable once the body moves on.
pub fn spawn_food(rng: &mut SessionRng, tile_count: i32) -> GridPosition {
    let half = tile_count / 2;
    let x = rng.random_range(0..tile_count - 2) - half + 1;
    let z = rng.random_range(0..tile_count - 2) - half + 1;
    GridPosition::new(x, z)
}
