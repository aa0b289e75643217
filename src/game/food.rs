use super::{Arena, Position};
use rand::Rng;

/// Pick a random block-aligned position for a piece of food.
///
/// Each coordinate is a multiple of the arena's block size, chosen uniformly
/// from the second block up to the last block that fits entirely in the
/// arena; the first row & column are never used.  Cells occupied by the
/// snake are not avoided.
///
/// `arena` must have passed [`Arena::validate()`], as otherwise the range of
/// blocks to choose from may be empty.
pub(crate) fn spawn_food<R: Rng + ?Sized>(rng: &mut R, arena: Arena) -> Position {
    let columns = arena.width / arena.block_size;
    let rows = arena.height / arena.block_size;
    Position::new(
        rng.random_range(1..columns) * arena.block_size,
        rng.random_range(1..rows) * arena.block_size,
    )
}
