//! Level layout. One string per grid row; `=` marks a wall cell.

use super::{GRID_HEIGHT, GRID_WIDTH, Position};

pub const LEVEL: [&str; GRID_HEIGHT as usize] = [
    "=================",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=               =",
    "=================",
];

/// All wall cells of the layout, in row order.
pub fn wall_cells() -> impl Iterator<Item = Position> {
    LEVEL.iter().enumerate().flat_map(|(y, row)| {
        row.bytes()
            .enumerate()
            .filter(|(_, tile)| *tile == b'=')
            .map(move |(x, _)| Position::new(x as i32, y as i32))
    })
}

/// True when the cell is strictly inside the wall border.
pub fn in_interior(position: Position) -> bool {
    position.x > 0
        && position.x < GRID_WIDTH as i32 - 1
        && position.y > 0
        && position.y < GRID_HEIGHT as i32 - 1
}
