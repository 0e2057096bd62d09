use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use crate::models::constants::CellContent;
use crate::models::errors::{GameError, GameResult};
use crate::models::position::Position;

use super::SpaceMap;

/// Scatter one destination and `per_kind` of each placeable entity over the empty
/// cells of `map`, returning where the destination landed.
/// Leaves the map untouched if there is not enough room.
pub fn scatter(map: &mut SpaceMap, rng: &mut StdRng, per_kind: usize) -> GameResult<Position> {
    let requested = 1 + CellContent::PLACEABLE.len() * per_kind;
    let available = map.empty_cells();
    if requested > available {
        warn!(requested, available, "layout does not fit the map");
        return Err(GameError::LayoutTooDense {
            requested,
            available,
        });
    }

    let destination = find_random_empty_cell(map, rng);
    map.place(destination, CellContent::Destination)?;
    debug!(%destination, "destination scattered");

    for content in CellContent::PLACEABLE {
        for _ in 0..per_kind {
            let pos = find_random_empty_cell(map, rng);
            map.place(pos, content)?;
            debug!(%pos, kind = content.name(), "entity scattered");
        }
    }
    Ok(destination)
}

/// Pick random coordinates until one is empty. Caller guarantees at least one empty cell.
fn find_random_empty_cell(map: &SpaceMap, rng: &mut StdRng) -> Position {
    let width = map.width() as i32;
    let height = map.height() as i32;
    loop {
        let pos = Position {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
        };
        if map.is_empty(pos) {
            return pos;
        }
    }
}
