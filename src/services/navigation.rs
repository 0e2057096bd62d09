use tracing::debug;

use crate::game_engine::GameEngine;
use crate::io::OutputWriter;
use crate::models::constants::CellContent;
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::Direction;
use crate::services::interaction::interact;

/// Try to move the ship one cell in `direction`.
///
/// # Returns
///
/// * `Ok(true)` if the ship moved; the old cell is cleared and the new one holds the ship
/// * `Ok(false)` if the target refused the ship (asteroid, no fuel, repair rejected)
/// * `Err(OutOfBounds)` if the step leaves the map; nothing changes and no fuel is spent
///
/// Game-over conditions are left to the caller.
pub fn navigate(
    engine: &mut GameEngine,
    direction: Direction,
    output: &mut dyn OutputWriter,
) -> GameResult<bool> {
    let (map, ship) = engine.parts_mut();
    let from = ship.position();
    let target = from.offset(direction.delta());
    let content = map.get(target).ok_or(GameError::OutOfBounds(target))?;

    if !interact(ship, content, target, output) {
        return Ok(false);
    }

    map.set(from, CellContent::Empty)?;
    map.set(target, CellContent::Ship)?;
    debug!(?direction, %from, to = %target, "ship moved");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::navigation_types::MapSize;
    use crate::models::position::Position;
    use crate::models::ship::Ship;
    use crate::models::space_map::SpaceMap;

    /// 3x3 map, ship at (0,0) with the given fuel.
    fn engine_with(fuel: u32, entities: &[(CellContent, i32, i32)]) -> GameEngine {
        let mut map = SpaceMap::new(MapSize::new(3).unwrap());
        for &(content, x, y) in entities {
            map.place(Position::new(x, y), content).unwrap();
        }
        GameEngine::new(map, Ship::new("Odyssey", fuel)).unwrap()
    }

    #[test]
    fn move_east_updates_ship_and_map() {
        let mut engine = engine_with(5, &[]);
        let moved = navigate(&mut engine, Direction::East, &mut MockOutput::new()).unwrap();

        assert!(moved);
        assert_eq!(engine.ship().position(), Position::new(1, 0));
        assert_eq!(engine.ship().fuel(), 4);
        assert_eq!(engine.map().get(Position::ORIGIN), Some(CellContent::Empty));
        assert_eq!(engine.map().get(Position::new(1, 0)), Some(CellContent::Ship));
    }

    #[test]
    fn move_south_goes_down_a_row() {
        let mut engine = engine_with(5, &[]);
        navigate(&mut engine, Direction::South, &mut MockOutput::new()).unwrap();
        assert_eq!(engine.ship().position(), Position::new(0, 1));
        assert_eq!(engine.map().get(Position::new(0, 1)), Some(CellContent::Ship));
    }

    #[test]
    fn leaving_the_map_is_rejected_without_cost() {
        for direction in [Direction::North, Direction::West] {
            let mut engine = engine_with(5, &[]);
            let before_ship = engine.ship().clone();
            let before_map = engine.map().clone();

            let err = navigate(&mut engine, direction, &mut MockOutput::new()).unwrap_err();

            assert!(matches!(err, GameError::OutOfBounds(_)));
            assert_eq!(engine.ship(), &before_ship);
            assert_eq!(engine.map(), &before_map);
        }
    }

    #[test]
    fn blocked_move_leaves_map_alone() {
        let mut engine = engine_with(5, &[(CellContent::Asteroid, 1, 0)]);
        let before_map = engine.map().clone();

        let moved = navigate(&mut engine, Direction::East, &mut MockOutput::new()).unwrap();

        assert!(!moved);
        assert_eq!(engine.map(), &before_map);
        assert_eq!(engine.ship().fuel(), 5);
    }

    #[test]
    fn entering_an_entity_replaces_it_with_the_ship() {
        let mut engine = engine_with(5, &[(CellContent::Mineral, 0, 1)]);
        navigate(&mut engine, Direction::South, &mut MockOutput::new()).unwrap();
        assert_eq!(engine.map().get(Position::new(0, 1)), Some(CellContent::Ship));
        assert_eq!(engine.map().count(CellContent::Mineral), 0);
        assert_eq!(engine.ship().minerals(), 1);
    }
}
