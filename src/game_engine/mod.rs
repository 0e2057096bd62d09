//! Game state machine
//!
//! Owns the space map and the ship for one session and decides when the
//! session is over. Construction goes through [`SessionBuilder`], which
//! stands for the configuring phase; a built engine starts `Active`.

mod builder;

pub use builder::SessionBuilder;

use tracing::{info, warn};

use crate::models::constants::CellContent;
use crate::models::errors::GameResult;
use crate::models::ship::Ship;
use crate::models::space_map::SpaceMap;

/// Core game engine that manages game state and win/loss conditions
#[derive(Debug)]
pub struct GameEngine {
    map: SpaceMap,
    ship: Ship,
    state: GameState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
    Lost { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    OutOfFuel,
    OutOfHealth,
    SelfDestructed,
}

impl GameEngine {
    /// Start a session with `ship` on `map`. The ship's cell is marked with the ship symbol.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the ship is not on the map.
    pub fn new(mut map: SpaceMap, ship: Ship) -> GameResult<Self> {
        map.set(ship.position(), CellContent::Ship)?;
        info!(
            ship = ship.name(),
            fuel = ship.fuel(),
            size = map.width(),
            "session started"
        );
        Ok(Self {
            map,
            ship,
            state: GameState::Active,
        })
    }

    pub fn map(&self) -> &SpaceMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut SpaceMap {
        &mut self.map
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Both halves at once, for operations that update the ship and the map together.
    pub fn parts_mut(&mut self) -> (&mut SpaceMap, &mut Ship) {
        (&mut self.map, &mut self.ship)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Won or Lost)
    /// * `None` if the game is still in progress
    ///
    /// Conditions are checked in order: destination reached, out of fuel, out of health.
    /// The first that holds wins, so reaching the destination on the last unit of fuel
    /// is a win. The ship's cell is overwritten with `W` or `L`.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Active {
            return Some(self.state.clone());
        }

        let state = if self.ship.destination_reached() {
            GameState::Won
        } else if self.ship.is_out_of_fuel() {
            GameState::Lost {
                reason: DefeatReason::OutOfFuel,
            }
        } else if self.ship.is_out_of_health() {
            GameState::Lost {
                reason: DefeatReason::OutOfHealth,
            }
        } else {
            return None;
        };

        self.finish(state);
        Some(self.state.clone())
    }

    /// End the session at the player's request, regardless of fuel or health.
    pub fn self_destruct(&mut self) -> GameState {
        if self.is_active() {
            self.finish(GameState::Lost {
                reason: DefeatReason::SelfDestructed,
            });
        }
        self.state.clone()
    }

    fn finish(&mut self, state: GameState) {
        let marker = match state {
            GameState::Won => CellContent::Win,
            _ => CellContent::Loss,
        };
        if let Err(err) = self.map.set(self.ship.position(), marker) {
            warn!(%err, position = %self.ship.position(), "ship is off the map");
        }
        info!(?state, position = %self.ship.position(), "session over");
        self.state = state;
    }
}

impl GameState {
    pub fn defeat_reason(&self) -> Option<DefeatReason> {
        match self {
            GameState::Lost { reason } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::GameError;
    use crate::models::navigation_types::MapSize;
    use crate::models::position::Position;

    fn engine(fuel: u32) -> GameEngine {
        let map = SpaceMap::new(MapSize::new(3).unwrap());
        GameEngine::new(map, Ship::new("Odyssey", fuel)).unwrap()
    }

    #[test]
    fn new_engine_marks_ship_and_is_active() {
        let mut e = engine(5);
        assert!(e.is_active());
        assert_eq!(e.map().get(Position::ORIGIN), Some(CellContent::Ship));
        assert_eq!(e.check_game_over(), None);
        assert!(e.is_active());
    }

    #[test]
    fn ship_off_the_map_is_rejected() {
        let map = SpaceMap::new(MapSize::new(2).unwrap());
        let mut ship = Ship::new("Odyssey", 5);
        ship.move_to(Position::new(4, 4));
        assert!(matches!(
            GameEngine::new(map, ship),
            Err(GameError::OutOfBounds(_))
        ));
    }

    #[test]
    fn destination_beats_empty_tank() {
        let mut e = engine(1);
        e.ship_mut().land_at_destination();
        e.ship_mut().set_fuel(0);
        assert_eq!(e.check_game_over(), Some(GameState::Won));
        assert_eq!(e.map().get(Position::ORIGIN), Some(CellContent::Win));
    }

    #[test]
    fn fuel_checked_before_health() {
        let mut e = engine(1);
        e.ship_mut().set_fuel(0);
        e.ship_mut().set_health(0);
        assert_eq!(
            e.check_game_over(),
            Some(GameState::Lost {
                reason: DefeatReason::OutOfFuel
            })
        );
        assert_eq!(e.map().get(Position::ORIGIN), Some(CellContent::Loss));
    }

    #[test]
    fn no_health_is_a_loss() {
        let mut e = engine(4);
        e.ship_mut().set_health(0);
        assert_eq!(
            e.check_game_over(),
            Some(GameState::Lost {
                reason: DefeatReason::OutOfHealth
            })
        );
    }

    #[test]
    fn state_persists_after_game_over() {
        let mut e = engine(1);
        e.ship_mut().set_fuel(0);
        let first = e.check_game_over();
        e.ship_mut().land_at_destination();
        assert_eq!(e.check_game_over(), first);
        assert!(!e.is_active());
    }

    #[test]
    fn self_destruct_ignores_resources() {
        let mut e = engine(50);
        assert_eq!(
            e.self_destruct(),
            GameState::Lost {
                reason: DefeatReason::SelfDestructed
            }
        );
        assert_eq!(e.map().get(Position::ORIGIN), Some(CellContent::Loss));
        assert_eq!(e.state().defeat_reason(), Some(DefeatReason::SelfDestructed));
    }
}
