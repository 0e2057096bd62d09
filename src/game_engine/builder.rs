use rand::rngs::StdRng;
use tracing::debug;

use crate::models::constants::CellContent;
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::{FuelLevel, MapSize, ShipName};
use crate::models::position::Position;
use crate::models::ship::Ship;
use crate::models::space_map::{generation, SpaceMap};

use super::GameEngine;

/// Collects a validated session configuration: map, destination, entities, ship.
///
/// The ship always starts at (0, 0), so its cell is taken from the moment the
/// map exists and nothing can be placed on top of it.
#[derive(Debug)]
pub struct SessionBuilder {
    map: SpaceMap,
    destination: Option<Position>,
    ship: Option<Ship>,
}

impl SessionBuilder {
    pub fn new(size: MapSize) -> Self {
        let mut map = SpaceMap::new(size);
        map.set_origin(CellContent::Ship);
        Self {
            map,
            destination: None,
            ship: None,
        }
    }

    pub fn map(&self) -> &SpaceMap {
        &self.map
    }

    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    /// Place the single destination on an empty cell.
    pub fn place_destination(&mut self, pos: Position) -> GameResult<()> {
        if self.destination.is_some() {
            return Err(GameError::NotPlaceable(CellContent::Destination.symbol()));
        }
        self.map.place(pos, CellContent::Destination)?;
        debug!(%pos, "destination placed");
        self.destination = Some(pos);
        Ok(())
    }

    /// Place a hazard or waypoint on an empty cell.
    pub fn place_entity(&mut self, content: CellContent, pos: Position) -> GameResult<()> {
        if !content.is_placeable() {
            return Err(GameError::NotPlaceable(content.symbol()));
        }
        self.map.place(pos, content)?;
        debug!(%pos, kind = content.name(), "entity placed");
        Ok(())
    }

    /// Randomly place the destination and `per_kind` of each hazard/waypoint.
    pub fn scatter(&mut self, rng: &mut StdRng, per_kind: usize) -> GameResult<()> {
        if self.destination.is_some() {
            return Err(GameError::NotPlaceable(CellContent::Destination.symbol()));
        }
        self.destination = Some(generation::scatter(&mut self.map, rng, per_kind)?);
        Ok(())
    }

    /// Record the ship's name and starting fuel.
    pub fn ship(&mut self, name: ShipName, fuel: FuelLevel) {
        self.ship = Some(Ship::new(name.into_inner(), fuel.value()));
    }

    pub fn build(self) -> GameResult<GameEngine> {
        if self.destination.is_none() {
            return Err(GameError::IncompleteSetup("no destination placed"));
        }
        let ship = self
            .ship
            .ok_or(GameError::IncompleteSetup("ship not configured"))?;
        GameEngine::new(self.map, ship)
    }
}
