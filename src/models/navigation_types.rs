//! Type-safe wrappers for configuration and command values

use std::fmt;
use std::str::FromStr;

use super::constants::{MAX_FUEL, MAX_MAP_SIZE, MIN_FUEL, MIN_MAP_SIZE};
use super::errors::GameError;

/// Side length of the square space map (2 <= n <= 1000)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize(usize);

impl MapSize {
    pub fn new(value: i64) -> Result<Self, GameError> {
        if value < MIN_MAP_SIZE as i64 {
            return Err(GameError::MapSizeTooSmall);
        }
        if value > MAX_MAP_SIZE as i64 {
            return Err(GameError::MapSizeTooLarge { max: MAX_MAP_SIZE });
        }
        Ok(MapSize(value as usize))
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl FromStr for MapSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GameError::NotAnInteger { what: "map_size" })?;
        MapSize::new(value)
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Starting fuel (1 to 99)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelLevel(u32);

impl FuelLevel {
    pub fn new(value: i64) -> Result<Self, GameError> {
        if value < MIN_FUEL as i64 {
            Err(GameError::FuelTooLow)
        } else if value > MAX_FUEL as i64 {
            Err(GameError::FuelTooHigh)
        } else {
            Ok(FuelLevel(value as u32))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for FuelLevel {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GameError::NotAnInteger { what: "fuel" })?;
        FuelLevel::new(value)
    }
}

/// Non-blank ship name. Surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipName(String);

impl ShipName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for ShipName {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(GameError::EmptyShipName);
        }
        Ok(ShipName(name.to_string()))
    }
}

/// Compass direction for a one-cell move.
/// North is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step as (delta_x, delta_y).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// One command typed at the `AWAITING COMMANDS` prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Map,
    Status,
    Move(Direction),
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = s.trim().to_lowercase();
        match command.as_str() {
            "map" => Ok(Command::Map),
            "status" => Ok(Command::Status),
            "n" => Ok(Command::Move(Direction::North)),
            "e" => Ok(Command::Move(Direction::East)),
            "s" => Ok(Command::Move(Direction::South)),
            "w" => Ok(Command::Move(Direction::West)),
            "q" => Ok(Command::Quit),
            _ => Err(GameError::UnrecognisedCommand(command)),
        }
    }
}
