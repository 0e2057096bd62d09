pub const MIN_MAP_SIZE: usize = 2;
pub const MAX_MAP_SIZE: usize = 1000;

pub const MIN_FUEL: u32 = 1;
pub const MAX_FUEL: u32 = 99;
pub const MAX_HEALTH: u32 = 3;

pub const ORIGIN_NAME: &str = "Kepler-452b";
pub const DESTINATION_NAME: &str = "Sector 9-Delta";

/// What occupies a single cell of the space map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellContent {
    Empty,
    Ship,
    Destination,
    Asteroid,
    Enemy,
    Mineral,
    RepairStation,
    /// Terminal marker left where the ship completed its mission.
    Win,
    /// Terminal marker left where the ship was lost.
    Loss,
}

impl CellContent {
    /// The four kinds a player may scatter after placing the destination.
    pub const PLACEABLE: [CellContent; 4] = [
        CellContent::Asteroid,
        CellContent::Enemy,
        CellContent::Mineral,
        CellContent::RepairStation,
    ];

    pub fn symbol(&self) -> char {
        match self {
            CellContent::Empty => ' ',
            CellContent::Ship => '@',
            CellContent::Destination => 'X',
            CellContent::Asteroid => '.',
            CellContent::Enemy => 'E',
            CellContent::Mineral => 'M',
            CellContent::RepairStation => 'R',
            CellContent::Win => 'W',
            CellContent::Loss => 'L',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(CellContent::Empty),
            '@' => Some(CellContent::Ship),
            'X' => Some(CellContent::Destination),
            '.' => Some(CellContent::Asteroid),
            'E' => Some(CellContent::Enemy),
            'M' => Some(CellContent::Mineral),
            'R' => Some(CellContent::RepairStation),
            'W' => Some(CellContent::Win),
            'L' => Some(CellContent::Loss),
            _ => None,
        }
    }

    /// Parse a hazard/waypoint token typed during placement.
    /// Only the four placeable kinds are accepted.
    pub fn placeable_from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let symbol = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        CellContent::from_symbol(symbol).filter(|content| content.is_placeable())
    }

    pub fn is_placeable(&self) -> bool {
        CellContent::PLACEABLE.contains(self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellContent::Empty => "Empty",
            CellContent::Ship => "Ship",
            CellContent::Destination => "Destination",
            CellContent::Asteroid => "Asteroid",
            CellContent::Enemy => "Enemy",
            CellContent::Mineral => "Mineral",
            CellContent::RepairStation => "Repair Station",
            CellContent::Win => "Win",
            CellContent::Loss => "Loss",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_for_every_kind() {
        let all = [
            CellContent::Empty,
            CellContent::Ship,
            CellContent::Destination,
            CellContent::Asteroid,
            CellContent::Enemy,
            CellContent::Mineral,
            CellContent::RepairStation,
            CellContent::Win,
            CellContent::Loss,
        ];
        for content in all {
            assert_eq!(CellContent::from_symbol(content.symbol()), Some(content));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(CellContent::from_symbol('Z'), None);
        assert_eq!(CellContent::from_symbol('e'), None);
    }

    #[test]
    fn only_hazards_and_waypoints_are_placeable() {
        assert_eq!(CellContent::placeable_from_token("E"), Some(CellContent::Enemy));
        assert_eq!(CellContent::placeable_from_token("."), Some(CellContent::Asteroid));
        assert_eq!(CellContent::placeable_from_token("X"), None);
        assert_eq!(CellContent::placeable_from_token("@"), None);
        assert_eq!(CellContent::placeable_from_token("W"), None);
        assert_eq!(CellContent::placeable_from_token("EE"), None);
        assert_eq!(CellContent::placeable_from_token(""), None);
    }
}
