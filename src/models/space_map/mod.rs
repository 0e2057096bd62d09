//! Space map model
//!
//! The square grid the ship travels across. Owns bounds and occupancy
//! checks; every entity is written through [`SpaceMap::place`] so two
//! entities can never share a cell.

pub mod generation;

use super::constants::CellContent;
use super::errors::{GameError, GameResult};
use super::navigation_types::MapSize;
use super::position::Position;

/// n x n grid of cell contents. Indexed cells[y][x].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceMap {
    cells: Vec<Vec<CellContent>>,
}

impl SpaceMap {
    /// An empty map of the given size.
    pub fn new(size: MapSize) -> Self {
        let n = size.value();
        SpaceMap {
            cells: vec![vec![CellContent::Empty; n]; n],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// True when `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// Content at `pos`, or `None` when off the map.
    pub fn get(&self, pos: Position) -> Option<CellContent> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[pos.y as usize][pos.x as usize])
    }

    /// Overwrite a cell unconditionally. Used by the game loop for ship and terminal markers.
    pub fn set(&mut self, pos: Position, content: CellContent) -> GameResult<()> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        self.cells[pos.y as usize][pos.x as usize] = content;
        Ok(())
    }

    /// Overwrite (0, 0). Every map built from a `MapSize` has that cell.
    pub fn set_origin(&mut self, content: CellContent) {
        self.cells[0][0] = content;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellContent::Empty)
    }

    /// Write `content` into an empty, in-bounds cell.
    pub fn place(&mut self, pos: Position, content: CellContent) -> GameResult<()> {
        match self.get(pos) {
            None => Err(GameError::OutOfBounds(pos)),
            Some(CellContent::Empty) => self.set(pos, content),
            Some(existing) => Err(GameError::Occupied {
                position: pos,
                symbol: existing.symbol(),
            }),
        }
    }

    /// Iterate rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellContent]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn count(&self, content: CellContent) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == content).count()
    }

    pub fn empty_cells(&self) -> usize {
        self.count(CellContent::Empty)
    }
}
