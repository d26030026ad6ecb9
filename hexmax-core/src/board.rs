//! Board model: a ragged grid of cells indexed by (column, line)

use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, SearchError};

/// One of the two players
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric identity as stored on the board
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    /// 0 for empty, otherwise the owner's code
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(player) => player.code(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code == 0 {
            return Ok(Cell::Empty);
        }
        Player::from_code(code).map(Cell::Taken).ok_or(code)
    }
}

/// A board coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub column: usize,
    pub line: usize,
}

impl Coord {
    pub const fn new(column: usize, line: usize) -> Self {
        Self { column, line }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.line)
    }
}

/// Game board
///
/// Stored column-major: `columns[c][l]` is the cell at column `c`, line `l`.
/// Columns may have different heights. Serialized as nested arrays of cell
/// codes, e.g. `[[0, 1, 0], [2, 0]]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    columns: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board from cell columns
    pub fn new(columns: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        if columns.is_empty() {
            return Err(BoardError::Empty);
        }
        Ok(Self { columns })
    }

    /// Build an all-empty board with the given column heights
    pub fn empty(heights: &[usize]) -> Result<Self, BoardError> {
        Self::new(heights.iter().map(|&h| vec![Cell::Empty; h]).collect())
    }

    /// Build a board from numeric cell codes (0 empty, 1 and 2 players)
    pub fn from_codes(codes: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let mut columns = Vec::with_capacity(codes.len());
        for (column, col) in codes.into_iter().enumerate() {
            let cells = col
                .into_iter()
                .enumerate()
                .map(|(line, code)| {
                    Cell::try_from(code).map_err(|code| BoardError::InvalidCell { column, line, code })
                })
                .collect::<Result<Vec<_>, _>>()?;
            columns.push(cells);
        }
        Self::new(columns)
    }

    /// Numeric cell codes, column by column
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.columns
            .iter()
            .map(|col| col.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    /// Load from a JSON file of nested cell codes
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file: {}", path.display()))?;
        let board = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board file: {}", path.display()))?;
        Ok(board)
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    /// Height of a column (0 for a column past the edge)
    pub fn height(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, Vec::len)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.line < self.height(coord.column)
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.columns.get(coord.column)?.get(coord.line).copied()
    }

    /// Cell at `coord`, reporting an out-of-range coordinate as an error
    pub fn require(&self, coord: Coord) -> Result<Cell, SearchError> {
        self.get(coord).ok_or(SearchError::OutOfBounds(coord))
    }

    /// Cell at `coord`
    ///
    /// # Panics
    /// If `coord` is outside the board.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.columns[coord.column][coord.line]
    }

    /// Overwrite a cell
    ///
    /// # Panics
    /// If `coord` is outside the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.columns[coord.column][coord.line] = cell;
    }

    /// Empty cells in scan order: column by column, then line by line
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, col)| {
            col.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(line, _)| Coord::new(column, line))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = BoardError;

    fn try_from(codes: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Board::from_codes(codes)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.to_codes()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in &self.columns {
            let line: Vec<String> = col.iter().map(|cell| cell.code().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
