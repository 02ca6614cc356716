//! The n×n Push board and its transitions.
//!
//! Boards are values: `apply_move` borrows the current board and returns a
//! fresh one, so a board stored in history can never be changed by later
//! play. Top/Bottom pushes are implemented as Left/Right pushes on the
//! transposed grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;
use std::str::FromStr;

use super::action::Move;
use super::error::{InvalidMoveError, ParseBoardError};
use super::player::{Cell, Player, PlayerMap};

/// Scratch buffer for one row/column; boards up to 8 wide stay on the stack.
type Line = SmallVec<[Cell; 8]>;

/// Square grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form; only reachable through `TryFrom`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ParseBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let len = raw.cells.len();
        if raw.size.checked_mul(raw.size) != Some(len) {
            return Err(ParseBoardError::CellCount {
                size: raw.size,
                len,
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty `size`x`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at 0-based `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Cells of 0-based `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; an empty board has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Piece(player))
            .count()
    }

    /// Rows become columns.
    #[must_use]
    pub fn transpose(&self) -> Board {
        let n = self.size;
        let cells = (0..n)
            .flat_map(|r| (0..n).map(move |c| self.get(c, r)))
            .collect();
        Board { size: n, cells }
    }

    /// Column order reversed (left-right mirror).
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let cells = self
            .rows()
            .flat_map(|row| row.iter().rev().copied())
            .collect();
        Board {
            size: self.size,
            cells,
        }
    }

    /// Cells `(i, i)` from top-left to bottom-right.
    fn main_diagonal(&self) -> Line {
        (0..self.size).map(|i| self.get(i, i)).collect()
    }

    /// Apply a push move, returning the resulting board.
    ///
    /// Fails if `mv.index` is not in `1..=size`. `self` is never modified.
    ///
    /// ```
    /// use rust_push::core::{Board, Edge, Move, Player};
    ///
    /// let board = Board::new(4);
    /// let next = board.apply_move(&Move::new(Player::X, Edge::Left, 1)).unwrap();
    /// assert_eq!(next.to_string().lines().next(), Some("X..."));
    /// assert_eq!(board, Board::new(4));
    /// ```
    pub fn apply_move(&self, mv: &Move) -> Result<Board, InvalidMoveError> {
        if mv.index < 1 || mv.index > self.size {
            return Err(InvalidMoveError::IndexOutOfRange {
                index: mv.index,
                size: self.size,
            });
        }

        let vertical = mv.edge.is_vertical();
        let mut next = if vertical { self.transpose() } else { self.clone() };
        next.push_row(mv.index - 1, mv.player, mv.edge.enters_at_start());
        if vertical {
            next = next.transpose();
        }
        Ok(next)
    }

    /// Push `player` into 0-based `row` from the left (`from_start`) or right.
    ///
    /// The empty cell nearest the entry side makes room. When the row is full
    /// the cell at the far end falls off.
    fn push_row(&mut self, row: usize, player: Player, from_start: bool) {
        let n = self.size;
        let slot = &mut self.cells[row * n..(row + 1) * n];
        let mut line: Line = SmallVec::from_slice(slot);

        if from_start {
            let gap = line.iter().position(|c| c.is_empty()).unwrap_or(n - 1);
            line.remove(gap);
            line.insert(0, Cell::Piece(player));
        } else {
            let gap = line.iter().rposition(|c| c.is_empty()).unwrap_or(0);
            line.remove(gap);
            line.push(Cell::Piece(player));
        }

        slot.copy_from_slice(&line);
    }

    /// Count full single-owner lines: every row, every column, and both
    /// main diagonals.
    ///
    /// ```
    /// use rust_push::core::{Board, Player};
    ///
    /// let board: Board = "XXX\n...\n...".parse().unwrap();
    /// let counts = board.count_straights();
    /// assert_eq!(counts[Player::X], 1);
    /// assert_eq!(counts[Player::O], 0);
    /// ```
    #[must_use]
    pub fn count_straights(&self) -> StraightCounts {
        let mut counts = StraightCounts::default();

        for row in self.rows() {
            counts.record(line_owner(row.iter().copied()));
        }
        counts.record(line_owner(self.main_diagonal()));

        let columns = self.transpose();
        for column in columns.rows() {
            counts.record(line_owner(column.iter().copied()));
        }
        counts.record(line_owner(self.mirrored().main_diagonal()));

        counts
    }
}

/// The player owning every cell of a line, if there is one.
fn line_owner(line: impl IntoIterator<Item = Cell>) -> Option<Player> {
    let mut cells = line.into_iter();
    let owner = cells.next()?.owner()?;
    cells
        .all(|c| c == Cell::Piece(owner))
        .then_some(owner)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the printed form: one line per row, `.` for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = lines.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseBoardError::NotSquare {
                    rows: size,
                    row,
                    len,
                });
            }
            for c in line.chars() {
                cells.push(Cell::from_symbol(c).ok_or(ParseBoardError::UnknownCell(c))?);
            }
        }

        Ok(Board { size, cells })
    }
}

/// Straight counts per player, plus the number of lines owned by nobody.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StraightCounts {
    players: PlayerMap<u32>,
    /// Lines checked that are not a straight.
    pub none: u32,
}

impl StraightCounts {
    fn record(&mut self, owner: Option<Player>) {
        match owner {
            Some(p) => self.players[p] += 1,
            None => self.none += 1,
        }
    }

    /// Count for a player, or for "nobody" when `owner` is `None`.
    #[must_use]
    pub fn get(&self, owner: Option<Player>) -> u32 {
        match owner {
            Some(p) => self.players[p],
            None => self.none,
        }
    }

    /// The player with strictly more straights, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let (x, o) = (self.players[Player::X], self.players[Player::O]);
        match x.cmp(&o) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Index<Player> for StraightCounts {
    type Output = u32;

    fn index(&self, player: Player) -> &u32 {
        &self.players[player]
    }
}
