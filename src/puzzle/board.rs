// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the board of a sliding tile puzzle (the 8-puzzle being
//! the 3x3 instance of the family) and the moves one can make on it.

use std::{fmt::{self, Display}, num::ParseIntError, str::FromStr};

/// The value standing for the blank cell of a board
pub const BLANK: u8 = 0;

/// A board cannot hold more tiles than there are distinct `u8` values
pub const MAX_TILES: usize = 256;

/// This enumeration simply groups the kind of errors that might occur when
/// building a board. These are the reasons why a board is not a legal
/// configuration of the puzzle.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A board must have at least one row and one column
    #[error("a board must have at least one row and one column")]
    Empty,
    /// The board has more tiles than what can be represented
    #[error("a board may not hold more than {MAX_TILES} tiles ({0} requested)")]
    TooLarge(usize),
    /// The number of tiles does not match the dimensions of the board
    #[error("a {rows}x{cols} board needs {expected} tiles but {actual} were given")]
    WrongSize { rows: usize, cols: usize, expected: usize, actual: usize },
    /// The number of tiles does not allow to infer the side of a square board
    #[error("{0} tiles do not form a square board")]
    NotSquare(usize),
    /// Some tile falls outside of the range `0 .. rows * cols`
    #[error("tile {tile} is out of range (tiles go from 0 to {max})")]
    TileOutOfRange { tile: u8, max: usize },
    /// Some tile appears more than once
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    /// The initial board and the goal do not have the same dimensions
    #[error("a {0}x{1} board cannot be solved towards a {2}x{3} goal")]
    DimensionMismatch(usize, usize, usize, usize),
    /// The parser expected to read something that was a tile but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
}

/// The direction in which the blank travels when a move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Right,
    Down,
    Left,
    Up,
}
impl Move {
    /// All moves, in the order in which the successors of a board are generated
    pub const ALL: [Move; 4] = [Move::Right, Move::Down, Move::Left, Move::Up];

    /// The (row, column) displacement of the blank
    pub fn offset(self) -> (isize, isize) {
        match self {
            Move::Right => ( 0,  1),
            Move::Down  => ( 1,  0),
            Move::Left  => ( 0, -1),
            Move::Up    => (-1,  0),
        }
    }
    /// The move that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Move::Right => Move::Left,
            Move::Down  => Move::Up,
            Move::Left  => Move::Right,
            Move::Up    => Move::Down,
        }
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Right => "right",
            Move::Down  => "down",
            Move::Left  => "left",
            Move::Up    => "up",
        };
        write!(f, "{s}")
    }
}

/// A `rows x cols` grid holding each of the values `0 .. rows * cols` exactly
/// once, `0` being the blank. A board is an immutable value: playing a move
/// yields a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    rows : usize,
    cols : usize,
    /// The position of the blank in `tiles`
    blank: usize,
    /// The tiles in row major order
    tiles: Box<[u8]>,
}

impl Board {
    /// Creates a board after having checked that the given tiles form a legal
    /// configuration of a `rows x cols` puzzle.
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// assert!(Board::new(2, 2, vec![1, 2, 3, 0]).is_ok());
    /// assert!(Board::new(2, 2, vec![1, 2, 2, 0]).is_err());
    /// assert!(Board::new(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::Empty);
        }
        let expected = rows.saturating_mul(cols);
        if expected > MAX_TILES {
            return Err(BoardError::TooLarge(expected));
        }
        if tiles.len() != expected {
            return Err(BoardError::WrongSize { rows, cols, expected, actual: tiles.len() });
        }

        let mut seen = vec![false; expected];
        for &tile in tiles.iter() {
            let t = tile as usize;
            if t >= expected {
                return Err(BoardError::TileOutOfRange { tile, max: expected - 1 });
            }
            if seen[t] {
                return Err(BoardError::DuplicateTile(tile));
            }
            seen[t] = true;
        }

        // all values are present exactly once, hence so is the blank
        let blank = tiles.iter().position(|t| *t == BLANK).unwrap_or_default();
        Ok(Board { rows, cols, blank, tiles: tiles.into_boxed_slice() })
    }

    /// Returns the conventional goal of a `rows x cols` puzzle: the tiles in
    /// ascending order, with the blank in the bottom right corner.
    ///
    /// # Note:
    /// The dimensions are assumed to be valid (at least one row and one column
    /// and no more than `MAX_TILES` tiles in total).
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// let goal = Board::goal(3, 3);
    /// assert_eq!(&[1, 2, 3, 4, 5, 6, 7, 8, 0], goal.tiles());
    /// ```
    pub fn goal(rows: usize, cols: usize) -> Self {
        let size  = rows * cols;
        let tiles = (1..size).map(|t| t as u8).chain(std::iter::once(BLANK)).collect::<Vec<u8>>();
        Board { rows, cols, blank: size - 1, tiles: tiles.into_boxed_slice() }
    }

    /// The number of rows of the board
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// The number of columns of the board
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// The number of cells of the board (blank included)
    pub fn size(&self) -> usize {
        self.tiles.len()
    }
    /// The tiles in row major order
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }
    /// The tile at the given row and column
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.cols + col]
    }
    /// The (row, column) coordinates of the blank
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }
    /// The (row, column) coordinates of the given tile, if it is on the board
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles.iter().position(|t| *t == tile).map(|i| (i / self.cols, i % self.cols))
    }

    /// Returns the board obtained by sliding the blank in the given direction
    /// or none if that would move the blank off the board. `self` is left
    /// untouched.
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// let goal = Board::goal(3, 3);
    /// assert!(goal.slide(Move::Right).is_none());
    /// assert!(goal.slide(Move::Down).is_none());
    ///
    /// let next = goal.slide(Move::Left).unwrap();
    /// assert_eq!(&[1, 2, 3, 4, 5, 6, 7, 0, 8], next.tiles());
    /// ```
    pub fn slide(&self, mv: Move) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc)   = mv.offset();
        let nrow = row.checked_add_signed(dr).filter(|r| *r < self.rows)?;
        let ncol = col.checked_add_signed(dc).filter(|c| *c < self.cols)?;

        let dest = nrow * self.cols + ncol;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, dest);
        Some(Board { rows: self.rows, cols: self.cols, blank: dest, tiles })
    }

    /// Iterates over all the boards that are one move away from this one.
    /// The moves are tried in the order given by `Move::ALL`.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL.into_iter().filter_map(move |mv| self.slide(mv).map(|b| (mv, b)))
    }

    /// Returns the move leading from this board to `next` (if there is one)
    pub fn move_towards(&self, next: &Board) -> Option<Move> {
        self.successors().find(|(_, b)| b == next).map(|(mv, _)| mv)
    }

    /// Returns true iff the `goal` can be reached from this board.
    ///
    /// Every move swaps the blank with one of its neighbours. It hence flips
    /// the parity of the permutation that maps this board onto the goal as
    /// well as the parity of the distance between the blank and its goal
    /// position. The goal is thus reachable iff these two parities agree.
    /// (When the board is a single row or column, the tiles can only shift
    /// and their order must be the same as in the goal.)
    ///
    /// # Example
    /// ```
    /// # use bestfirst::puzzle::*;
    /// let goal = Board::goal(3, 3);
    /// let swapped = Board::new(3, 3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert!(goal.is_solvable(&goal));
    /// assert!(!swapped.is_solvable(&goal));
    /// ```
    pub fn is_solvable(&self, goal: &Board) -> bool {
        if self.rows != goal.rows || self.cols != goal.cols {
            return false;
        }
        if self.rows == 1 || self.cols == 1 {
            let mine   = self.tiles.iter().filter(|t| **t != BLANK);
            let theirs = goal.tiles.iter().filter(|t| **t != BLANK);
            return mine.eq(theirs);
        }

        let mut target = vec![0; self.size()];
        for (pos, tile) in goal.tiles.iter().enumerate() {
            target[*tile as usize] = pos;
        }

        // parity of the permutation = parity of (size - number of cycles)
        let mut done   = vec![false; self.size()];
        let mut cycles = 0;
        for start in 0..self.size() {
            if done[start] {
                continue;
            }
            cycles += 1;
            let mut pos = start;
            while !done[pos] {
                done[pos] = true;
                pos = target[self.tiles[pos] as usize];
            }
        }
        let permutation_parity = (self.size() - cycles) % 2;

        let (br, bc) = self.blank();
        let (gr, gc) = goal.blank();
        let blank_parity = (br.abs_diff(gr) + bc.abs_diff(gc)) % 2;

        permutation_parity == blank_parity
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols) {
            let line = row.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses a square board from a whitespace separated list of tiles given in
/// row major order (e.g. "1 2 3 4 5 6 7 8 0").
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s.split_whitespace()
            .map(|t| t.parse::<u8>())
            .collect::<Result<Vec<u8>, ParseIntError>>()?;

        let side = (1..=tiles.len()).find(|s| s * s >= tiles.len()).unwrap_or_default();
        if side * side != tiles.len() || side == 0 {
            return Err(BoardError::NotSquare(tiles.len()));
        }
        Board::new(side, side, tiles)
    }
}
