use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// A 3x3 grid. Coordinates outside `0..BOARD_SIZE` are never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Writes `mark` at `pos`; returns false (and changes nothing) when `pos`
    /// is off the board.
    pub fn set(&mut self, pos: Position, mark: Mark) -> bool {
        match self.cells.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(cell) => {
                *cell = mark;
                true
            }
            None => false,
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }
}
